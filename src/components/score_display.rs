use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScoreDisplayProps {
    pub score: u32,
}

#[function_component]
pub fn ScoreDisplay(props: &ScoreDisplayProps) -> Html {
    html! {
        <div id="score" style="display:flex; align-items:center; justify-content:center; gap:8px; font-size:1.3rem; color:#fff; margin-bottom:8px;">
            <span style="color:#ff4444;">{"🍎"}</span>
            <span style="font-weight:500;">{"Punkte:"}</span>
            <span style="font-weight:700; font-variant-numeric:tabular-nums; color:#00ff88;">{ props.score }</span>
        </div>
    }
}
