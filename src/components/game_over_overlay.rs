use yew::prelude::*;

use super::leaderboard_panel::LeaderboardPanel;
use crate::model::LeaderboardRow;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub high_score: bool,
    pub rows: Vec<LeaderboardRow>,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_: MouseEvent| restart_cb.emit(()));
    html! {
        <div id="game-over" style="position:absolute; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:12px; background:rgba(0,0,0,0.85); z-index:30;">
            <h2 style="margin:0; color:#ff4444;">{"Game Over"}</h2>
            <p style="margin:0; color:#fff; font-size:1.2rem;">{"Punkte: "}<span style="color:#00ff88; font-weight:bold;">{ props.score }</span></p>
            if props.high_score {
                <p style="margin:0; color:#ffd700; font-weight:bold;">{"Neuer Highscore!"}</p>
            }
            <LeaderboardPanel rows={props.rows.clone()} />
            <button onclick={restart_btn} style="padding:10px 28px; border:none; border-radius:10px; background:#00ff88; color:#1a1a2e; font-weight:bold;">{"Nochmal spielen"}</button>
        </div>
    }
}
