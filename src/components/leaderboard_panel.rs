use yew::prelude::*;

use crate::model::LeaderboardRow;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardPanelProps {
    pub rows: Vec<LeaderboardRow>,
}

#[function_component]
pub fn LeaderboardPanel(props: &LeaderboardPanelProps) -> Html {
    let panel_style = "background:rgba(0,255,136,0.1); padding:15px; border-radius:15px; min-width:250px;";
    if props.rows.is_empty() {
        return html! {
            <div style={format!("{} text-align:center;", panel_style)}>
                <p style="color:#888;">{"Noch keine Einträge!"}</p>
                <p style="color:#00ff88;">{"Sei der Erste! 🏆"}</p>
            </div>
        };
    }
    html! {
        <div style={panel_style}>
            <h3 style="color:#00ff88; margin:0 0 10px 0; font-size:1.2rem;">{ format!("🏆 Top {}", props.rows.len()) }</h3>
            { for props.rows.iter().map(|row| {
                let style = if row.highlight {
                    "padding:4px 0; color:#00ff88; font-weight:bold; font-size:1.1rem;"
                } else {
                    "padding:4px 0; color:#fff; font-size:0.95rem;"
                };
                html! {
                    <div key={row.rank.to_string()} {style}>
                        <span style="display:inline-block; width:25px;">{ format!("{}.", row.rank) }</span>
                        <span style="display:inline-block; width:100px;">{ row.name.clone() }</span>
                        <span style="color:#ff4444; font-weight:bold;">{ row.score }</span>
                        <span style="color:#666; font-size:0.8rem; margin-left:5px;">{ format!("({})", row.date) }</span>
                    </div>
                }
            }) }
        </div>
    }
}
