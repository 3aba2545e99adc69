use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const PLAYER_NAME_INPUT_ID: &str = "player-name-input";

#[derive(Properties, PartialEq, Clone)]
pub struct NameScreenProps {
    pub on_start: Callback<String>,
}

#[function_component]
pub fn NameScreen(props: &NameScreenProps) -> Html {
    let input_ref = use_node_ref();

    // Blank names keep the focus in the field instead of starting.
    let submit: Rc<dyn Fn()> = {
        let input_ref = input_ref.clone();
        let on_start = props.on_start.clone();
        Rc::new(move || {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let name = input.value().trim().to_string();
            if name.is_empty() {
                let _ = input.focus();
                return;
            }
            on_start.emit(name);
        })
    };
    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit())
    };
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit();
        }
    });

    html! {
        <div id="name-screen" style="position:absolute; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:14px; background:rgba(26,26,46,0.96); z-index:20;">
            <h1 style="margin:0; color:#00ff88; font-size:2.2rem;">{"🐍 Snake"}</h1>
            <p style="margin:0; color:#aaa;">{"Wie heißt du?"}</p>
            <input ref={input_ref} id={PLAYER_NAME_INPUT_ID} type="text" maxlength="15" placeholder="Dein Name" autofocus={true} {onkeydown}
                style="padding:10px 14px; border-radius:10px; border:2px solid #00ff88; background:#16213e; color:#fff; font-size:1.1rem; text-align:center;" />
            <button {onclick} style="padding:10px 28px; border:none; border-radius:10px; background:#00ff88; color:#1a1a2e; font-weight:bold; font-size:1.1rem;">{"Start"}</button>
            <div style="font-size:12px; opacity:0.6; color:#fff;">{"Pfeiltasten / WASD oder Wischen zum Steuern, Leertaste pausiert"}</div>
        </div>
    }
}
