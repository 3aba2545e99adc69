use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, HtmlMediaElement, Window};

use crate::error::GameError;

pub fn window() -> Result<Window, GameError> {
    web_sys::window().ok_or(GameError::NoWindow)
}

pub fn document() -> Result<Document, GameError> {
    window()?.document().ok_or(GameError::NoDocument)
}

pub fn play_quietly(media: &HtmlMediaElement) {
    match media.play() {
        Ok(promise) => {
            let ignore = Closure::wrap(Box::new(|e: JsValue| {
                log::debug!("playback blocked: {:?}", e);
            }) as Box<dyn FnMut(JsValue)>);
            let _ = promise.catch(&ignore);
            ignore.forget();
        }
        Err(e) => log::debug!("playback failed: {:?}", e),
    }
}

pub fn set_display(element: &HtmlElement, value: &str) {
    if element.style().set_property("display", value).is_err() {
        log::warn!("could not set display on #{}", element.id());
    }
}

pub fn target_id(target: Option<web_sys::EventTarget>) -> Option<String> {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.id())
}
