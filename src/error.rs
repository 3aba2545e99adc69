use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` is not mounted")]
    MissingElement(&'static str),
    #[error("could not get canvas 2d context")]
    CanvasUnavailable,
    #[error("localStorage is unavailable")]
    StorageUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
