//! Error type shared by the overlay modules.
//!
//! None of these errors reach the hosting application: lifecycle and render
//! entry points log them and degrade to "overlay does nothing".

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    #[error("overlay container is not available")]
    ContainerUnavailable,

    #[error("2d drawing context is not available")]
    ContextUnavailable,

    #[error("host call failed: {0}")]
    Host(String),

    #[error("invalid overlay config: {0}")]
    InvalidConfig(String),

    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl From<JsValue> for OverlayError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Host(message)
    }
}

impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}
