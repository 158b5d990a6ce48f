use thiserror::Error;
use wasm_bindgen::JsValue;

/// Faults raised while talking to the page or to local storage.
///
/// None of these are fatal: event handlers log them and carry on.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Browser API unavailable: {0}")]
    Unavailable(&'static str),

    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl UiError {
    pub fn dom(err: JsValue) -> Self {
        UiError::Dom(format!("{:?}", err))
    }

    pub fn storage(err: JsValue) -> Self {
        UiError::Storage(format!("{:?}", err))
    }
}
