use thiserror::Error;

/// Errors raised while loading content or mounting the site.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Malformed content: {0}")]
    Content(#[from] serde_json::Error),

    #[error("Content has no {0}")]
    EmptyContent(&'static str),

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PortfolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PortfolioError::Dom(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<PortfolioError> for wasm_bindgen::JsValue {
    fn from(err: PortfolioError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
