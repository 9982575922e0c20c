//! Error types for the browser layer
//!
//! Domain failures live in `plantknight_core::Error`; this covers what only
//! the browser can get wrong (missing route parameters, absent Web APIs,
//! rejected JS calls).

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised by pages and browser glue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Route parameter absent or blank
    #[error("Route parameter '{0}' is missing")]
    MissingRouteParam(&'static str),

    /// A Web API (window, localStorage) is not available
    #[error("Browser API unavailable: {0}")]
    BrowserUnavailable(&'static str),

    /// A JS call threw
    #[error("Browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<UiError> for plantknight_core::Error {
    fn from(err: UiError) -> Self {
        Self::storage(err.to_string())
    }
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, UiError>;
