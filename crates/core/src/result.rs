//! Result type definition and logging combinators.

use crate::error::Error;

/// The standard Result type for PlantKnight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for Results whose error only needs to be logged.
pub trait ResultExt<T> {
    /// Convert to an Option, logging the error if present.
    fn into_option_logged(self, context: &str) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, context: &str, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("{context} failed: {e}");
                None
            }
        }
    }

    fn or_default_logged(self, context: &str, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("{context} failed, using default: {e}");
                default
            }
        }
    }
}
