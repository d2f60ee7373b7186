//! Error types for the JSON ingestion path.
//!
//! Emission itself is infallible — [`crate::emit`] returns a plain `String`.
//! The only operation that can fail is turning JSON text into a [`crate::Value`]
//! tree.

use thiserror::Error;

/// Errors produced while building a tree from external input.
#[derive(Error, Debug)]
pub enum RclError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout rcl-core.
pub type Result<T> = std::result::Result<T, RclError>;
