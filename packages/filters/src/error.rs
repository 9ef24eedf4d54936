//! Typed errors for the filters library.
//!
//! The formatting functions themselves never fail; these cover the edges
//! where the library reads outside input (environment, JSON records).

use thiserror::Error;

/// Errors raised while loading configuration or decoding records.
#[derive(Debug, Error)]
pub enum FilterError {
    /// An environment variable held a value that could not be parsed
    #[error("invalid config value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
