/// Core error types for Airtime
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Airtime
#[derive(Error, Debug)]
pub enum CoreError {
    /// Unrecognized content subtype on the wire
    #[error("Unknown content subtype: {0}")]
    UnknownSubtype(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
