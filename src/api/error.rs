//! API Error Types
//!
//! Errors the HTTP layer can produce. Request handlers themselves never
//! surface errors: a lookup miss is an empty result mapped to 404 by
//! convention, so everything here happens at startup or bind time and is
//! fatal to the process.

use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failed to bind or serve on the configured address
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
