//! Error types for SCB data access.

use std::io;

use thiserror::Error;

/// Errors from fetching, decoding, or caching SCB seat data.
///
/// All variants are hard failures: the caller gets no partial data, and no
/// retry is attempted at this level.
#[derive(Debug, Error)]
pub enum ScbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SCB API returned status {code}")]
    Status { code: u16 },

    #[error("Failed to decode seat data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unexpected response shape: {0}")]
    Shape(String),
}
