//! Error types for the content API client

use thiserror::Error;

/// Failures that prevent a response from being received
#[derive(Debug, Error)]
pub enum ApiError {
    /// Building, sending or reading the request failed
    #[error("Request could not be completed: {0}")]
    Request(#[from] reqwest::Error),
}
