//! Content API client module

mod client;
mod error;
mod payload;
mod response;
mod traits;

pub use client::HttpContentApi;
pub use error::ApiError;
pub use payload::UploadPayload;
pub use response::{ContentResponse, UploadOutcome, UPLOAD_FAILED_MESSAGE};
pub use traits::ContentApi;

#[cfg(test)]
pub use traits::MockContentApi;
