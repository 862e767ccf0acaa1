//! Trait abstraction for the content API to enable mocking in tests

use super::error::ApiError;
use super::payload::UploadPayload;
use super::response::ContentResponse;
use async_trait::async_trait;

/// Trait for content API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Post a content entry. Any received response is `Ok`, whatever its status.
    async fn post_content(&self, payload: UploadPayload) -> Result<ContentResponse, ApiError>;
}
