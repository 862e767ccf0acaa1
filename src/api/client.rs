//! HTTP client for the Novissima content API
//!
//! Sends the upload form as `multipart/form-data` to `{base}/content`.

use super::error::ApiError;
use super::payload::UploadPayload;
use super::response::ContentResponse;
use super::traits::ContentApi;
use async_trait::async_trait;

/// Client for the content API
pub struct HttpContentApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContentApi {
    /// Create a client for the given base URL.
    ///
    /// The base URL is not validated; an empty one surfaces as a request
    /// error on the first upload.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: content_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn post_content(&self, payload: UploadPayload) -> Result<ContentResponse, ApiError> {
        let form = payload.into_multipart()?;

        tracing::debug!("POST {}", self.endpoint);
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("Content API answered {status}");

        Ok(ContentResponse { status, body })
    }
}

/// `{base}/content`, tolerating a trailing slash on the base
fn content_endpoint(base_url: &str) -> String {
    format!("{}/content", base_url.trim_end_matches('/'))
}
