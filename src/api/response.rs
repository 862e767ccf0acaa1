//! Interpretation of content API responses

use super::error::ApiError;
use serde::Deserialize;

/// Message shown when no usable response was received
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload content";

/// Raw HTTP response as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentResponse {
    pub status: u16,
    pub body: String,
}

impl ContentResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Body of a 2xx response
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedContent {
    pub message: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
}

/// Terminal result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 2xx with a readable message
    Created { message: String },
    /// Non-2xx, body shown verbatim
    Rejected { status: u16, body: String },
    /// Transport failure or unreadable success body
    Failed,
}

impl UploadOutcome {
    pub fn from_result(result: Result<ContentResponse, ApiError>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Content upload failed: {e}");
                return Self::Failed;
            }
        };

        if !response.is_success() {
            return Self::Rejected {
                status: response.status,
                body: response.body,
            };
        }

        match serde_json::from_str::<CreatedContent>(&response.body) {
            Ok(created) => {
                if let Some(url) = created.image_url.as_deref().filter(|u| !u.is_empty()) {
                    tracing::debug!("Uploaded image available at {url}");
                }
                Self::Created {
                    message: created.message,
                }
            }
            Err(e) => {
                tracing::warn!("Malformed success body ({}): {e}", response.status);
                Self::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: &str) -> Result<ContentResponse, ApiError> {
        Ok(ContentResponse {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn test_ok_with_message() {
        let outcome = UploadOutcome::from_result(response(200, r#"{"message":"ok"}"#));
        assert_eq!(
            outcome,
            UploadOutcome::Created {
                message: "ok".to_string()
            }
        );
    }

    #[test]
    fn test_created_with_image_url() {
        let body = r#"{"message":"Successfully added content: Dies irae","imageURL":"https://cdn/x.png"}"#;
        let outcome = UploadOutcome::from_result(response(201, body));
        assert_eq!(
            outcome,
            UploadOutcome::Created {
                message: "Successfully added content: Dies irae".to_string()
            }
        );
    }

    #[test]
    fn test_rejection_body_is_verbatim() {
        let outcome = UploadOutcome::from_result(response(422, "theme is required"));
        assert_eq!(
            outcome,
            UploadOutcome::Rejected {
                status: 422,
                body: "theme is required".to_string()
            }
        );
    }

    #[test]
    fn test_redirect_status_is_rejected() {
        let outcome = UploadOutcome::from_result(response(304, ""));
        assert!(matches!(outcome, UploadOutcome::Rejected { status: 304, .. }));
    }

    #[test]
    fn test_malformed_success_body_fails() {
        let outcome = UploadOutcome::from_result(response(200, "<html>oops</html>"));
        assert_eq!(outcome, UploadOutcome::Failed);
    }

    #[test]
    fn test_success_without_message_fails() {
        let outcome = UploadOutcome::from_result(response(200, r#"{"imageURL":""}"#));
        assert_eq!(outcome, UploadOutcome::Failed);
    }

    #[test]
    fn test_is_success_range() {
        let ok = ContentResponse {
            status: 299,
            body: String::new(),
        };
        let bad = ContentResponse {
            status: 300,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
