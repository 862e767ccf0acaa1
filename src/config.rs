//! Configuration handling for the upload form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::DEFAULT_TOAST_DURATION;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "NOVISSIMA_API_URL";

/// User configuration for the upload form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UploadConfig {
    /// Base URL of the content API, without the `/content` suffix
    pub api_base_url: Option<String>,
    /// Seconds a notification stays visible
    pub toast_duration_secs: Option<u64>,
}

impl UploadConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "novissima", "novissima-upload")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_base_url = Some(url);
        }
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: UploadConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Base URL, empty when not configured
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or_default()
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UploadConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.toast_duration_secs.is_none());
        assert_eq!(config.api_base_url(), "");
        assert_eq!(config.toast_duration(), DEFAULT_TOAST_DURATION);
    }

    #[test]
    fn test_serialization() {
        let config = UploadConfig {
            api_base_url: Some("https://api.novissima.org".to_string()),
            toast_duration_secs: Some(8),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: UploadConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_base_url,
            Some("https://api.novissima.org".to_string())
        );
        assert_eq!(parsed.toast_duration(), Duration::from_secs(8));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: UploadConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_base_url": "http://localhost:8080", "unknown_field": "value"}"#;
        let parsed: UploadConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = UploadConfig::config_path();
    }

    #[test]
    fn test_load_file_returns_ok() {
        // Default config when the file doesn't exist
        let result = UploadConfig::load_file();
        assert!(result.is_ok());
    }
}
