//! Image file selection

use std::path::Path;
use thiserror::Error;

/// Image file held by the form, read when it was picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Reasons a picked path cannot become the form's image
#[derive(Debug, Error)]
pub enum PickError {
    #[error("{0} is not an image file")]
    NotAnImage(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ImageAttachment {
    /// Read an image from disk.
    ///
    /// Only files with an `image/*` extension are offered, matching the
    /// picker's accept filter. Size and format limits are left to the server.
    pub async fn pick(path: &Path) -> Result<Self, PickError> {
        let display = path.display().to_string();
        let mime_type = image_mime_type(path).ok_or_else(|| PickError::NotAnImage(display.clone()))?;
        let bytes = tokio::fs::read(path).await.map_err(|source| PickError::Read {
            path: display.clone(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(display);

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Human readable size, e.g. "1.2 MB"
    pub fn size_label(&self) -> String {
        let len = self.bytes.len() as f64;
        if len >= 1024.0 * 1024.0 {
            format!("{:.1} MB", len / (1024.0 * 1024.0))
        } else if len >= 1024.0 {
            format!("{:.1} KB", len / 1024.0)
        } else {
            format!("{} B", self.bytes.len())
        }
    }
}

/// MIME type for an image extension, `None` for anything else
fn image_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}
