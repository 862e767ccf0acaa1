//! Multipart payload captured from the form

use crate::state::UploadForm;
use reqwest::multipart::{Form, Part};

/// Body of a single multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    Text(String),
    File {
        file_name: String,
        mime_type: &'static str,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadPart {
    pub name: &'static str,
    pub body: PartBody,
}

/// Owned snapshot of the form, independent of later edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    parts: Vec<PayloadPart>,
}

impl UploadPayload {
    /// Capture the form by value.
    ///
    /// The five text parts are always present, even when empty. The `image`
    /// part is only added when a file is held.
    pub fn from_form(form: &UploadForm) -> Self {
        let mut parts: Vec<PayloadPart> = [
            &form.text_english,
            &form.text_latin,
            &form.theme,
            &form.image_source,
            &form.text_source,
        ]
        .into_iter()
        .map(|field| PayloadPart {
            name: field.name,
            body: PartBody::Text(field.wire_value()),
        })
        .collect();

        if let Some(image) = &form.image {
            parts.push(PayloadPart {
                name: "image",
                body: PartBody::File {
                    file_name: image.file_name.clone(),
                    mime_type: image.mime_type,
                    bytes: image.bytes.clone(),
                },
            });
        }

        Self { parts }
    }

    #[cfg(test)]
    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    /// Value of a text part
    #[cfg(test)]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.body {
            PartBody::Text(value) if p.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Whether a part with this name is present
    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name == name)
    }

    /// Build the reqwest multipart body
    pub fn into_multipart(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new();
        for part in self.parts {
            form = match part.body {
                PartBody::Text(value) => form.text(part.name, value),
                PartBody::File {
                    file_name,
                    mime_type,
                    bytes,
                } => {
                    let file = Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(mime_type)?;
                    form.part(part.name, file)
                }
            };
        }
        Ok(form)
    }
}
