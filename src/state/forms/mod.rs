//! Form domain layer
//!
//! This module provides type-safe form handling for the upload view.

mod attachment;
mod field;
mod form_state;

pub use attachment::ImageAttachment;
pub use field::{FieldValue, FormField, Theme};
pub use form_state::{
    Form, UploadForm, IMAGE_FIELD, IMAGE_SOURCE_FIELD, SUBMIT_ROW, TEXT_ENGLISH_FIELD,
    TEXT_LATIN_FIELD, TEXT_SOURCE_FIELD, THEME_FIELD,
};
