//! Form views

mod field_renderer;
mod upload_form;

pub use upload_form::draw_upload_form;

#[cfg(test)]
pub use upload_form::IMAGE_HINT;
