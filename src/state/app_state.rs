//! Application state definitions

use super::forms::{Form, UploadForm};
use super::notifications::Notifications;
use super::submission::SubmissionStatus;
use std::time::Duration;

/// Everything the upload view renders
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The single live content record
    pub form: UploadForm,
    pub submission: SubmissionStatus,
    pub notifications: Notifications,
    /// Endpoint shown in the status bar
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: String, toast_duration: Duration) -> Self {
        Self {
            form: UploadForm::new(),
            submission: SubmissionStatus::Idle,
            notifications: Notifications::new(toast_duration),
            endpoint,
        }
    }

    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Type a character into the focused field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
        }
    }

    /// Paste text into the focused field
    pub fn form_paste(&mut self, text: &str) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_str(text);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
        }
    }
}
