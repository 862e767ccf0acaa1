//! Upload form controller

use crate::api::{ContentApi, HttpContentApi, UploadOutcome, UploadPayload, UPLOAD_FAILED_MESSAGE};
use crate::config::{UploadConfig, API_URL_ENV};
use crate::state::{AppState, Form, ImageAttachment, SubmissionStatus, IMAGE_FIELD, THEME_FIELD};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Shown when a required field is empty on submit
pub const REQUIRED_FIELD_MESSAGE: &str = "Please fill out this field.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Content API the form is posted to
    api: Arc<dyn ContentApi>,
    /// Receiver for the outcome of the request in flight
    in_flight: Option<oneshot::Receiver<UploadOutcome>>,
}

impl App {
    /// Create a new App talking to the configured content API
    pub fn new(config: &UploadConfig) -> Self {
        if config.api_base_url().is_empty() {
            tracing::warn!("No content API base URL configured (set {API_URL_ENV})");
        }
        let api = HttpContentApi::new(config.api_base_url());
        let state = AppState::new(api.endpoint().to_string(), config.toast_duration());
        Self::with_api(Arc::new(api), state)
    }

    pub fn with_api(api: Arc<dyn ContentApi>, state: AppState) -> Self {
        Self {
            state,
            api,
            in_flight: None,
        }
    }

    /// Per-frame housekeeping: collect the upload outcome and expire toasts
    pub fn tick(&mut self) {
        self.poll_submission();
        self.state.notifications.expire();
    }

    /// Handle a key press on the upload form
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let active = self.state.form.active_field();
        let on_submit_row = self.state.form.is_submit_row_active();
        let submit_shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER);

        match key.code {
            KeyCode::Char('s') if submit_shortcut => {
                self.submit();
            }
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Esc => {
                self.state.notifications.dismiss_latest();
            }
            KeyCode::Enter if on_submit_row => {
                self.submit();
            }
            KeyCode::Enter if active == IMAGE_FIELD => self.select_image_from_input().await,
            KeyCode::Left if active == THEME_FIELD => self.state.form.theme.prev_choice(),
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') if active == THEME_FIELD => {
                self.state.form.theme.next_choice()
            }
            KeyCode::Enter if self.state.form.is_active_field_multiline() => {
                self.state.form_input_char('\n')
            }
            // Enter in a single-line input submits the form
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle bracketed paste
    pub fn handle_paste(&mut self, text: &str) {
        self.state.form_paste(text);
    }

    /// Submit the form.
    ///
    /// Returns true when a request was issued. While a request is in flight
    /// this is a no-op; the form stays editable and later edits only affect
    /// the next submission.
    pub fn submit(&mut self) -> bool {
        if self.state.submission.is_submitting() {
            tracing::debug!("Upload already in flight, ignoring submit");
            return false;
        }

        if let Some(index) = self.state.form.first_missing_required() {
            let label = self
                .state
                .form
                .get_field(index)
                .map(|f| f.label)
                .unwrap_or_default();
            self.state.form.set_active_field(index);
            self.state
                .notifications
                .warning(format!("{label}: {REQUIRED_FIELD_MESSAGE}"));
            return false;
        }

        let payload = UploadPayload::from_form(&self.state.form);
        tracing::info!(
            theme = %self.state.form.theme.wire_value(),
            has_image = self.state.form.image.is_some(),
            "Uploading content to {}",
            self.state.endpoint
        );

        let api = Arc::clone(&self.api);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = UploadOutcome::from_result(api.post_content(payload).await);
            // Receiver is only gone when the app has exited
            let _ = tx.send(outcome);
        });

        self.in_flight = Some(rx);
        self.state.submission = SubmissionStatus::Submitting;
        true
    }

    /// Apply the outcome of the request in flight once it has arrived
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.in_flight.as_mut() else {
            return;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => {
                tracing::error!("Upload task ended without an outcome");
                UploadOutcome::Failed
            }
        };

        self.in_flight = None;
        self.finish_submission(outcome);
    }

    fn finish_submission(&mut self, outcome: UploadOutcome) {
        self.state.submission = SubmissionStatus::Idle;

        match outcome {
            UploadOutcome::Created { message } => {
                tracing::info!("Content uploaded: {message}");
                self.state.notifications.success(message);
                self.state.form.reset();
            }
            UploadOutcome::Rejected { status, body } => {
                tracing::warn!("Content API rejected upload ({status}): {}", body.trim_end());
                self.state.notifications.error(body);
            }
            UploadOutcome::Failed => {
                self.state.notifications.error(UPLOAD_FAILED_MESSAGE);
            }
        }
    }

    /// Pick the file at the typed path. An empty path is an empty selection.
    async fn select_image_from_input(&mut self) {
        let path = self.state.form.image_path.as_text().trim().to_string();
        if path.is_empty() {
            self.state.form.select_image(None);
            return;
        }

        match ImageAttachment::pick(Path::new(&path)).await {
            Ok(image) => {
                tracing::info!("Selected image {} ({})", image.file_name, image.size_label());
                self.state.form.select_image(Some(image));
                self.state.form.image_path.clear();
            }
            Err(e) => {
                tracing::warn!("Image selection failed: {e}");
                self.state.notifications.error(e.to_string());
            }
        }
    }
}
