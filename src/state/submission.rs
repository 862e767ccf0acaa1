//! Submission lifecycle

/// Whether an upload request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Label of the submit button in this state
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Idle => "Upload Content",
            Self::Submitting => "Uploading...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(!SubmissionStatus::default().is_submitting());
    }

    #[test]
    fn test_button_label_follows_status() {
        assert_eq!(SubmissionStatus::Idle.button_label(), "Upload Content");
        assert_eq!(SubmissionStatus::Submitting.button_label(), "Uploading...");
    }
}
