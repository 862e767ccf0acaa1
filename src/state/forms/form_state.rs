//! Upload form state

use super::attachment::ImageAttachment;
use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

pub const TEXT_ENGLISH_FIELD: usize = 0;
pub const TEXT_LATIN_FIELD: usize = 1;
pub const THEME_FIELD: usize = 2;
pub const IMAGE_SOURCE_FIELD: usize = 3;
pub const TEXT_SOURCE_FIELD: usize = 4;
pub const IMAGE_FIELD: usize = 5;
pub const SUBMIT_ROW: usize = 6;

/// The single content record being edited.
///
/// Replaced wholesale by [`UploadForm::reset`] after a successful upload and
/// otherwise only mutated one field at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub text_english: FormField,
    pub text_latin: FormField,
    pub theme: FormField,
    pub image_source: FormField,
    pub text_source: FormField,
    pub image: Option<ImageAttachment>,
    /// Path typed into the image picker, not yet selected
    pub image_path: FormField,
    pub active_field_index: usize,
}

impl UploadForm {
    pub fn new() -> Self {
        Self {
            text_english: FormField::text_area(
                "textEnglish",
                "English Text",
                "Enter the English text...",
            )
            .required(),
            text_latin: FormField::text_area("textLatin", "Latin Text", "Enter the Latin text...")
                .required(),
            theme: FormField::theme("theme", "Theme", "Select a theme").marked_required(),
            image_source: FormField::text("imageSource", "Image Source", "Enter image source..."),
            text_source: FormField::text("textSource", "Text Source", "Enter text source..."),
            image: None,
            image_path: FormField::text("image", "Image", "Type a path and press Enter..."),
            active_field_index: 0,
        }
    }

    /// Replace the record with empty defaults
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Hold a newly picked file. An empty selection keeps the current one.
    pub fn select_image(&mut self, image: Option<ImageAttachment>) {
        if let Some(image) = image {
            self.image = Some(image);
        }
    }

    /// Index of the first required field left empty
    pub fn first_missing_required(&self) -> Option<usize> {
        (0..SUBMIT_ROW).find(|&index| {
            self.get_field(index)
                .is_some_and(|f| f.is_required && f.is_empty())
        })
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for UploadForm {
    fn field_count(&self) -> usize {
        7 // five values, image picker, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            TEXT_ENGLISH_FIELD => Some(&mut self.text_english),
            TEXT_LATIN_FIELD => Some(&mut self.text_latin),
            THEME_FIELD => Some(&mut self.theme),
            IMAGE_SOURCE_FIELD => Some(&mut self.image_source),
            TEXT_SOURCE_FIELD => Some(&mut self.text_source),
            IMAGE_FIELD => Some(&mut self.image_path),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            TEXT_ENGLISH_FIELD => Some(&self.text_english),
            TEXT_LATIN_FIELD => Some(&self.text_latin),
            THEME_FIELD => Some(&self.theme),
            IMAGE_SOURCE_FIELD => Some(&self.image_source),
            TEXT_SOURCE_FIELD => Some(&self.text_source),
            IMAGE_FIELD => Some(&self.image_path),
            // Submit row has no FormField
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Theme;
    use pretty_assertions::assert_eq;

    fn test_image() -> ImageAttachment {
        ImageAttachment {
            file_name: "doom.png".to_string(),
            mime_type: "image/png",
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_new_has_correct_defaults() {
        let form = UploadForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.text_english.name, "textEnglish");
        assert_eq!(form.text_latin.name, "textLatin");
        assert_eq!(form.theme.name, "theme");
        assert_eq!(form.image_source.name, "imageSource");
        assert_eq!(form.text_source.name, "textSource");
        assert_eq!(form.theme.as_theme(), None);
        assert!(form.image.is_none());
    }

    #[test]
    fn test_only_text_areas_are_required() {
        let form = UploadForm::new();
        assert!(form.text_english.is_required);
        assert!(form.text_latin.is_required);
        assert!(!form.theme.is_required);
        assert!(!form.image_source.is_required);
        assert!(!form.text_source.is_required);
        assert!(form.theme.shows_required_marker);
    }

    #[test]
    fn test_field_count() {
        let form = UploadForm::new();
        assert_eq!(form.field_count(), 7);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = UploadForm::new();
        for _ in 0..7 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_submit_row() {
        let mut form = UploadForm::new();
        form.prev_field();
        assert!(form.is_submit_row_active());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = UploadForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, SUBMIT_ROW);
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = UploadForm::new();
        assert_eq!(form.get_field(0).unwrap().name, "textEnglish");
        assert_eq!(form.get_field(1).unwrap().name, "textLatin");
        assert_eq!(form.get_field(2).unwrap().name, "theme");
        assert_eq!(form.get_field(3).unwrap().name, "imageSource");
        assert_eq!(form.get_field(4).unwrap().name, "textSource");
        assert_eq!(form.get_field(5).unwrap().name, "image");
        assert!(form.get_field(6).is_none());
    }

    #[test]
    fn test_active_field_mut_on_submit_row_is_none() {
        let mut form = UploadForm::new();
        form.set_active_field(SUBMIT_ROW);
        assert!(form.get_active_field_mut().is_none());
    }

    #[test]
    fn test_text_areas_are_multiline() {
        let mut form = UploadForm::new();
        assert!(form.is_active_field_multiline());
        form.set_active_field(TEXT_SOURCE_FIELD);
        assert!(!form.is_active_field_multiline());
    }

    #[test]
    fn test_repeated_identical_edit_leaves_record_unchanged() {
        let mut form = UploadForm::new();
        form.text_source.push_str("Dante");
        let snapshot = form.clone();

        form.text_source.clear();
        form.text_source.push_str("Dante");
        assert_eq!(form, snapshot);
    }

    #[test]
    fn test_select_image_replaces_held_file() {
        let mut form = UploadForm::new();
        form.select_image(Some(test_image()));
        let other = ImageAttachment {
            file_name: "other.gif".to_string(),
            ..test_image()
        };
        form.select_image(Some(other));
        assert_eq!(form.image.as_ref().unwrap().file_name, "other.gif");
    }

    #[test]
    fn test_empty_selection_keeps_held_file() {
        let mut form = UploadForm::new();
        form.select_image(Some(test_image()));
        form.select_image(None);
        assert_eq!(form.image, Some(test_image()));
    }

    #[test]
    fn test_reset_restores_empty_defaults() {
        let mut form = UploadForm::new();
        form.text_english.push_str("Death");
        form.theme.set_theme(Theme::Death);
        form.select_image(Some(test_image()));
        form.set_active_field(SUBMIT_ROW);

        form.reset();
        assert_eq!(form, UploadForm::new());
    }

    #[test]
    fn test_first_missing_required() {
        let mut form = UploadForm::new();
        assert_eq!(form.first_missing_required(), Some(TEXT_ENGLISH_FIELD));

        form.text_english.push_str("A");
        assert_eq!(form.first_missing_required(), Some(TEXT_LATIN_FIELD));

        form.text_latin.push_str("B");
        assert_eq!(form.first_missing_required(), None);
    }

    #[test]
    fn test_whitespace_satisfies_required_check() {
        // Trimming is the server's job
        let mut form = UploadForm::new();
        form.text_english.push_str("  \n");
        form.text_latin.push_str(" ");
        assert_eq!(form.first_missing_required(), None);
    }
}
