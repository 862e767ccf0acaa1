//! Form field value objects

use std::fmt;

/// Subject of a content entry. Closed set, sent on the wire as lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Heaven,
    Hell,
    Death,
    Judgement,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Heaven, Theme::Hell, Theme::Death, Theme::Judgement];

    /// Wire value for the `theme` part
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heaven => "heaven",
            Self::Hell => "hell",
            Self::Death => "death",
            Self::Judgement => "judgement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Heaven => "Heaven",
            Self::Hell => "Hell",
            Self::Death => "Death",
            Self::Judgement => "Judgement",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Heaven => Self::Hell,
            Self::Hell => Self::Death,
            Self::Death => Self::Judgement,
            Self::Judgement => Self::Heaven,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Heaven => Self::Judgement,
            Self::Hell => Self::Heaven,
            Self::Death => Self::Hell,
            Self::Judgement => Self::Death,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<Theme>),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: FieldValue,
    pub is_multiline: bool,
    /// Enforced by the required check on submit
    pub is_required: bool,
    /// Label carries an asterisk
    pub shows_required_marker: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            value: FieldValue::Text(String::new()),
            is_multiline: false,
            is_required: false,
            shows_required_marker: false,
        }
    }

    /// Create a new multiline text area
    pub fn text_area(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label, placeholder)
        }
    }

    /// Create a new theme selector
    pub fn theme(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            value: FieldValue::Choice(None),
            ..Self::text(name, label, placeholder)
        }
    }

    /// Mark the field as natively required
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self.shows_required_marker = true;
        self
    }

    /// Show the asterisk without enforcing the field on submit
    pub fn marked_required(mut self) -> Self {
        self.shows_required_marker = true;
        self
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => "",
        }
    }

    /// Get the selected theme (None for text fields)
    #[cfg(test)]
    pub fn as_theme(&self) -> Option<Theme> {
        match &self.value {
            FieldValue::Choice(theme) => *theme,
            FieldValue::Text(_) => None,
        }
    }

    /// Value as sent in the multipart payload
    pub fn wire_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(theme) => theme.map(|t| t.as_str().to_string()).unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Choice(theme) => theme.is_none(),
        }
    }

    /// Set the selected theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.value = FieldValue::Choice(Some(theme));
    }

    /// Select the next theme, starting at the first one
    pub fn next_choice(&mut self) {
        if let FieldValue::Choice(theme) = &mut self.value {
            *theme = Some(theme.map_or(Theme::ALL[0], |t| t.next()));
        }
    }

    /// Select the previous theme, starting at the last one
    pub fn prev_choice(&mut self) {
        if let FieldValue::Choice(theme) = &mut self.value {
            *theme = Some(theme.map_or(Theme::ALL[Theme::ALL.len() - 1], |t| t.prev()));
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Append pasted text to the field value
    pub fn push_str(&mut self, text: &str) {
        if let FieldValue::Text(s) = &mut self.value {
            if self.is_multiline {
                s.push_str(text);
            } else {
                // Single-line inputs drop line breaks like a browser <input>
                s.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(theme) => *theme = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(theme)) => theme.label().to_string(),
            FieldValue::Choice(None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_wire_values() {
        let values: Vec<&str> = Theme::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(values, vec!["heaven", "hell", "death", "judgement"]);
    }

    #[test]
    fn test_theme_cycle_wraps() {
        assert_eq!(Theme::Judgement.next(), Theme::Heaven);
        assert_eq!(Theme::Heaven.prev(), Theme::Judgement);
    }

    #[test]
    fn test_choice_starts_unset() {
        let field = FormField::theme("theme", "Theme", "Select a theme");
        assert!(field.is_empty());
        assert_eq!(field.wire_value(), "");
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_next_choice_from_unset_selects_first() {
        let mut field = FormField::theme("theme", "Theme", "Select a theme");
        field.next_choice();
        assert_eq!(field.as_theme(), Some(Theme::Heaven));
        field.next_choice();
        assert_eq!(field.wire_value(), "hell");
    }

    #[test]
    fn test_prev_choice_from_unset_selects_last() {
        let mut field = FormField::theme("theme", "Theme", "Select a theme");
        field.prev_choice();
        assert_eq!(field.as_theme(), Some(Theme::Judgement));
    }

    #[test]
    fn test_push_char_ignored_on_choice() {
        let mut field = FormField::theme("theme", "Theme", "Select a theme");
        field.push_char('x');
        assert!(field.is_empty());
    }

    #[test]
    fn test_push_and_pop_text() {
        let mut field = FormField::text("textSource", "Text Source", "");
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_paste_into_single_line_drops_newlines() {
        let mut field = FormField::text("imageSource", "Image Source", "");
        field.push_str("line one\r\nline two");
        assert_eq!(field.as_text(), "line oneline two");
    }

    #[test]
    fn test_paste_into_text_area_keeps_newlines() {
        let mut field = FormField::text_area("textLatin", "Latin Text", "");
        field.push_str("Dies irae\ndies illa");
        assert_eq!(field.as_text(), "Dies irae\ndies illa");
    }

    #[test]
    fn test_marked_required_is_not_enforced() {
        let field = FormField::theme("theme", "Theme", "").marked_required();
        assert!(field.shows_required_marker);
        assert!(!field.is_required);

        let field = FormField::text_area("textLatin", "Latin Text", "").required();
        assert!(field.shows_required_marker);
        assert!(field.is_required);
    }

    #[test]
    fn test_clear_resets_choice() {
        let mut field = FormField::theme("theme", "Theme", "");
        field.set_theme(Theme::Death);
        field.clear();
        assert_eq!(field.as_theme(), None);
    }
}
