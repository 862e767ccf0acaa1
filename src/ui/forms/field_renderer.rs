//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField, ImageAttachment};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Field title, with an asterisk on fields marked required
fn field_title(field: &FormField) -> String {
    if field.shows_required_marker {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    }
}

fn placeholder(field: &FormField) -> Span<'static> {
    Span::styled(
        field.placeholder,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )
}

/// Draw a text or theme field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let content = match &field.value {
        FieldValue::Choice(_) => Paragraph::new(choice_line(field, is_active)),
        FieldValue::Text(_) => Paragraph::new(text_lines(field, is_active)),
    };

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn text_lines(field: &FormField, is_active: bool) -> Vec<Line<'static>> {
    let value = field.as_text();
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));

    if value.is_empty() {
        let mut spans = Vec::new();
        if is_active {
            spans.push(cursor);
        }
        spans.push(placeholder(field));
        return vec![Line::from(spans)];
    }

    let style = if is_active {
        Style::default()
    } else {
        Style::default().fg(Color::Gray)
    };
    // split('\n') keeps a trailing empty line so the cursor follows a newline
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }
    lines
}

fn choice_line(field: &FormField, is_active: bool) -> Line<'static> {
    let arrow = Style::default().fg(if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    });
    let value = if field.is_empty() {
        placeholder(field)
    } else {
        Span::styled(
            field.display_value(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };
    Line::from(vec![
        Span::styled("◀ ", arrow),
        value,
        Span::styled(" ▶", arrow),
    ])
}

/// Draw the image picker: typed path in the box, held file in the bottom title
pub fn draw_image_field(
    frame: &mut Frame,
    area: Rect,
    path_input: &FormField,
    image: Option<&ImageAttachment>,
    is_active: bool,
) {
    let mut block = Block::default()
        .title(field_title(path_input))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    let held = match image {
        Some(image) => Span::styled(
            format!(" {} · {} ", image.file_name, image.size_label()),
            Style::default().fg(Color::Green),
        ),
        None => Span::styled(" No file chosen ", Style::default().fg(Color::DarkGray)),
    };
    block = block.title_bottom(Line::from(held));

    let content = Paragraph::new(text_lines(path_input, is_active));
    frame.render_widget(content.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_title_has_asterisk() {
        let field = FormField::text_area("textLatin", "Latin Text", "").required();
        assert_eq!(field_title(&field), " Latin Text * ");
    }

    #[test]
    fn test_theme_title_has_asterisk() {
        let field = FormField::theme("theme", "Theme", "Select a theme").marked_required();
        assert_eq!(field_title(&field), " Theme * ");
    }

    #[test]
    fn test_optional_field_title() {
        let field = FormField::text("textSource", "Text Source", "");
        assert_eq!(field_title(&field), " Text Source ");
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let field = FormField::text("textSource", "Text Source", "Enter text source...");
        let lines = text_lines(&field, false);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "Enter text source...");
    }

    #[test]
    fn test_cursor_follows_trailing_newline() {
        let mut field = FormField::text_area("textEnglish", "English Text", "");
        field.push_str("line\n");
        let lines = text_lines(&field, true);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans.last().unwrap().content, CURSOR);
    }
}
