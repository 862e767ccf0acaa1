//! Upload form view

use super::field_renderer::{draw_field, draw_image_field};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{
    Form, IMAGE_FIELD, IMAGE_SOURCE_FIELD, TEXT_ENGLISH_FIELD, TEXT_LATIN_FIELD,
    TEXT_SOURCE_FIELD, THEME_FIELD,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the form card gets
const CARD_MAX_WIDTH: u16 = 84;

/// Advisory only; limits are enforced by the server
pub const IMAGE_HINT: &str = "Maximum file size: 5MB. Supported formats: JPEG, PNG, GIF";

/// Draw the upload form card
pub fn draw_upload_form(frame: &mut Frame, area: Rect, app: &App) {
    let [card] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::default()
        .title(" Upload Content ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Description
            Constraint::Min(4),                // English text
            Constraint::Min(4),                // Latin text
            Constraint::Length(3),             // Theme
            Constraint::Length(3),             // Image source
            Constraint::Length(3),             // Text source
            Constraint::Length(3),             // Image
            Constraint::Length(1),             // Image hint
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(card);

    let description = Paragraph::new("Add new content to the Novissima database")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(description, chunks[0]);

    let form = &app.state.form;
    let active = form.active_field();
    for (index, chunk) in [
        (TEXT_ENGLISH_FIELD, chunks[1]),
        (TEXT_LATIN_FIELD, chunks[2]),
        (THEME_FIELD, chunks[3]),
        (IMAGE_SOURCE_FIELD, chunks[4]),
        (TEXT_SOURCE_FIELD, chunks[5]),
    ] {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunk, field, active == index);
        }
    }

    draw_image_field(
        frame,
        chunks[6],
        &form.image_path,
        form.image.as_ref(),
        active == IMAGE_FIELD,
    );

    let hint = Paragraph::new(IMAGE_HINT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[7]);

    let submission = app.state.submission;
    render_button(
        frame,
        chunks[8],
        submission.button_label(),
        form.is_submit_row_active(),
        !submission.is_submitting(),
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("◀ ▶", Style::default().fg(Color::Cyan)),
        Span::raw(": theme  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": upload  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": dismiss"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[9]);
}
