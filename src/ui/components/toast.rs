//! Toast notifications overlay

use crate::state::{NotificationKind, Notifications};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of a toast
const TOAST_MAX_WIDTH: u16 = 48;

fn toast_style(kind: NotificationKind) -> (Color, &'static str) {
    match kind {
        NotificationKind::Success => (Color::Green, "✔"),
        NotificationKind::Warning => (Color::Yellow, "!"),
        NotificationKind::Error => (Color::Red, "✖"),
    }
}

/// Render visible toasts stacked in the top-right corner, newest at the bottom
pub fn render_toasts(frame: &mut Frame, notifications: &Notifications) {
    let area = frame.area();
    let width = TOAST_MAX_WIDTH.min(area.width);
    if width < 8 {
        return;
    }
    // borders (2) + icon and spacing (3)
    let text_width = (width - 5) as usize;
    let bottom = area.bottom();
    let mut y = area.y.saturating_add(1);

    for notification in notifications.visible() {
        let (color, icon) = toast_style(notification.kind);
        // Long messages are cut to the rows left on screen
        let room = bottom.saturating_sub(y);
        if room < 3 {
            break;
        }
        let mut lines = wrap_text(notification.message.trim_end(), text_width);
        lines.truncate(usize::from(room - 2));
        let height = lines.len() as u16 + 2;

        let toast_area = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };

        let content: Vec<Line> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let prefix = if i == 0 { icon } else { " " };
                Line::from(vec![
                    Span::styled(format!("{prefix} "), Style::default().fg(color)),
                    Span::raw(line),
                ])
            })
            .collect();

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(content).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(Color::Black)),
            ),
            toast_area,
        );

        y = y.saturating_add(height);
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            let word_len = word.chars().count();
            if current_len + word_len + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
