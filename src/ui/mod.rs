//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_upload_form(frame, main_area, app);
    components::render_toasts(frame, &app.state.notifications);
    layout::draw_status_bar(frame, status_area, app);
}
