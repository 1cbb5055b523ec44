//! UI module for rendering the TUI

mod fields;
mod layout;
mod wizard;

use crate::state::AppState;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(3), // step tabs
        Constraint::Min(0),    // step pane
        Constraint::Length(1), // nav hints
        Constraint::Length(1), // status bar
    ])
    .split(area);

    wizard::draw_tabs(frame, chunks[0], state);
    wizard::draw_step(frame, chunks[1], state);
    wizard::draw_nav_hints(frame, chunks[2], state);
    layout::draw_status_bar(frame, chunks[3], state);
}
