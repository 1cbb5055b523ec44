//! Status bar rendering

use crate::state::{AppState, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const READY_MESSAGE: &str = "Listo. Complete los campos y avance con PgDn.";

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Blue,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

/// Draw the status bar with the newest notification, colored by severity.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let (message, color) = match state.notifications.latest() {
        Some(notification) => (
            notification.message.as_str(),
            severity_color(notification.severity),
        ),
        None => (READY_MESSAGE, Color::DarkGray),
    };

    let line = Line::from(Span::styled(message, Style::default().fg(color)));
    frame.render_widget(Paragraph::new(line), area);
}
