//! Step strip, step pane, and navigation hints

use super::fields;
use crate::state::{AppState, FieldKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Draw the step-selector tab strip; the current step is highlighted.
pub fn draw_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = state
        .form
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| Line::from(format!("F{} {}", i + 1, step.title)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.wizard.current())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Solicitud de seguro "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Draw the visible step pane. Only the current step's fields exist on
/// screen; the rest are hidden by construction.
pub fn draw_step(frame: &mut Frame, area: Rect, state: &AppState) {
    let step_index = state.wizard.current();
    let Some(step) = state.form.step(step_index) else {
        return;
    };

    let constraints: Vec<Constraint> = step
        .fields
        .iter()
        .map(|f| match f.kind {
            FieldKind::Checkbox => Constraint::Length(1),
            _ => Constraint::Length(3),
        })
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::vertical(constraints).split(area);

    let active = state.form.active_field();
    for (i, field) in step.fields.iter().enumerate() {
        let is_active = i == active;
        match field.kind {
            FieldKind::Checkbox => fields::draw_checkbox(frame, chunks[i], field, is_active),
            _ => fields::draw_field(frame, chunks[i], field, is_active),
        }
    }
}

/// Draw the navigation affordances for the current step: previous only
/// past step 0, next until the last step, submit only on it.
pub fn draw_nav_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let wizard = &state.wizard;
    let mut parts: Vec<&str> = Vec::new();

    if !wizard.is_first() {
        parts.push("PgUp anterior");
    }
    if wizard.is_last() {
        parts.push("Ctrl+S enviar");
    } else {
        parts.push("PgDn siguiente");
    }
    parts.push("Tab campo");
    parts.push("Ctrl+R reiniciar");
    parts.push("Ctrl+C salir");

    let line = Line::from(Span::styled(
        parts.join("  │  "),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
