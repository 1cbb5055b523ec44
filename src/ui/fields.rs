//! Field rendering utilities for the step panes

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_color(field: &FormField, is_active: bool) -> Color {
    if field.has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw a text-valued field as a bordered one-line input.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let color = border_color(field, is_active);
    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        placeholder(field).to_string()
    } else {
        display_value
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut title = format!(" {} ", field.label);
    if field.required {
        title = format!(" {} * ", field.label);
    }
    if field.has_error {
        title.push_str("(!) ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(content.block(block), area);
}

/// Draw a checkbox as a single line, `[x] Label`.
pub fn draw_checkbox(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let color = border_color(field, is_active);
    let marker = if field.is_checked() { "[x]" } else { "[ ]" };
    let mut style = Style::default().fg(color);
    if is_active {
        style = style.add_modifier(Modifier::BOLD);
    }

    let line = Line::from(vec![
        Span::styled(format!("{marker} "), style),
        Span::styled(field.label.clone(), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn placeholder(field: &FormField) -> &'static str {
    match field.kind {
        FieldKind::Date => "AAAA-MM-DD",
        FieldKind::Select => "(Enter para elegir)",
        _ => "(vacío)",
    }
}
