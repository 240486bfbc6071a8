//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a text field takes (borders + one line)
pub const TEXT_FIELD_HEIGHT: u16 = 3;
/// Rows a multiline field takes (borders + three lines)
pub const MULTILINE_FIELD_HEIGHT: u16 = 5;

pub fn field_height(field: &FormField) -> u16 {
    match field.kind {
        FieldKind::Multiline => MULTILINE_FIELD_HEIGHT,
        _ => TEXT_FIELD_HEIGHT,
    }
}

/// Draw a form field, with its error annotation on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, text: Color) {
    let border_style = match (field.shows_error(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(пусто)".to_string()
    } else {
        display_value
    };
    let value_style = if field.value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(text)
    };

    let cursor = if is_active && !matches!(field.kind, FieldKind::Choice(_)) {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(err) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {err} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
