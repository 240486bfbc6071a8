//! Confirmation dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render a yes/no confirmation overlay; `confirm_selected` highlights "OK"
pub fn render_confirm_dialog(frame: &mut Frame, message: &str, confirm_selected: bool) {
    let labels = [("Отмена", false), ("OK", true)];
    let mut spans = Vec::new();

    for (label, is_confirm) in labels {
        let is_selected = confirm_selected == is_confirm;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{prefix}{label}   "), style));
    }

    let hint = vec![
        Span::styled("←→", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Подтверждение",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message,
            options: Some(Line::from(spans)),
            hint: Some(hint),
            max_width: 60,
        },
    );
}
