//! Alert dialog component

use super::base::{render_dialog, DialogConfig};
use crate::theme::Theme;
use crate::ui::theme_color;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render a host alert: the message over a single OK button in the theme's button colors
pub fn render_alert_dialog(frame: &mut Frame, message: &str, theme: &Theme) {
    let accent = theme_color(&theme.button_color, Color::Green);
    let ok = Line::from(Span::styled(
        "   OK   ",
        Style::default()
            .bg(accent)
            .fg(theme_color(&theme.button_text_color, Color::White))
            .add_modifier(Modifier::BOLD),
    ))
    .centered();

    let hint = vec![
        Span::styled("Enter", Style::default().fg(accent)),
        Span::styled(
            " закрыть",
            Style::default().fg(theme_color(&theme.hint_color, Color::DarkGray)),
        ),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Сообщение",
            title_color: accent,
            border_color: accent,
            message,
            options: Some(ok),
            hint: Some(hint),
            ..Default::default()
        },
    );
}
