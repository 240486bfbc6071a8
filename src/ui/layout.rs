//! Layout components (header, main button bar, status bar)

use super::components::render_main_button;
use super::{theme_color, FormView};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::MainButtonState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Regions of the screen
pub struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub main_button: Rect,
    pub status: Rect,
}

/// Split the screen into header, form, main button bar and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Main button
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        content: chunks[1],
        main_button: chunks[2],
        status: chunks[3],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect, view: &FormView) {
    let scheme = if view.theme.dark { "dark" } else { "light" };
    let header = Line::from(vec![
        Span::styled(
            " 🐾 Ветеринар на дом ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{scheme}]"),
            Style::default().fg(theme_color(&view.theme.hint_color, Color::DarkGray)),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Draw the host main button, or leave the row blank while it is hidden
pub fn draw_main_button(frame: &mut Frame, area: Rect, view: &FormView, button: &MainButtonState) {
    if !button.visible {
        return;
    }
    let bg = theme_color(&button.color, Color::Green);
    let fg = theme_color(&view.theme.button_text_color, Color::White);
    render_main_button(frame, area, &button.text, bg, fg);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, view: &FormView) {
    let mut spans = vec![Span::styled(
        format!(" Tab:next  ←→:choose  {SUBMIT_SHORTCUT}:submit  Esc:cancel  ^C:leave "),
        Style::default().fg(Color::Gray),
    )];

    let invalid = view
        .form
        .fields()
        .iter()
        .filter(|f| f.shows_error())
        .count();
    if invalid > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("ошибок: {invalid}"),
            Style::default().fg(Color::Red),
        ));
    }

    if view.submit_control.loading {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            view.submit_control.label.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
