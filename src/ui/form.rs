//! Vet-call form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, field_height};
use super::{theme_color, FormView};
use crate::state::FormButton;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the fields that fit, keeping the focused one visible, then the actions row
pub fn draw_form(frame: &mut Frame, area: Rect, view: &FormView) {
    let form = &view.form;
    let text = theme_color(&view.theme.text_color, Color::Reset);

    let block = Block::default()
        .title(" Вызов ветеринара на дом ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme_color(&view.theme.button_color, Color::Green)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Actions row
        ])
        .split(inner);
    let fields_area = chunks[0];

    let heights: Vec<u16> = form.fields().iter().map(field_height).collect();
    let focus = form.active_field_index.min(heights.len().saturating_sub(1));
    let (start, end) = visible_range(&heights, focus, fields_area.height);

    let mut y = fields_area.y;
    for index in start..end {
        let field = &form.fields()[index];
        let height = heights[index].min(fields_area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let field_area = Rect {
            x: fields_area.x,
            y,
            width: fields_area.width,
            height,
        };
        draw_field(frame, field_area, field, form.active_field_index == index, text);
        y += height;
    }

    draw_actions(frame, chunks[1], view);
}

fn draw_actions(frame: &mut Frame, area: Rect, view: &FormView) {
    let on_actions = view.form.is_buttons_row_active();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let control = &view.submit_control;
    render_button(
        frame,
        chunks[0],
        &control.label,
        on_actions && view.form.selected_button == FormButton::Submit,
        control.enabled,
    );
    render_button(
        frame,
        chunks[1],
        "✖ Отмена",
        on_actions && view.form.selected_button == FormButton::Cancel,
        true,
    );
}

/// Range of fields to draw so that `focus` fits in `available` rows.
///
/// Fields are taken from the top while they fit; once the focused field would
/// fall off the bottom the window slides down.
pub fn visible_range(heights: &[u16], focus: usize, available: u16) -> (usize, usize) {
    if heights.is_empty() {
        return (0, 0);
    }

    let mut start = 0;
    let mut used: u16 = heights[..=focus].iter().sum();
    while used > available && start < focus {
        used -= heights[start];
        start += 1;
    }

    let mut end = focus + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }

    (start, end)
}
