//! Dialog components for TUI

mod alert_dialog;
mod base;
mod confirm_dialog;

pub use alert_dialog::render_alert_dialog;
pub use confirm_dialog::render_confirm_dialog;

use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};

/// A host modal currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalDialog {
    Alert(String),
    Confirm { message: String, selected: bool },
}

/// What a key press did to an open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResponse {
    /// Still open
    Pending,
    /// Dismissed with the given answer (alerts always answer `true`)
    Answered(bool),
}

impl ModalDialog {
    pub fn confirm(message: impl Into<String>) -> Self {
        ModalDialog::Confirm {
            message: message.into(),
            selected: true,
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> ModalResponse {
        match self {
            ModalDialog::Alert(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ModalResponse::Answered(true),
                _ => ModalResponse::Pending,
            },
            ModalDialog::Confirm { selected, .. } => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    *selected = !*selected;
                    ModalResponse::Pending
                }
                KeyCode::Enter => ModalResponse::Answered(*selected),
                KeyCode::Char('y') | KeyCode::Char('Y') => ModalResponse::Answered(true),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                    ModalResponse::Answered(false)
                }
                _ => ModalResponse::Pending,
            },
        }
    }
}

/// Render whichever modal is open
pub fn render_modal(frame: &mut ratatui::Frame, dialog: &ModalDialog, theme: &Theme) {
    match dialog {
        ModalDialog::Alert(message) => render_alert_dialog(frame, message, theme),
        ModalDialog::Confirm { message, selected } => {
            render_confirm_dialog(frame, message, *selected)
        }
    }
}
