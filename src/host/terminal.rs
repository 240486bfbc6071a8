//! Terminal implementation of the host environment
//!
//! Stands in for the messaging client: modals are centered dialogs that block
//! until answered, the main button is a bar at the bottom of the screen and
//! outbound messages are collected in an outbox.

use super::traits::{ColorScheme, HostEnvironment, HostUser, ThemeParams};
use crate::config::FormConfig;
use crate::error::HostError;
use crate::state::MainButtonState;
use crate::ui::{self, FormView, ModalDialog, ModalResponse};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Poll interval while a modal is waiting for input
const MODAL_POLL: Duration = Duration::from_millis(100);

struct Surface<B: Backend> {
    terminal: Terminal<B>,
    last_view: Option<FormView>,
    main_button: MainButtonState,
    outbox: Vec<String>,
    closed: bool,
    expanded: bool,
    closing_confirmation: bool,
}

impl<B: Backend> Surface<B> {
    fn draw(&mut self, dialog: Option<&ModalDialog>) -> Result<()> {
        let Some(view) = self.last_view.as_ref() else {
            return Ok(());
        };
        let button = &self.main_button;
        self.terminal
            .draw(|frame| ui::draw(frame, view, button, dialog))?;
        Ok(())
    }
}

pub struct TerminalHost<B: Backend> {
    surface: Mutex<Surface<B>>,
    theme: Option<ThemeParams>,
    color_scheme: ColorScheme,
    user: Option<HostUser>,
}

impl<B: Backend> TerminalHost<B> {
    pub fn new(terminal: Terminal<B>, config: &FormConfig) -> Self {
        Self {
            surface: Mutex::new(Surface {
                terminal,
                last_view: None,
                main_button: MainButtonState::default(),
                outbox: Vec::new(),
                closed: false,
                expanded: false,
                closing_confirmation: false,
            }),
            theme: config.preview_theme.clone(),
            color_scheme: config.preview_color_scheme.unwrap_or_default(),
            user: config.preview_user.clone(),
        }
    }

    fn surface(&self) -> MutexGuard<'_, Surface<B>> {
        self.surface.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Draw the form as it currently stands
    pub fn render(&self, view: FormView) -> Result<()> {
        let mut surface = self.surface();
        surface.last_view = Some(view);
        surface.draw(None)
    }

    pub fn is_closed(&self) -> bool {
        self.surface().closed
    }

    pub fn is_expanded(&self) -> bool {
        self.surface().expanded
    }

    pub fn closing_confirmation_enabled(&self) -> bool {
        self.surface().closing_confirmation
    }

    pub fn main_button(&self) -> MainButtonState {
        self.surface().main_button.clone()
    }

    /// Messages handed to the outbound channel so far
    pub fn take_outbox(&self) -> Vec<String> {
        std::mem::take(&mut self.surface().outbox)
    }

    /// Show a modal on top of the last frame and wait for an answer
    fn run_modal(&self, mut dialog: ModalDialog) -> Result<bool> {
        let mut surface = self.surface();
        loop {
            surface.draw(Some(&dialog))?;
            if !event::poll(MODAL_POLL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let ModalResponse::Answered(answer) = dialog.handle_key(key) {
                    return Ok(answer);
                }
            }
        }
    }
}

#[async_trait]
impl<B: Backend + Send> HostEnvironment for TerminalHost<B> {
    fn ready(&self) -> Result<(), HostError> {
        let surface = self.surface();
        let size = surface
            .terminal
            .size()
            .map_err(|e| HostError::NotReady(e.to_string()))?;
        if size.width == 0 || size.height == 0 {
            return Err(HostError::NotReady("terminal has no area".to_string()));
        }
        Ok(())
    }

    fn theme_params(&self) -> Option<ThemeParams> {
        self.theme.clone()
    }

    fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    fn user(&self) -> Option<HostUser> {
        self.user.clone()
    }

    fn configure_main_button(&self, text: &str, color: &str) {
        let mut surface = self.surface();
        surface.main_button.text = text.to_string();
        surface.main_button.color = color.to_string();
    }

    fn set_main_button_visible(&self, visible: bool) {
        self.surface().main_button.visible = visible;
    }

    async fn show_alert(&self, message: &str) {
        if let Err(e) = self.run_modal(ModalDialog::Alert(message.to_string())) {
            tracing::warn!("Alert could not be shown: {e}");
        }
    }

    async fn show_confirm(&self, message: &str) -> bool {
        match self.run_modal(ModalDialog::confirm(message)) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Confirm could not be shown: {e}");
                false
            }
        }
    }

    fn send_data(&self, data: &str) -> Result<(), HostError> {
        let mut surface = self.surface();
        if surface.closed {
            return Err(HostError::ChannelRejected("view is closed".to_string()));
        }
        surface.outbox.push(data.to_string());
        tracing::info!(bytes = data.len(), "Outbound message queued");
        Ok(())
    }

    fn expand(&self) {
        let mut surface = self.surface();
        if let Err(e) = surface.terminal.autoresize() {
            tracing::warn!("Failed to resize terminal: {e}");
        }
        surface.expanded = true;
    }

    fn close(&self) {
        self.surface().closed = true;
    }

    fn enable_closing_confirmation(&self) {
        self.surface().closing_confirmation = true;
    }
}
