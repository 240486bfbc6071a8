//! Terminal preview application: routes key presses to the form controller

use crate::bindings::FormEvent;
use crate::config::FormConfig;
use crate::controller::FormController;
use crate::host::{HostEnvironment, TerminalHost};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{FieldKind, Form, FormButton, FormField};
use crate::ui::FormView;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::Backend, Terminal};

/// Main application struct
pub struct App<B: Backend + Send> {
    pub controller: FormController<TerminalHost<B>>,
}

impl<B: Backend + Send> App<B> {
    /// Create the host on top of `terminal` and bring the form up
    pub fn new(terminal: Terminal<B>, config: FormConfig) -> Result<Self> {
        let host = TerminalHost::new(terminal, &config);
        let mut controller = FormController::new(host, config);
        controller.init()?;
        Ok(Self { controller })
    }

    pub fn draw(&self) -> Result<()> {
        self.controller
            .host()
            .render(FormView::capture(&self.controller))
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.controller.host().is_closed()
    }

    /// Terminal resizes play the role of orientation changes
    pub async fn handle_resize(&mut self) {
        self.controller.dispatch(FormEvent::OrientationChanged).await;
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.leave().await;
            return Ok(());
        }

        let on_actions = self.controller.form().is_buttons_row_active();

        match key.code {
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(SUBMIT_MODIFIER | KeyModifiers::CONTROL) =>
            {
                // The main button only reacts while the host shows it
                if self.controller.host().main_button().visible {
                    self.controller.dispatch(FormEvent::MainButtonClicked).await;
                }
            }
            KeyCode::Esc => self.controller.dispatch(FormEvent::CancelClicked).await,
            KeyCode::Tab | KeyCode::Down => {
                self.blur_active().await;
                self.controller.form_mut().next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.blur_active().await;
                self.controller.form_mut().prev_field();
            }
            // Actions row
            KeyCode::Left | KeyCode::Right if on_actions => {
                let form = self.controller.form_mut();
                form.selected_button = form.selected_button.toggle();
            }
            KeyCode::Enter if on_actions => {
                let event = match self.controller.form().selected_button {
                    FormButton::Submit => FormEvent::SubmitClicked,
                    FormButton::Cancel => FormEvent::CancelClicked,
                };
                self.controller.dispatch(event).await;
            }
            // Field editing
            KeyCode::Left => self.edit_active(FormField::prev_choice).await,
            KeyCode::Right => self.edit_active(FormField::next_choice).await,
            KeyCode::Backspace => self.edit_active(FormField::pop_char).await,
            KeyCode::Enter => {
                let multiline = self
                    .controller
                    .form()
                    .get_field(self.controller.form().active_field())
                    .is_some_and(|f| f.kind == FieldKind::Multiline);
                if multiline {
                    self.edit_active(|f| f.push_char('\n')).await;
                } else {
                    self.blur_active().await;
                    self.controller.form_mut().next_field();
                }
            }
            KeyCode::Char(c) => self.edit_active(|f| f.push_char(c)).await,
            _ => {}
        }
        Ok(())
    }

    /// Apply an edit to a copy of the focused field and dispatch it as input
    async fn edit_active(&mut self, edit: impl FnOnce(&mut FormField)) {
        let form = self.controller.form();
        let Some(mut field) = form.get_field(form.active_field()).cloned() else {
            return;
        };
        let before = field.value.clone();
        edit(&mut field);
        if field.value != before {
            self.controller
                .dispatch(FormEvent::Input {
                    field: field.id,
                    value: field.value,
                })
                .await;
        }
    }

    async fn blur_active(&mut self) {
        if let Some(id) = self.controller.form().active_field_id() {
            self.controller.dispatch(FormEvent::Blur(id)).await;
        }
    }

    async fn leave(&mut self) {
        let host = self.controller.host();
        if host.closing_confirmation_enabled() {
            self.controller.dispatch(FormEvent::NavigateAway).await;
        } else {
            host.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;
    use ratatui::backend::TestBackend;

    fn app() -> App<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        App::new(terminal, FormConfig::default()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(app: &mut App<TestBackend>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_new_initializes_host() {
        let app = app();
        let host = app.controller.host();
        assert!(host.is_expanded());
        assert!(host.closing_confirmation_enabled());
        assert_eq!(host.main_button().text, "Отправить заявку");
        assert!(!host.main_button().visible);
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_typing_fills_active_field() {
        let mut app = app();
        type_text(&mut app, "Анна").await;
        assert_eq!(app.controller.form().value(FieldId::Name), "Анна");

        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(app.controller.form().value(FieldId::Name), "Анн");
    }

    #[tokio::test]
    async fn test_phone_is_formatted_while_typing() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "89991234567").await;
        assert_eq!(
            app.controller.form().value(FieldId::Phone),
            "+7 (999) 123-45-67"
        );
    }

    #[tokio::test]
    async fn test_backspace_clears_masked_phone() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "8").await;
        assert_eq!(app.controller.form().value(FieldId::Phone), "+7 () --");

        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(app.controller.form().value(FieldId::Phone), "");
    }

    #[tokio::test]
    async fn test_backspace_walks_back_through_phone_digits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "8999123456").await;
        assert_eq!(
            app.controller.form().value(FieldId::Phone),
            "+7 (999) 123-45-6"
        );

        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(
            app.controller.form().value(FieldId::Phone),
            "+7 (999) 123-45-"
        );
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(
            app.controller.form().value(FieldId::Phone),
            "+7 (999) 123-4-"
        );

        for _ in 0..20 {
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        }
        assert_eq!(app.controller.form().value(FieldId::Phone), "");
        assert!(!app.controller.form().has_data());
    }

    #[tokio::test]
    async fn test_leaving_empty_field_flags_it() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        assert!(app.controller.form().field(FieldId::Name).shows_error());
        assert_eq!(app.controller.form().active_field_id(), Some(FieldId::Phone));
    }

    #[tokio::test]
    async fn test_choice_field_cycles_with_arrows() {
        let mut app = app();
        app.controller.form_mut().set_active_field(3); // pet_type
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.controller.form().value(FieldId::PetType), "cat");
        app.handle_key(key(KeyCode::Left)).await.unwrap();
        assert_eq!(app.controller.form().value(FieldId::PetType), "");
    }

    #[tokio::test]
    async fn test_enter_in_multiline_adds_newline() {
        let mut app = app();
        app.controller.form_mut().set_active_field(6); // problem
        type_text(&mut app, "a").await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        type_text(&mut app, "b").await;
        assert_eq!(app.controller.form().value(FieldId::Problem), "a\nb");
    }

    #[tokio::test]
    async fn test_main_button_follows_required_fields() {
        let mut app = app();
        type_text(&mut app, "Анна").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "123").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "Тверская 1").await;
        assert!(!app.controller.host().main_button().visible);

        app.controller.form_mut().set_active_field(6);
        type_text(&mut app, "x").await;
        // Phone is malformed, yet every required field has text
        assert!(app.controller.host().main_button().visible);
    }

    #[tokio::test]
    async fn test_hidden_main_button_ignores_shortcut() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), SUBMIT_MODIFIER))
            .await
            .unwrap();
        assert!(app.controller.host().take_outbox().is_empty());
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_actions_row_toggles_buttons() {
        let mut app = app();
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        assert!(app.controller.form().is_buttons_row_active());
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.controller.form().selected_button, FormButton::Cancel);
    }

    #[tokio::test]
    async fn test_ctrl_c_on_empty_form_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(app.should_quit());
    }
}
