//! UI module for rendering the terminal preview host

mod components;
mod field_renderer;
mod form;
mod layout;

pub use components::{ModalDialog, ModalResponse};

use crate::controller::FormController;
use crate::host::HostEnvironment;
use crate::state::{MainButtonState, SubmitControl, VetCallForm};
use crate::theme::{parse_hex, Theme};
use ratatui::{style::Color, Frame};

/// Everything needed to draw one frame of the form
#[derive(Debug, Clone)]
pub struct FormView {
    pub form: VetCallForm,
    pub submit_control: SubmitControl,
    pub theme: Theme,
}

impl FormView {
    pub fn capture<H: HostEnvironment>(controller: &FormController<H>) -> Self {
        Self {
            form: controller.form().clone(),
            submit_control: controller.submit_control().clone(),
            theme: controller.theme().clone(),
        }
    }
}

/// Main draw function
pub fn draw(
    frame: &mut Frame,
    view: &FormView,
    main_button: &MainButtonState,
    dialog: Option<&ModalDialog>,
) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header, view);
    form::draw_form(frame, screen.content, view);
    layout::draw_main_button(frame, screen.main_button, view, main_button);
    layout::draw_status_bar(frame, screen.status, view);

    if let Some(dialog) = dialog {
        components::render_modal(frame, dialog, &view.theme);
    }
}

/// Theme color as a terminal color, `fallback` if it does not parse
pub fn theme_color(hex: &str, fallback: Color) -> Color {
    parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_theme_color() {
        assert_eq!(theme_color("#4CAF50", Color::Red), Color::Rgb(0x4c, 0xaf, 0x50));
        assert_eq!(theme_color("green", Color::Red), Color::Red);
    }

    fn render(view: &FormView, button: &MainButtonState, dialog: Option<&ModalDialog>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| draw(frame, view, button, dialog))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn empty_view() -> FormView {
        FormView {
            form: VetCallForm::new(),
            submit_control: SubmitControl::default(),
            theme: Theme::default(),
        }
    }

    #[test]
    fn test_draw_shows_form_and_actions() {
        let screen = render(&empty_view(), &MainButtonState::default(), None);
        assert!(screen.contains("Вызов ветеринара на дом"));
        assert!(screen.contains("Вызвать врача"));
        assert!(screen.contains("Отмена"));
    }

    #[test]
    fn test_draw_main_button_when_visible() {
        let button = MainButtonState {
            text: "Отправить заявку".to_string(),
            color: "#4CAF50".to_string(),
            visible: true,
        };
        let screen = render(&empty_view(), &button, None);
        assert!(screen.contains("Отправить заявку"));

        let hidden = MainButtonState {
            visible: false,
            ..button
        };
        let screen = render(&empty_view(), &hidden, None);
        assert!(!screen.contains("Отправить заявку"));
    }

    #[test]
    fn test_draw_error_annotation() {
        let mut view = empty_view();
        view.form.field_mut(crate::state::FieldId::Name).validate();
        let screen = render(&view, &MainButtonState::default(), None);
        assert!(screen.contains("Это поле обязательно для заполнения"));
    }

    #[test]
    fn test_draw_modal() {
        let dialog = ModalDialog::Alert("Заявка отправлена!".to_string());
        let screen = render(&empty_view(), &MainButtonState::default(), Some(&dialog));
        assert!(screen.contains("Заявка отправлена!"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal
            .draw(|frame| draw(frame, &empty_view(), &MainButtonState::default(), None))
            .unwrap();
    }
}
