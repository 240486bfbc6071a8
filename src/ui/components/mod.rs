//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_main_button, BUTTON_HEIGHT};
pub use dialog::{render_modal, ModalDialog, ModalResponse};
