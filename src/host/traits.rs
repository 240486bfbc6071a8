//! Trait abstraction for the host environment to enable mocking in tests

use crate::error::HostError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Theme variables supplied by the host; any of them may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeParams {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub hint_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub secondary_bg_color: Option<String>,
}

/// Light or dark scheme the host is currently using
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// The user the host has opened the view for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    /// Opaque identifier; zero means unknown
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl HostUser {
    /// "First Last", or just "First" when there is no last name
    pub fn display_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// Gateway to the services of the surrounding mini-app platform
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostEnvironment: Send + Sync {
    /// Tell the host the view has loaded
    fn ready(&self) -> Result<(), HostError>;

    /// Theme variables, if the host supplies any
    fn theme_params(&self) -> Option<ThemeParams>;

    /// Current color scheme
    fn color_scheme(&self) -> ColorScheme;

    /// The current user, if known
    fn user(&self) -> Option<HostUser>;

    /// Set the main button's text and color
    fn configure_main_button(&self, text: &str, color: &str);

    /// Show or hide the main button
    fn set_main_button_visible(&self, visible: bool);

    /// Show a blocking alert; resolves once it is dismissed
    async fn show_alert(&self, message: &str);

    /// Ask the user to confirm; resolves to their answer
    async fn show_confirm(&self, message: &str) -> bool;

    /// Hand one serialized message to the outbound channel
    fn send_data(&self, data: &str) -> Result<(), HostError>;

    /// Expand the view to full height
    fn expand(&self);

    /// Close the view
    fn close(&self);

    /// Ask the host to confirm before the view is swiped away
    fn enable_closing_confirmation(&self);
}
