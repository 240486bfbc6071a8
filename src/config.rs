//! Configuration handling for the form controller and the terminal host

use crate::host::{ColorScheme, HostUser, ThemeParams};
use crate::state::{LOADING_LABEL, SUBMIT_LABEL};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default host main button text
pub const DEFAULT_MAIN_BUTTON_TEXT: &str = "Отправить заявку";
/// Default host main button color
pub const DEFAULT_MAIN_BUTTON_COLOR: &str = "#4CAF50";
/// Delay between a successful hand-off and closing the view
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 1500;
/// Delay between an orientation change and re-expanding the view
pub const DEFAULT_EXPAND_DELAY_MS: u64 = 100;

/// User configuration. Every field is optional; accessors supply defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Host main button text
    pub main_button_text: Option<String>,
    /// Host main button color (`#rrggbb`)
    pub main_button_color: Option<String>,
    /// In-form submit control label
    pub submit_label: Option<String>,
    /// In-form submit control label while sending
    pub loading_label: Option<String>,
    /// Milliseconds to wait before closing after a successful submission
    pub close_delay_ms: Option<u64>,
    /// Milliseconds to wait before expanding after an orientation change
    pub expand_delay_ms: Option<u64>,
    /// Theme the terminal host reports
    pub preview_theme: Option<ThemeParams>,
    /// Color scheme the terminal host reports
    pub preview_color_scheme: Option<ColorScheme>,
    /// User the terminal host reports
    pub preview_user: Option<HostUser>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ru", "vetcall", "vet-call-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn main_button_text(&self) -> &str {
        self.main_button_text
            .as_deref()
            .unwrap_or(DEFAULT_MAIN_BUTTON_TEXT)
    }

    pub fn main_button_color(&self) -> &str {
        self.main_button_color
            .as_deref()
            .unwrap_or(DEFAULT_MAIN_BUTTON_COLOR)
    }

    pub fn submit_label(&self) -> &str {
        self.submit_label.as_deref().unwrap_or(SUBMIT_LABEL)
    }

    pub fn loading_label(&self) -> &str {
        self.loading_label.as_deref().unwrap_or(LOADING_LABEL)
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms.unwrap_or(DEFAULT_CLOSE_DELAY_MS))
    }

    pub fn expand_delay(&self) -> Duration {
        Duration::from_millis(self.expand_delay_ms.unwrap_or(DEFAULT_EXPAND_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.main_button_text(), "Отправить заявку");
        assert_eq!(config.main_button_color(), "#4CAF50");
        assert_eq!(config.submit_label(), SUBMIT_LABEL);
        assert_eq!(config.loading_label(), LOADING_LABEL);
        assert_eq!(config.close_delay(), Duration::from_millis(1500));
        assert_eq!(config.expand_delay(), Duration::from_millis(100));
        assert!(config.preview_user.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = FormConfig {
            close_delay_ms: Some(0),
            main_button_color: Some("#2196F3".to_string()),
            ..Default::default()
        };
        assert_eq!(config.close_delay(), Duration::ZERO);
        assert_eq!(config.main_button_color(), "#2196F3");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.main_button_text.is_none());
        assert!(parsed.preview_theme.is_none());
    }

    #[test]
    fn test_deserialize_preview_host() {
        let json = r##"{
            "preview_color_scheme": "dark",
            "preview_theme": {"bg_color": "#17212b"},
            "preview_user": {"id": 42, "first_name": "Иван", "last_name": "Петров", "username": "ivan"},
            "unknown_field": "ignored"
        }"##;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.preview_color_scheme, Some(ColorScheme::Dark));
        assert_eq!(
            parsed.preview_theme.and_then(|t| t.bg_color),
            Some("#17212b".to_string())
        );
        let user = parsed.preview_user.unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.username.as_deref(), Some("ivan"));
    }

    #[test]
    fn test_load_returns_ok() {
        // Falls back to defaults when no config file exists
        let result = FormConfig::load();
        assert!(result.is_ok());
    }
}
