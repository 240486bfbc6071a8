//! Resolution of host theme parameters into concrete colors

use crate::host::{ColorScheme, ThemeParams};

const DEFAULT_BG: &str = "#ffffff";
const DEFAULT_TEXT: &str = "#000000";
const DEFAULT_HINT: &str = "#999999";
const DEFAULT_BUTTON: &str = "#4CAF50";
const DEFAULT_BUTTON_TEXT: &str = "#ffffff";
const DEFAULT_SECONDARY_BG: &str = "#f8f9fa";

/// Colors the view is drawn with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub bg_color: String,
    pub text_color: String,
    pub hint_color: String,
    pub button_color: String,
    pub button_text_color: String,
    pub secondary_bg_color: String,
}

impl Theme {
    /// Fill every missing host parameter with its default
    pub fn resolve(params: Option<&ThemeParams>, scheme: ColorScheme) -> Self {
        let pick = |value: Option<&String>, default: &str| {
            value
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        let empty = ThemeParams::default();
        let params = params.unwrap_or(&empty);

        Self {
            dark: scheme == ColorScheme::Dark,
            bg_color: pick(params.bg_color.as_ref(), DEFAULT_BG),
            text_color: pick(params.text_color.as_ref(), DEFAULT_TEXT),
            hint_color: pick(params.hint_color.as_ref(), DEFAULT_HINT),
            button_color: pick(params.button_color.as_ref(), DEFAULT_BUTTON),
            button_text_color: pick(params.button_text_color.as_ref(), DEFAULT_BUTTON_TEXT),
            secondary_bg_color: pick(params.secondary_bg_color.as_ref(), DEFAULT_SECONDARY_BG),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::resolve(None, ColorScheme::Light)
    }
}

/// Parse `#rrggbb` (or `#rgb`) into its components
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut parts = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((parts.next()??, parts.next()??, parts.next()??))
        }
        _ => None,
    }
}
