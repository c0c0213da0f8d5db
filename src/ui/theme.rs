//! Class and style helpers driven by the session's theme and accent.

use crate::domain::{Accent, Theme};

/// Root class for the whole window.
pub fn root_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "app theme-light",
        Theme::Dark => "app theme-dark",
    }
}

/// Inline style exposing the accent colour to the stylesheet.
pub fn accent_style(accent: Accent) -> String {
    format!("--accent: {};", accent.hex())
}

pub fn theme_toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "🌙 Dark",
        Theme::Dark => "☀️ Light",
    }
}

pub fn accent_button(active: bool) -> &'static str {
    if active {
        "accent-option accent-option-active"
    } else {
        "accent-option"
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button-active"
    } else {
        "nav-button"
    }
}

/// Glow around the final price card, derived from the accent colour.
pub fn final_card_style(accent: Accent) -> String {
    let hex = accent.hex();
    format!(
        "border: 1px solid {hex}33; box-shadow: 0 8px 28px -8px {hex}55, inset 0 0 0 1px {hex}1a;"
    )
}

pub fn final_price_style(accent: Accent) -> String {
    let hex = accent.hex();
    format!("color: {hex}; text-shadow: 0 0 16px {hex}55;")
}
