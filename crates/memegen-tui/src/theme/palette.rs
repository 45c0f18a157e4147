//! Color palettes for the light and dark themes.
//!
//! The active palette is chosen from the root element's `dark` marker,
//! never from the theme flag directly.

use memegen_app::RootElement;
use ratatui::style::Color;

/// One complete set of theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Text drawn on top of `accent`
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    card_bg: Color::Rgb(255, 255, 255),
    border_dim: Color::Rgb(203, 213, 225),
    border_active: Color::Rgb(79, 70, 229),
    accent: Color::Rgb(79, 70, 229),
    contrast_fg: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(15, 23, 42),
    text_secondary: Color::Rgb(71, 85, 105),
    text_muted: Color::Rgb(148, 163, 184),
    status_green: Color::Rgb(5, 150, 105),
    status_red: Color::Rgb(220, 38, 38),
    status_yellow: Color::Rgb(202, 138, 4),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(129, 140, 248),
    accent: Color::Rgb(129, 140, 248),
    contrast_fg: Color::Rgb(10, 12, 16),
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    status_green: Color::Rgb(16, 185, 129),
    status_red: Color::Rgb(244, 63, 94),
    status_yellow: Color::Rgb(234, 179, 8),
};

/// Palette selected by the root element's classes
pub fn for_root(root: &RootElement) -> &'static Palette {
    if root.is_dark() {
        &DARK
    } else {
        &LIGHT
    }
}
