//! Semantic style builders on top of a [`Palette`].

use memegen_core::GenerationStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

/// Braille spinner shown while a request is outstanding
pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

pub fn error(p: &Palette) -> Style {
    Style::default().fg(p.status_red).add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.status_yellow)
}

/// Accent background, used for focused buttons and the selected card
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

/// Status indicator for the header.
///
/// Returns `(icon, label, Style)`; the icon animates while requesting.
pub fn status_indicator(
    p: &Palette,
    status: GenerationStatus,
    frame: usize,
) -> (&'static str, &'static str, Style) {
    let label = status.label();
    match status {
        GenerationStatus::Idle => ("○", label, text_muted(p)),
        GenerationStatus::Requesting => (
            spinner(frame),
            label,
            Style::default()
                .fg(p.status_yellow)
                .add_modifier(Modifier::BOLD),
        ),
        GenerationStatus::Succeeded => (
            "●",
            label,
            Style::default()
                .fg(p.status_green)
                .add_modifier(Modifier::BOLD),
        ),
        GenerationStatus::Failed => ("✗", label, Style::default().fg(p.status_red)),
    }
}
