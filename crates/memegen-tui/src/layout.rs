//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows inside the form: URL, count, submit button, error banner
pub const FORM_ROWS: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and theme toggle
    pub header: Rect,

    /// Inputs, submit button and error banner
    pub form: Rect,

    /// Result cards
    pub results: Rect,

    /// Key hints or the last notice (single row, no border)
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),             // Header (glass container)
        Constraint::Length(FORM_ROWS + 2), // Form (glass container)
        Constraint::Min(3),                // Results
        Constraint::Length(1),             // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        results: chunks[2],
        footer: chunks[3],
    }
}
