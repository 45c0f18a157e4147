//! Header bar widget
//!
//! Title on the left, generation status and the theme toggle on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use memegen_core::GenerationStatus;

use crate::theme::{styles, Palette};

pub const APP_TITLE: &str = "MemeGen";
pub const APP_TAGLINE: &str = "memes from any webpage";

/// Main header showing the app title, status and theme toggle
pub struct MainHeader<'a> {
    palette: &'a Palette,
    status: GenerationStatus,
    spinner_frame: usize,
    dark_mode: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(palette: &'a Palette, dark_mode: bool) -> Self {
        Self {
            palette,
            status: GenerationStatus::Idle,
            spinner_frame: 0,
            dark_mode,
        }
    }

    pub fn status(mut self, status: GenerationStatus, spinner_frame: usize) -> Self {
        self.status = status;
        self.spinner_frame = spinner_frame;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, label, status_style) =
            styles::status_indicator(p, self.status, self.spinner_frame);

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, status_style),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled("/", styles::text_muted(p)),
            Span::raw(" "),
            Span::styled(APP_TAGLINE, styles::text_secondary(p)),
        ]);

        let (theme_icon, theme_label) = if self.dark_mode {
            ("☾", "Dark")
        } else {
            ("☀", "Light")
        };
        let right = Line::from(vec![
            Span::styled(label, status_style),
            Span::raw("  "),
            Span::styled("[", styles::text_muted(p)),
            Span::styled("^T", styles::keybinding(p)),
            Span::styled("] ", styles::text_muted(p)),
            Span::styled(theme_icon, styles::accent(p)),
            Span::raw(" "),
            Span::styled(theme_label, styles::text_primary(p)),
            Span::raw(" "),
        ]);

        let left_width = left.width() as u16;
        let right_width = right.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);
        if left_width + right_width + 2 <= inner.width {
            let right_x = inner.x + inner.width - right_width;
            buf.set_line(right_x, inner.y, &right, right_width);
        }
    }
}
