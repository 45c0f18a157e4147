//! Results grid widget
//!
//! One card per meme: position, image reference, suggested file name and
//! the download affordance. Cards share the width equally.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use memegen_app::handler::download_filename;

use super::truncate_to_width;
use crate::theme::{styles, Palette};

pub const EMPTY_MESSAGE: &str = "No memes yet. Enter a URL and press Enter.";
pub const LOADING_MESSAGE: &str = "Generating memes...";

pub struct ResultsGrid<'a> {
    memes: &'a [String],
    palette: &'a Palette,
    selected: usize,
    focused: bool,
    loading: bool,
}

impl<'a> ResultsGrid<'a> {
    pub fn new(memes: &'a [String], palette: &'a Palette) -> Self {
        Self {
            memes,
            palette,
            selected: 0,
            focused: false,
            loading: false,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn render_card(&self, index: usize, reference: &str, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let is_selected = self.focused && index == self.selected;
        let block = styles::glass_block(p, is_selected).title(Span::styled(
            format!(" #{} ", index + 1),
            styles::accent_bold(p),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let download_style = if is_selected {
            styles::focused_selected(p)
        } else {
            styles::keybinding(p)
        };

        let mut lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&download_filename(index), width),
                styles::text_primary(p),
            )),
            Line::from(Span::styled(
                truncate_to_width("[d] Download", width),
                download_style,
            )),
        ];
        // Reference takes whatever rows are left, wrapped
        lines.push(Line::from(Span::styled(
            reference.to_string(),
            styles::text_muted(p),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_message(&self, message: &str, style: Style, area: Rect, buf: &mut Buffer) {
        let line = Line::from(Span::styled(
            truncate_to_width(message, area.width.saturating_sub(2) as usize),
            style,
        ));
        buf.set_line(area.x + 1, area.y, &line, area.width.saturating_sub(1));
    }
}

impl Widget for ResultsGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let p = self.palette;

        if self.memes.is_empty() {
            if self.loading {
                self.render_message(LOADING_MESSAGE, styles::accent(p), area, buf);
            } else {
                self.render_message(EMPTY_MESSAGE, styles::text_muted(p), area, buf);
            }
            return;
        }

        let columns = Layout::horizontal(
            self.memes
                .iter()
                .map(|_| Constraint::Ratio(1, self.memes.len() as u32)),
        )
        .split(area);

        for (index, (reference, column)) in self.memes.iter().zip(columns.iter()).enumerate() {
            self.render_card(index, reference, *column, buf);
        }
    }
}
