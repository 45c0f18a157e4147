//! Generation form widget
//!
//! URL input, count stepper, submit button and the error banner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use memegen_app::AppState;
use memegen_core::{FormFocus, MAX_MEMES, MIN_MEMES};

use super::{tail_to_width, truncate_to_width};
use crate::theme::{styles, Palette};

pub const URL_PLACEHOLDER: &str = "https://example.com/article";
pub const SUBMIT_LABEL: &str = "Generate Memes";
pub const SUBMIT_LOADING_LABEL: &str = "Generating...";

/// Label column width, including padding
const LABEL_WIDTH: u16 = 8;
const CURSOR: &str = "▏";

pub struct MemeForm<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> MemeForm<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn label_style(&self, region: FormFocus) -> Style {
        if self.state.focus == region {
            styles::accent_bold(self.palette)
        } else {
            styles::text_secondary(self.palette)
        }
    }

    fn url_line(&self, width: u16) -> Line<'a> {
        let p = self.palette;
        let focused = self.state.focus == FormFocus::Url;
        let available = width.saturating_sub(LABEL_WIDTH + 1) as usize;

        let mut spans = vec![Span::styled(" URL    ", self.label_style(FormFocus::Url))];
        if self.state.url.is_empty() {
            spans.push(Span::styled(
                truncate_to_width(URL_PLACEHOLDER, available),
                styles::text_muted(p),
            ));
        } else {
            spans.push(Span::styled(
                tail_to_width(&self.state.url, available).to_string(),
                styles::text_primary(p),
            ));
        }
        if focused {
            spans.push(Span::styled(CURSOR, styles::accent(p)));
        }
        Line::from(spans)
    }

    fn count_line(&self) -> Line<'a> {
        let p = self.palette;
        let arrows = if self.state.focus == FormFocus::Count {
            styles::accent(p)
        } else {
            styles::text_muted(p)
        };
        Line::from(vec![
            Span::styled(" Memes  ", self.label_style(FormFocus::Count)),
            Span::styled("‹ ", arrows),
            Span::styled(self.state.count.to_string(), styles::text_primary(p)),
            Span::styled(" ›", arrows),
            Span::styled(format!("  ({MIN_MEMES}-{MAX_MEMES})"), styles::text_muted(p)),
        ])
    }

    fn submit_line(&self) -> Line<'a> {
        let p = self.palette;
        let (label, style) = if self.state.loading {
            (
                format!(
                    "[ {} {} ]",
                    styles::spinner(self.state.spinner_frame),
                    SUBMIT_LOADING_LABEL
                ),
                styles::text_muted(p),
            )
        } else if self.state.focus == FormFocus::Submit {
            (format!("[ {SUBMIT_LABEL} ]"), styles::focused_selected(p))
        } else {
            (format!("[ {SUBMIT_LABEL} ]"), styles::accent(p))
        };
        Line::from(vec![Span::raw("        "), Span::styled(label, style)])
    }

    fn error_line(&self, width: u16) -> Option<Line<'a>> {
        let message = self.state.error.as_deref()?;
        let available = width.saturating_sub(3) as usize;
        Some(Line::from(vec![
            Span::raw(" "),
            Span::styled("✗ ", styles::error(self.palette)),
            Span::styled(
                truncate_to_width(message, available),
                styles::error(self.palette),
            ),
        ]))
    }
}

impl Widget for MemeForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(
            self.state.focus,
            FormFocus::Url | FormFocus::Count | FormFocus::Submit
        );
        let block = styles::glass_block(self.palette, focused).title(Span::styled(
            " Generate ",
            styles::text_secondary(self.palette),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![self.url_line(inner.width), self.count_line(), self.submit_line()];
        if let Some(error) = self.error_line(inner.width) {
            lines.push(error);
        }

        for (row, line) in lines.iter().enumerate().take(inner.height as usize) {
            buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 6);
        term.render_widget(MemeForm::new(state, &LIGHT), term.area());
        term
    }

    #[test]
    fn test_form_shows_placeholder_when_url_empty() {
        let state = AppState::new();
        let term = render(&state);

        assert!(term.buffer_contains(URL_PLACEHOLDER));
        assert!(term.buffer_contains("Generate Memes"));
        assert!(term.buffer_contains("(1-5)"));
    }

    #[test]
    fn test_form_shows_typed_url_and_count() {
        let mut state = AppState::new();
        state.url = "https://news.example.org/story".into();
        state.count = 4;
        let term = render(&state);

        assert!(term.buffer_contains("https://news.example.org/story"));
        assert!(term.line_contains(2, "‹ 4 ›"));
    }

    #[test]
    fn test_long_url_shows_tail() {
        let mut state = AppState::new();
        state.url = format!("https://example.com/{}/end", "x".repeat(80));
        let term = render(&state);

        assert!(term.buffer_contains("/end"));
        assert!(!term.buffer_contains("https://example.com"));
    }

    #[test]
    fn test_error_banner() {
        let mut state = AppState::new();
        state.error = Some("Please enter a valid URL".into());
        let term = render(&state);

        assert!(term.line_contains(4, "Please enter a valid URL"));
    }

    #[test]
    fn test_loading_replaces_button_label() {
        let mut state = AppState::new();
        state.loading = true;
        let term = render(&state);

        assert!(term.buffer_contains("Generating..."));
        assert!(!term.buffer_contains("Generate Memes"));
    }
}
