//! Footer row: key hints for the focused region, or the last notice

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use memegen_core::FormFocus;

use crate::theme::{styles, Palette};

pub struct Footer<'a> {
    palette: &'a Palette,
    focus: FormFocus,
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(palette: &'a Palette, focus: FormFocus) -> Self {
        Self {
            palette,
            focus,
            notice: None,
        }
    }

    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            FormFocus::Url => &[
                ("Enter", "Generate"),
                ("Tab", "Next"),
                ("^U", "Clear"),
                ("^T", "Theme"),
                ("Esc", "Quit"),
            ],
            FormFocus::Count => &[
                ("↑/↓", "Count"),
                ("Enter", "Generate"),
                ("Tab", "Next"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
            FormFocus::Submit => &[
                ("Enter", "Generate"),
                ("Tab", "Next"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
            FormFocus::Results => &[
                ("←/→", "Select"),
                ("d", "Download"),
                ("Tab", "Next"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let p = self.palette;

        let line = match self.notice {
            Some(notice) => Line::from(vec![
                Span::raw(" "),
                Span::styled(notice.to_string(), styles::accent(p)),
            ]),
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, action) in self.hints() {
                    spans.push(Span::styled(*key, styles::keybinding(p)));
                    spans.push(Span::styled(format!(" {action}  "), styles::text_muted(p)));
                }
                Line::from(spans)
            }
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
