//! Custom widget components

mod footer;
mod form;
mod header;
mod results;

pub use footer::Footer;
pub use form::MemeForm;
pub use header::MainHeader;
pub use results::ResultsGrid;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max` columns, marking the cut with an ellipsis
pub(crate) fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Longest suffix of `text` that fits in `max` columns
pub(crate) fn tail_to_width(text: &str, max: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
