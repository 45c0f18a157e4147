//! Form input handlers

use crate::state::AppState;
use memegen_core::{parse_count, FormFocus};

use super::UpdateResult;

/// Store the URL text verbatim
pub fn handle_url_changed(state: &mut AppState, text: String) -> UpdateResult {
    state.url = text;
    UpdateResult::none()
}

/// Parse and clamp the count; out-of-range input is corrected silently
pub fn handle_count_changed(state: &mut AppState, raw: &str) -> UpdateResult {
    state.count = parse_count(raw);
    UpdateResult::none()
}

/// Route pasted text into the focused input; line breaks never reach the URL
pub fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    match state.focus {
        FormFocus::Url => {
            state.url.extend(text.chars().filter(|c| !matches!(c, '\r' | '\n')));
        }
        FormFocus::Count => {
            state.count = parse_count(text.trim());
        }
        FormFocus::Submit | FormFocus::Results => {}
    }
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.focus = state.focus.next();
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.focus = state.focus.prev();
    UpdateResult::none()
}
