//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use memegen_core::AppPhase;

use super::{download, form, generate, keys::handle_key, theme, UpdateResult};

/// Spinner frames cycle through this many positions
pub(crate) const SPINNER_FRAMES: usize = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.loading {
                state.spinner_frame = (state.spinner_frame + 1) % SPINNER_FRAMES;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form
        // ─────────────────────────────────────────────────────────
        Message::UrlChanged(text) => form::handle_url_changed(state, text),
        Message::CountChanged(raw) => form::handle_count_changed(state, &raw),
        Message::Paste(text) => form::handle_paste(state, &text),
        Message::FocusNext => form::handle_focus_next(state),
        Message::FocusPrev => form::handle_focus_prev(state),

        // ─────────────────────────────────────────────────────────
        // Generation
        // ─────────────────────────────────────────────────────────
        Message::Submit => generate::handle_submit(state),
        Message::GenerationFinished(outcome) => generate::handle_generation_finished(state, outcome),

        Message::ToggleDarkMode => theme::handle_toggle_dark_mode(state),

        // ─────────────────────────────────────────────────────────
        // Results
        // ─────────────────────────────────────────────────────────
        Message::SelectNextMeme => download::handle_select_next(state),
        Message::SelectPrevMeme => download::handle_select_prev(state),
        Message::DownloadMeme { index } => download::handle_download_meme(state, index),
        Message::DownloadFinished { index, path } => {
            download::handle_download_finished(state, index, path)
        }
        Message::DownloadFailed { index, error } => {
            download::handle_download_failed(state, index, error)
        }
    }
}
