//! Results selection and download tracking

use std::path::PathBuf;

use crate::state::AppState;
use tracing::{info, warn};

use super::{UpdateAction, UpdateResult};

/// Suggested file name of a card (0-based index)
pub fn download_filename(index: usize) -> String {
    format!("meme-{}.png", index + 1)
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    if !state.memes.is_empty() {
        state.selected_meme = (state.selected_meme + 1) % state.memes.len();
    }
    UpdateResult::none()
}

pub fn handle_select_prev(state: &mut AppState) -> UpdateResult {
    let len = state.memes.len();
    if len > 0 {
        state.selected_meme = (state.selected_meme + len - 1) % len;
    }
    UpdateResult::none()
}

/// Record the download and hand the save off to the event loop
pub fn handle_download_meme(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(url) = state.memes.get(index).cloned() else {
        warn!("Download requested for missing meme {}", index);
        return UpdateResult::none();
    };

    let position = (index + 1).to_string();
    state
        .analytics
        .track_event("download_meme", Some(&position), None);

    let filename = download_filename(index);
    state.notice = Some(format!("Saving {filename}..."));

    UpdateResult::action(UpdateAction::DownloadMeme {
        index,
        url,
        filename,
    })
}

pub fn handle_download_finished(state: &mut AppState, index: usize, path: PathBuf) -> UpdateResult {
    info!("Saved meme {} to {}", index + 1, path.display());
    state.notice = Some(format!("Saved {}", path.display()));
    UpdateResult::none()
}

pub fn handle_download_failed(state: &mut AppState, index: usize, error: String) -> UpdateResult {
    warn!("Download of meme {} failed: {}", index + 1, error);
    state.notice = Some(format!(
        "Could not save {}: {}",
        download_filename(index),
        error
    ));
    UpdateResult::none()
}
