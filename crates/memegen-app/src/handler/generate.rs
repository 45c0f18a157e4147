//! Generation workflow: submit validation and response handling

use crate::api::{resolve, ApiOutcome, Resolution};
use crate::state::AppState;
use memegen_core::{count_error_message, validate_count, validate_url};
use tracing::{info, warn};

use super::{UpdateAction, UpdateResult};

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Validate the form and, when it passes, request generation.
///
/// Clears the previous result first, so after a failed validation both
/// `memes` and `error` reflect only this attempt.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    state.attempts += 1;
    state.error = None;
    state.memes.clear();
    state.selected_meme = 0;
    state.notice = None;

    if !validate_url(&state.url) {
        state.error = Some(INVALID_URL_MESSAGE.to_string());
        state.analytics.track_event("error", Some("invalid_url"), None);
        return UpdateResult::none();
    }

    if !validate_count(i64::from(state.count)) {
        state.error = Some(count_error_message());
        state.analytics.track_event("error", Some("invalid_count"), None);
        return UpdateResult::none();
    }

    state.loading = true;
    state.spinner_frame = 0;
    let count = state.count;
    state.analytics.track_event(
        "generate_click",
        Some(&count.to_string()),
        Some(i64::from(count)),
    );
    info!("Requesting {} meme(s) for {}", count, state.url);

    UpdateResult::action(UpdateAction::GenerateMemes {
        url: state.url.clone(),
        count,
    })
}

/// Apply the outcome of a meme campaign request
pub fn handle_generation_finished(state: &mut AppState, outcome: ApiOutcome) -> UpdateResult {
    match resolve(outcome) {
        Resolution::Memes(images) => {
            info!("Received {} meme(s)", images.len());
            state.analytics.track_event(
                "generate_success",
                Some("memes_generated"),
                Some(images.len() as i64),
            );
            state.memes = images;
            state.selected_meme = 0;
        }
        Resolution::Failed(failure) => {
            warn!(
                "Generation failed ({}, status {}): {}",
                failure.label, failure.status, failure.message
            );
            state.analytics.track_event(
                "error",
                Some(failure.label),
                Some(i64::from(failure.status)),
            );
            state.error = Some(failure.message);
        }
    }

    state.loading = false;
    UpdateResult::none()
}
