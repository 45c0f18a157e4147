//! Dark mode toggle

use crate::state::AppState;
use tracing::debug;

use super::UpdateResult;

pub fn handle_toggle_dark_mode(state: &mut AppState) -> UpdateResult {
    let dark = !state.dark_mode();
    state.set_dark_mode(dark);

    let label = if dark { "dark" } else { "light" };
    state.analytics.track_event("toggle_theme", Some(label), None);
    debug!("Theme switched to {}", label);

    UpdateResult::none()
}
