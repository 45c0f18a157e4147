//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use crate::api::ApiOutcome;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Animation tick
    Tick,

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form input
    // ─────────────────────────────────────────────────────────
    /// New raw text of the URL field
    UrlChanged(String),

    /// New raw text of the count field, clamped on arrival
    CountChanged(String),

    /// Text pasted into the terminal
    Paste(String),

    /// Move focus forward in tab order
    FocusNext,

    /// Move focus backward in tab order
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────
    /// Validate the form and request memes
    Submit,

    /// The meme campaign request completed (in any way)
    GenerationFinished(ApiOutcome),

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    ToggleDarkMode,

    // ─────────────────────────────────────────────────────────
    // Results
    // ─────────────────────────────────────────────────────────
    SelectNextMeme,
    SelectPrevMeme,

    /// Activate the download affordance of a card (0-based)
    DownloadMeme { index: usize },

    /// Background download saved the image
    DownloadFinished { index: usize, path: PathBuf },

    /// Background download failed
    DownloadFailed { index: usize, error: String },
}
