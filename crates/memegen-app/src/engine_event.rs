//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use std::path::PathBuf;

/// Domain events emitted by the Engine.
///
/// Computed by comparing state before and after a message, so subscribers
/// see a consistent view of state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A validated request was dispatched
    GenerationStarted { url: String, count: u8 },

    /// The request produced images
    MemesGenerated { memes: Vec<String> },

    /// The attempt ended with a user-facing error (validation or request)
    GenerationFailed { message: String },

    /// Dark mode flipped
    ThemeChanged { dark: bool },

    /// A background download completed, one of `path`/`error` is set
    DownloadFinished {
        index: usize,
        path: Option<PathBuf>,
        error: Option<String>,
    },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name used for logging and serialization
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::GenerationStarted { .. } => "generation_started",
            Self::MemesGenerated { .. } => "memes_generated",
            Self::GenerationFailed { .. } => "generation_failed",
            Self::ThemeChanged { .. } => "theme_changed",
            Self::DownloadFinished { .. } => "download_finished",
            Self::Shutdown => "shutdown",
        }
    }
}
