//! Core domain types

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppPhase {
    /// Accepting input
    #[default]
    Running,
    /// Shutting down; the event loop exits on the next iteration
    Quitting,
}

/// Status of the current generation attempt, derived from view state.
///
/// Validation runs synchronously inside the submit handler, so it never
/// shows up as an observable status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    /// Nothing submitted yet, or the last attempt cleared everything
    Idle,
    /// A meme campaign request is outstanding
    Requesting,
    /// The last attempt produced memes
    Succeeded,
    /// The last attempt ended with an error message
    Failed,
}

impl GenerationStatus {
    /// Derive the status from the three fields that define it.
    pub fn derive(loading: bool, has_error: bool, meme_count: usize) -> Self {
        if loading {
            Self::Requesting
        } else if has_error {
            Self::Failed
        } else if meme_count > 0 {
            Self::Succeeded
        } else {
            Self::Idle
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Requesting => "Generating",
            Self::Succeeded => "Done",
            Self::Failed => "Failed",
        }
    }
}

/// Focusable regions of the screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Url,
    Count,
    Submit,
    Results,
}

impl FormFocus {
    /// Next region in tab order (wraps around)
    pub fn next(self) -> Self {
        match self {
            Self::Url => Self::Count,
            Self::Count => Self::Submit,
            Self::Submit => Self::Results,
            Self::Results => Self::Url,
        }
    }

    /// Previous region in tab order (wraps around)
    pub fn prev(self) -> Self {
        match self {
            Self::Url => Self::Results,
            Self::Count => Self::Url,
            Self::Submit => Self::Count,
            Self::Results => Self::Submit,
        }
    }

    /// Whether the region captures printable characters as text input
    pub fn is_text_input(self) -> bool {
        matches!(self, Self::Url)
    }
}
