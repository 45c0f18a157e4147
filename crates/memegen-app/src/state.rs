//! Application state (Model in TEA pattern)

use memegen_core::{AppPhase, FormFocus, GenerationStatus, MIN_MEMES};

use crate::analytics::Analytics;
use crate::config::Settings;
use crate::root_element::{RootElement, DARK_CLASS};

/// Complete view state for the meme generator screen
#[derive(Debug)]
pub struct AppState {
    /// Current lifecycle phase
    pub phase: AppPhase,

    /// Page URL as typed, never trimmed or cleared automatically
    pub url: String,

    /// Requested meme count, always within [MIN_MEMES, MAX_MEMES]
    pub count: u8,

    /// Image references from the last successful generation
    pub memes: Vec<String>,

    /// True only while a generation request is outstanding
    pub loading: bool,

    /// Message shown in the error banner
    pub error: Option<String>,

    /// Theme flag; mutate through [`AppState::set_dark_mode`] only
    dark_mode: bool,

    /// Document root stand-in, carries the `dark` marker
    pub root: RootElement,

    /// Region receiving keystrokes
    pub focus: FormFocus,

    /// Highlighted results card
    pub selected_meme: usize,

    /// Outcome of the last download
    pub notice: Option<String>,

    /// Spinner animation frame while loading
    pub spinner_frame: usize,

    /// Number of submits processed
    pub attempts: u64,

    /// Analytics handle shared with the engine's session
    pub analytics: Analytics,

    /// Resolved settings
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings and analytics disabled
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Analytics::disabled())
    }

    /// Create a new AppState from resolved settings
    pub fn with_settings(settings: Settings, analytics: Analytics) -> Self {
        let dark_mode = settings.ui.dark_mode;
        let mut state = Self {
            phase: AppPhase::Running,
            url: String::new(),
            count: MIN_MEMES,
            memes: Vec::new(),
            loading: false,
            error: None,
            dark_mode: false,
            root: RootElement::new(),
            focus: FormFocus::default(),
            selected_meme: 0,
            notice: None,
            spinner_frame: 0,
            attempts: 0,
            analytics,
            settings,
        };
        state.set_dark_mode(dark_mode);
        state
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Set the theme flag and sync the root marker.
    ///
    /// Returns `true` if the flag changed.
    pub fn set_dark_mode(&mut self, dark: bool) -> bool {
        let changed = self.dark_mode != dark;
        self.dark_mode = dark;
        self.root.set_class(DARK_CLASS, dark);
        changed
    }

    pub fn generation_status(&self) -> GenerationStatus {
        GenerationStatus::derive(self.loading, self.error.is_some(), self.memes.len())
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Reference of the highlighted card, if any
    pub fn selected_meme_url(&self) -> Option<&str> {
        self.memes.get(self.selected_meme).map(String::as_str)
    }
}
