//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused region
//! - `form`: URL/count input and focus handlers
//! - `generate`: Submit validation and response handling
//! - `theme`: Dark mode toggle
//! - `download`: Results selection and download tracking

pub(crate) mod download;
pub(crate) mod form;
pub(crate) mod generate;
pub(crate) mod keys;
pub(crate) mod theme;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use download::download_filename;
pub use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Issue the meme campaign request in the background
    GenerateMemes { url: String, count: u8 },

    /// Save an image reference to the download directory
    DownloadMeme {
        index: usize,
        url: String,
        filename: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
