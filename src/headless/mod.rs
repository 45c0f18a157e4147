//! Headless mode - JSON event output for scripting
//!
//! Runs a single generation without the terminal UI and writes structured
//! events to stdout, so shell scripts and CI jobs can consume the result
//! without parsing ANSI escape codes.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"generation_started","url":"https://example.com","count":2,"timestamp":1704700001000}
//! {"event":"memes_generated","memes":["https://cdn/a.png","https://cdn/b.png"],"timestamp":1704700004000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use memegen_app::EngineEvent;
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A validated request was sent to the API
    GenerationStarted {
        url: String,
        count: u8,
        timestamp: i64,
    },

    /// The API returned images
    MemesGenerated { memes: Vec<String>, timestamp: i64 },

    /// The attempt ended with the message shown to the user
    GenerationFailed { message: String, timestamp: i64 },

    /// Error outside the generation flow
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Serialize as one NDJSON line and flush
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Whether this event ends the attempt, and how
    pub fn outcome(&self) -> Option<bool> {
        match self {
            Self::MemesGenerated { .. } => Some(true),
            Self::GenerationFailed { .. } => Some(false),
            Self::Error { fatal: true, .. } => Some(false),
            _ => None,
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map an engine event to its headless form. Events with no
    /// headless counterpart return `None`.
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::GenerationStarted { url, count } => {
                Some(Self::generation_started(url, *count))
            }
            EngineEvent::MemesGenerated { memes } => Some(Self::memes_generated(memes.clone())),
            EngineEvent::GenerationFailed { message } => {
                Some(Self::generation_failed(message.clone()))
            }
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn generation_started(url: &str, count: u8) -> Self {
        Self::GenerationStarted {
            url: url.to_string(),
            count,
            timestamp: Self::now(),
        }
    }

    pub fn memes_generated(memes: Vec<String>) -> Self {
        Self::MemesGenerated {
            memes,
            timestamp: Self::now(),
        }
    }

    pub fn generation_failed(message: String) -> Self {
        Self::GenerationFailed {
            message,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
