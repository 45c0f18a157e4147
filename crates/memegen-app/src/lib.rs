//! memegen-app - Application state and orchestration for memegen
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the view
//! state, the meme campaign API client, the analytics emitter, configuration
//! loading, and the Engine shared by the TUI and headless frontends.

pub mod actions;
pub mod analytics;
pub mod api;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod root_element;
pub mod signals;
pub mod state;

// Re-export primary types
pub use analytics::{Analytics, AnalyticsEvent, AnalyticsSession};
pub use api::{ApiOutcome, HttpMemeApi, LocalMemeApi, MemeApi, MemeCampaignResponse};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use root_element::RootElement;
pub use state::AppState;
