//! Analytics event emitter
//!
//! Events flow through a gtag-style data layer: [`Analytics`] handles push
//! commands onto an unbounded queue and a tag loader task (owned by
//! [`AnalyticsSession`]) forwards them to a [`TagTransport`].
//!
//! Emission is fire-and-forget. When no session is attached, or the session
//! has been removed, [`Analytics::track_event`] does nothing.

pub mod session;
pub mod transport;

pub use session::AnalyticsSession;
pub use transport::{LocalTagTransport, MeasurementProtocol, TagTransport};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::trace;

/// Category attached to every event
pub const EVENT_CATEGORY: &str = "MemeGen";

/// A single analytics event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl AnalyticsEvent {
    pub fn new(action: impl Into<String>, label: Option<&str>, value: Option<i64>) -> Self {
        Self {
            action: action.into(),
            category: EVENT_CATEGORY,
            label: label.map(str::to_string),
            value,
        }
    }
}

/// Commands understood by the tag loader, in data layer order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GtagCommand {
    /// `gtag('js', date)` - bootstrap timestamp
    Js(DateTime<Utc>),
    /// `gtag('config', id)` - binds the measurement ID
    Config { measurement_id: String },
    /// `gtag('event', action, {...})`
    Event(AnalyticsEvent),
}

/// Cloneable handle used by handlers to report events
#[derive(Debug, Clone, Default)]
pub struct Analytics {
    data_layer: Option<mpsc::UnboundedSender<GtagCommand>>,
}

impl Analytics {
    /// A handle that drops every event
    pub fn disabled() -> Self {
        Self::default()
    }

    pub(crate) fn attached(data_layer: mpsc::UnboundedSender<GtagCommand>) -> Self {
        Self {
            data_layer: Some(data_layer),
        }
    }

    /// A handle whose data layer is returned to the caller instead of a tag
    /// loader. Used by tests and by frontends that mirror events elsewhere.
    pub fn recording() -> (Self, mpsc::UnboundedReceiver<GtagCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::attached(tx), rx)
    }

    /// Whether events currently have somewhere to go
    pub fn is_available(&self) -> bool {
        self.data_layer.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    /// Report an event. Never blocks and never fails.
    pub fn track_event(&self, action: &str, label: Option<&str>, value: Option<i64>) {
        let Some(data_layer) = &self.data_layer else {
            trace!("Analytics disabled, dropping {}", action);
            return;
        };

        let event = AnalyticsEvent::new(action, label, value);
        if data_layer.send(GtagCommand::Event(event)).is_err() {
            trace!("Analytics unavailable, dropping {}", action);
        }
    }
}

/// Collect the events queued on a recording data layer (test helper)
pub fn drain_events(rx: &mut mpsc::UnboundedReceiver<GtagCommand>) -> Vec<AnalyticsEvent> {
    let mut events = Vec::new();
    while let Ok(command) = rx.try_recv() {
        if let GtagCommand::Event(event) = command {
            events.push(event);
        }
    }
    events
}
