//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the view state, the message channel, the API client,
//! the downloader and the analytics session. Both frontends drive it the
//! same way: feed messages in, read state or subscribe to events.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::info;

use crate::actions::{ActionContext, Downloader};
use crate::analytics::{Analytics, AnalyticsSession, MeasurementProtocol};
use crate::api::{http_client, HttpMemeApi, MemeApi};
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use memegen_core::Result;

/// Capacity of the message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    attempts: u64,
    loading: bool,
    dark_mode: bool,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            attempts: state.attempts,
            loading: state.loading,
            dark_mode: state.dark_mode(),
        }
    }
}

/// Orchestration engine for memegen.
///
/// Encapsulates everything shared between the TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Background task context (API client, downloader)
/// - Analytics session
/// - Event broadcasting for external consumers
pub struct Engine<A = HttpMemeApi> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    ctx: ActionContext<A>,

    /// Tag loader lifetime. None when analytics is disabled or after shutdown.
    analytics_session: Option<AnalyticsSession>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<HttpMemeApi> {
    /// Create an Engine talking to the configured meme campaign API.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        let client = http_client()?;
        let api = HttpMemeApi::with_client(client.clone(), settings.api.base_url.clone());
        Ok(Self::build(settings, api, client))
    }
}

impl<A> Engine<A>
where
    A: MemeApi + Send + Sync + 'static,
{
    /// Create an Engine around any [`MemeApi`] implementation
    pub fn with_api(settings: Settings, api: A) -> Result<Self> {
        Ok(Self::build(settings, api, http_client()?))
    }

    fn build(settings: Settings, api: A, client: reqwest::Client) -> Self {
        let analytics_session = if settings.analytics.is_enabled() {
            let transport = MeasurementProtocol::new(
                client.clone(),
                settings.analytics.endpoint.clone(),
                &settings.analytics.api_secret,
            );
            Some(AnalyticsSession::inject(
                settings.analytics.measurement_id.trim(),
                transport,
            ))
        } else {
            info!("No measurement ID configured, analytics disabled");
            None
        };
        let analytics = analytics_session
            .as_ref()
            .map(AnalyticsSession::analytics)
            .unwrap_or_else(Analytics::disabled);

        let downloader = Downloader::new(client, settings.ui.download_path());
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        let ctx = ActionContext {
            msg_tx: msg_tx.clone(),
            api: Arc::new(api),
            downloader,
        };

        Self {
            state: AppState::with_settings(settings, analytics),
            msg_tx,
            msg_rx,
            ctx,
            analytics_session,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// EngineEvents for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);
        let download = download_event(&msg);
        let responded = matches!(msg, Message::GenerationFinished(_));

        process::process_message(&mut self.state, msg, &self.ctx);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post, responded);
        if let Some(event) = download {
            self.emit(event);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from background tasks and process it.
    ///
    /// Returns `false` if the channel closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Whether the analytics tag loader is running
    pub fn analytics_active(&self) -> bool {
        self.analytics_session
            .as_ref()
            .is_some_and(AnalyticsSession::is_active)
    }

    /// Release the analytics session and notify subscribers.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        if let Some(session) = self.analytics_session.take() {
            session.remove();
        }
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot, responded: bool) {
        let submitted = post.attempts > pre.attempts;

        // Request dispatched
        if post.loading && (submitted || !pre.loading) {
            self.emit(EngineEvent::GenerationStarted {
                url: self.state.url.clone(),
                count: self.state.count,
            });
        }

        // Attempt finished, either by failed validation or by a response.
        // Every response counts, even one arriving after a newer submit.
        let finished = (submitted && !post.loading) || responded;
        if finished {
            match &self.state.error {
                Some(message) => self.emit(EngineEvent::GenerationFailed {
                    message: message.clone(),
                }),
                None => self.emit(EngineEvent::MemesGenerated {
                    memes: self.state.memes.clone(),
                }),
            }
        }

        if pre.dark_mode != post.dark_mode {
            self.emit(EngineEvent::ThemeChanged {
                dark: post.dark_mode,
            });
        }
    }

    /// send() only fails without subscribers, which is fine
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}

fn download_event(msg: &Message) -> Option<EngineEvent> {
    match msg {
        Message::DownloadFinished { index, path } => Some(EngineEvent::DownloadFinished {
            index: *index,
            path: Some(path.clone()),
            error: None,
        }),
        Message::DownloadFailed { index, error } => Some(EngineEvent::DownloadFinished {
            index: *index,
            path: None,
            error: Some(error.clone()),
        }),
        _ => None,
    }
}
