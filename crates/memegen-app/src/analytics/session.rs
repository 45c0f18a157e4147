//! Scoped analytics lifetime
//!
//! An [`AnalyticsSession`] is acquired when the engine starts and released
//! when it shuts down. Dropping it (including during unwinding) aborts the
//! tag loader, which closes the data layer for every [`Analytics`] clone.

use chrono::Utc;
use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::{Analytics, GtagCommand, TagTransport};

pub struct AnalyticsSession {
    measurement_id: String,
    analytics: Analytics,
    loader: Option<JoinHandle<()>>,
}

impl AnalyticsSession {
    /// Start the tag loader for `measurement_id`.
    ///
    /// The data layer always begins with the bootstrap pair: `js` then
    /// `config`. Must be called from within a tokio runtime.
    pub fn inject<T>(measurement_id: impl Into<String>, transport: T) -> Self
    where
        T: TagTransport + Send + Sync + 'static,
    {
        let measurement_id = measurement_id.into();
        let (tx, rx) = mpsc::unbounded_channel();

        // The receiver is alive, these cannot fail
        let _ = tx.send(GtagCommand::Js(Utc::now()));
        let _ = tx.send(GtagCommand::Config {
            measurement_id: measurement_id.clone(),
        });

        let loader = tokio::spawn(run_tag_loader(rx, transport, new_client_id()));
        info!("Analytics tag loader started for {}", measurement_id);

        Self {
            measurement_id,
            analytics: Analytics::attached(tx),
            loader: Some(loader),
        }
    }

    /// Handle for emitting events into this session
    pub fn analytics(&self) -> Analytics {
        self.analytics.clone()
    }

    /// Whether the tag loader is still running
    pub fn is_active(&self) -> bool {
        self.loader.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Tear the session down explicitly
    pub fn remove(self) {
        drop(self);
    }
}

impl Drop for AnalyticsSession {
    fn drop(&mut self) {
        if let Some(loader) = self.loader.take() {
            loader.abort();
            info!("Analytics tag loader removed for {}", self.measurement_id);
        }
    }
}

/// GA-style client identifier, random per session
fn new_client_id() -> String {
    let random: u32 = rand::thread_rng().gen();
    format!("{}.{}", random, Utc::now().timestamp())
}

async fn run_tag_loader<T: TagTransport>(
    mut data_layer: mpsc::UnboundedReceiver<GtagCommand>,
    transport: T,
    client_id: String,
) {
    let mut measurement_id: Option<String> = None;

    while let Some(command) = data_layer.recv().await {
        match command {
            GtagCommand::Js(at) => debug!("gtag js initialised at {}", at),
            GtagCommand::Config { measurement_id: id } => {
                debug!("gtag config {}", id);
                measurement_id = Some(id);
            }
            GtagCommand::Event(event) => {
                let Some(ref id) = measurement_id else {
                    debug!("Event {} before config, dropped", event.action);
                    continue;
                };
                if let Err(e) = transport.send_event(id, &client_id, &event).await {
                    debug!("Analytics event {} not delivered: {}", event.action, e);
                }
            }
        }
    }
}
