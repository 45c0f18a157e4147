//! Headless mode runner - one generation without TUI
//!
//! Feeds the form through the Engine exactly like the terminal UI would,
//! then waits for the request to settle and emits JSON events to stdout.

use std::io::{self, Write};

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{info, warn};

use memegen_app::config::Settings;
use memegen_app::{message::Message, Engine, EngineEvent, MemeApi};
use memegen_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI.
///
/// Returns `true` when memes were generated.
pub async fn run_headless(settings: Settings, url: String, count: i64) -> Result<bool> {
    info!("═══════════════════════════════════════════════════════");
    info!("memegen starting in HEADLESS mode");
    info!("URL: {:?}, count: {}", url, count);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings)?;
    let mut stdout = io::stdout();
    let result = generate_once(&mut engine, url, count, &mut stdout).await;
    if let Err(ref e) = result {
        let _ = HeadlessEvent::error(e.to_string(), e.is_fatal()).write_line(&mut stdout);
    }

    engine.shutdown();

    info!("memegen headless mode exiting");
    result
}

/// Submit the form once and write events until the attempt settles
pub async fn generate_once<A, W>(
    engine: &mut Engine<A>,
    url: String,
    count: i64,
    out: &mut W,
) -> Result<bool>
where
    A: MemeApi + Send + Sync + 'static,
    W: Write,
{
    let mut events = engine.subscribe();

    engine.process_message(Message::UrlChanged(url));
    engine.process_message(Message::CountChanged(count.to_string()));
    engine.process_message(Message::Submit);

    let mut outcome = flush_events(&mut events, out)?;

    while outcome.is_none() {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }
        if !engine.process_next().await {
            return Err(Error::ChannelClosed);
        }
        outcome = flush_events(&mut events, out)?;
    }

    match outcome {
        Some(succeeded) => Ok(succeeded),
        None => {
            HeadlessEvent::error("generation interrupted".to_string(), true).write_line(out)?;
            Ok(false)
        }
    }
}

/// Write every queued engine event, returning the attempt outcome if one
/// was seen
fn flush_events<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<Option<bool>> {
    let mut outcome = None;
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine(&event) {
                    headless.write_line(out)?;
                    outcome = outcome.or(headless.outcome());
                }
            }
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memegen_app::{ApiOutcome, MemeCampaignResponse};

    struct FixedApi(ApiOutcome);

    impl MemeApi for FixedApi {
        async fn generate(&self, _url: &str, _count: u8) -> ApiOutcome {
            self.0.clone()
        }
    }

    fn lines(out: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|l| serde_json::from_str(l).expect("invalid JSON line"))
            .collect()
    }

    #[tokio::test]
    async fn test_successful_generation_writes_started_and_memes() {
        let api = FixedApi(ApiOutcome::Success(MemeCampaignResponse {
            error: None,
            meme_images: Some(vec!["a.png".into(), "b.png".into()]),
        }));
        let mut engine = Engine::with_api(Settings::default(), api).unwrap();
        let mut out = Vec::new();

        let ok = generate_once(&mut engine, "https://example.com".into(), 2, &mut out)
            .await
            .unwrap();

        assert!(ok);
        let events = lines(&out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "generation_started");
        assert_eq!(events[0]["count"], 2);
        assert_eq!(events[1]["event"], "memes_generated");
        assert_eq!(events[1]["memes"][1], "b.png");
    }

    #[tokio::test]
    async fn test_blank_url_fails_without_request() {
        let api = FixedApi(ApiOutcome::TransportError {
            reason: "unreachable".into(),
        });
        let mut engine = Engine::with_api(Settings::default(), api).unwrap();
        let mut out = Vec::new();

        let ok = generate_once(&mut engine, "   ".into(), 1, &mut out)
            .await
            .unwrap();

        assert!(!ok);
        let events = lines(&out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "generation_failed");
    }

    #[tokio::test]
    async fn test_rate_limit_reports_failure() {
        let api = FixedApi(ApiOutcome::HttpError {
            status: 429,
            body: None,
        });
        let mut engine = Engine::with_api(Settings::default(), api).unwrap();
        let mut out = Vec::new();

        let ok = generate_once(&mut engine, "https://example.com".into(), 9, &mut out)
            .await
            .unwrap();

        assert!(!ok);
        let events = lines(&out);
        assert_eq!(events[0]["event"], "generation_started");
        // Count is clamped like the form does
        assert_eq!(events[0]["count"], 5);
        assert_eq!(events[1]["event"], "generation_failed");
    }
}
