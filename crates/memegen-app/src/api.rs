//! Meme campaign API client
//!
//! One call, one outcome: [`MemeApi::generate`] issues a single
//! `POST {base}/meme_campaign?url=..&num_memes=..` and never retries. The
//! HTTP result is captured as an [`ApiOutcome`], and [`resolve`] maps that
//! outcome to what the user sees plus the analytics event describing it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use memegen_core::prelude::*;

/// Path segment of the generation endpoint
pub const MEME_CAMPAIGN_PATH: &str = "meme_campaign";

pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from server";
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded";
pub const TIMEOUT_MESSAGE: &str = "Server timeout. Please try again later.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate memes. Try again.";

/// Response body of the meme campaign endpoint.
///
/// Fields that are present but of the wrong JSON type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemeCampaignResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meme_images: Option<Vec<String>>,
}

impl MemeCampaignResponse {
    /// Leniently parse a response body.
    ///
    /// Returns `None` when the body is not a JSON object at all.
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;

        let error = object
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string);

        let meme_images = object.get("meme_images").and_then(|images| {
            images
                .as_array()?
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });

        Some(Self { error, meme_images })
    }

    /// Server-reported error, if present and non-empty
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// Result of one request, discriminated by how far it got
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    /// 2xx response. Unparseable bodies become an empty response.
    Success(MemeCampaignResponse),
    /// Non-2xx response, with the body when it parsed
    HttpError {
        status: u16,
        body: Option<MemeCampaignResponse>,
    },
    /// No response was received (DNS, connect, TLS, invalid base URL, ...)
    TransportError { reason: String },
}

/// A failed attempt: message for the user plus the analytics description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    pub message: String,
    pub label: &'static str,
    /// HTTP status, or 0 when there is none
    pub status: u16,
}

impl GenerationFailure {
    fn new(message: impl Into<String>, label: &'static str, status: u16) -> Self {
        Self {
            message: message.into(),
            label,
            status,
        }
    }
}

/// What an [`ApiOutcome`] means for the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Memes(Vec<String>),
    Failed(GenerationFailure),
}

/// Map a request outcome to the user-visible result.
///
/// Only 429 and 504 get dedicated handling; every other status falls into
/// the generic bucket.
pub fn resolve(outcome: ApiOutcome) -> Resolution {
    match outcome {
        ApiOutcome::Success(MemeCampaignResponse { error, meme_images }) => {
            match (error.filter(|e| !e.is_empty()), meme_images) {
                (Some(message), _) => {
                    Resolution::Failed(GenerationFailure::new(message, "api_error", 0))
                }
                (None, Some(images)) => Resolution::Memes(images),
                (None, None) => Resolution::Failed(GenerationFailure::new(
                    UNEXPECTED_RESPONSE_MESSAGE,
                    "unexpected_response",
                    0,
                )),
            }
        }
        ApiOutcome::HttpError { status: 429, body } => {
            let message = body
                .as_ref()
                .and_then(MemeCampaignResponse::error_message)
                .unwrap_or(RATE_LIMIT_MESSAGE);
            Resolution::Failed(GenerationFailure::new(message, "rate_limit", 429))
        }
        ApiOutcome::HttpError { status: 504, .. } => {
            Resolution::Failed(GenerationFailure::new(TIMEOUT_MESSAGE, "timeout", 504))
        }
        ApiOutcome::HttpError { status, .. } => Resolution::Failed(GenerationFailure::new(
            GENERIC_FAILURE_MESSAGE,
            "unknown_error",
            status,
        )),
        ApiOutcome::TransportError { .. } => Resolution::Failed(GenerationFailure::new(
            GENERIC_FAILURE_MESSAGE,
            "unknown_error",
            0,
        )),
    }
}

/// Build the full request URL for a campaign
pub fn campaign_url(base_url: &str, url: &str, count: u8) -> Result<Url> {
    let base = base_url.trim().trim_end_matches('/');
    let mut endpoint = Url::parse(&format!("{base}/{MEME_CAMPAIGN_PATH}"))
        .map_err(|e| Error::config_invalid(format!("API base URL {base_url:?}: {e}")))?;
    endpoint
        .query_pairs_mut()
        .append_pair("url", url)
        .append_pair("num_memes", &count.to_string());
    Ok(endpoint)
}

/// Shared HTTP client for the API, downloads and analytics.
///
/// Requests carry reqwest's default headers only.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| Error::http(e.to_string()))
}

/// Meme generation backend
///
/// The TUI uses [`HttpMemeApi`]; tests substitute in-memory fakes.
#[trait_variant::make(MemeApi: Send)]
pub trait LocalMemeApi {
    /// Request `count` memes for `url`. Never fails: every failure mode is an outcome.
    async fn generate(&self, url: &str, count: u8) -> ApiOutcome;
}

/// reqwest-backed implementation
#[derive(Debug, Clone)]
pub struct HttpMemeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMemeApi {
    /// Create a client. No request timeout is configured; the server and
    /// network decide when a request gives up.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(http_client()?, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl MemeApi for HttpMemeApi {
    async fn generate(&self, url: &str, count: u8) -> ApiOutcome {
        let endpoint = match campaign_url(&self.base_url, url, count) {
            Ok(endpoint) => endpoint,
            Err(e) => {
                warn!("Cannot build meme campaign request: {}", e);
                return ApiOutcome::TransportError {
                    reason: e.to_string(),
                };
            }
        };

        debug!("POST {}", endpoint);
        let response = match self.client.post(endpoint).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Meme campaign request failed: {}", e);
                return ApiOutcome::TransportError {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(text) => MemeCampaignResponse::parse(&text),
            // A truncated 2xx body carries no usable result
            Err(e) if status.is_success() => {
                warn!("Meme campaign body read failed: {}", e);
                return ApiOutcome::TransportError {
                    reason: e.to_string(),
                };
            }
            // The status alone still decides rate limit and timeout handling
            Err(e) => {
                debug!("Failed to read response body: {}", e);
                None
            }
        };

        if status.is_success() {
            info!("Meme campaign responded {}", status);
            ApiOutcome::Success(body.unwrap_or_default())
        } else {
            warn!("Meme campaign responded {}", status);
            ApiOutcome::HttpError {
                status: status.as_u16(),
                body,
            }
        }
    }
}
