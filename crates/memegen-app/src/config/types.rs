//! Configuration types for memegen

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default GA4 Measurement Protocol collection endpoint
pub const DEFAULT_ANALYTICS_ENDPOINT: &str = "https://www.google-analytics.com/mp/collect";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub analytics: AnalyticsSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Meme campaign API settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the generation API. Empty means every request fails.
    #[serde(default)]
    pub base_url: String,
}

/// Analytics settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalyticsSettings {
    /// Tag identifier. Empty disables analytics entirely.
    #[serde(default)]
    pub measurement_id: String,

    /// Measurement Protocol secret. Without it events are queued but never sent.
    #[serde(default)]
    pub api_secret: String,

    /// Collection endpoint
    #[serde(default = "default_analytics_endpoint")]
    pub endpoint: String,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            measurement_id: String::new(),
            api_secret: String::new(),
            endpoint: default_analytics_endpoint(),
        }
    }
}

impl AnalyticsSettings {
    pub fn is_enabled(&self) -> bool {
        !self.measurement_id.trim().is_empty()
    }
}

fn default_analytics_endpoint() -> String {
    DEFAULT_ANALYTICS_ENDPOINT.to_string()
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Start in dark mode. Toggling at runtime is never written back.
    #[serde(default)]
    pub dark_mode: bool,

    /// Where downloaded memes are saved. Empty = current directory.
    #[serde(default)]
    pub download_dir: String,
}

impl UiSettings {
    /// Resolve the download directory
    pub fn download_path(&self) -> PathBuf {
        if self.download_dir.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(self.download_dir.trim())
        }
    }
}
