//! Configuration for memegen
//!
//! Supports:
//! - `~/.config/memegen/config.toml` - Global settings
//! - `NEXT_PUBLIC_API_BASE_URL`, `GA_MEASUREMENT_ID`, `GA_API_SECRET` - Environment overrides

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, apply_overrides, default_config_dir, default_config_path,
    init_config_dir, load_settings, resolve_settings, SettingsOverrides, ENV_API_BASE_URL,
    ENV_API_SECRET, ENV_MEASUREMENT_ID,
};
pub use types::*;
