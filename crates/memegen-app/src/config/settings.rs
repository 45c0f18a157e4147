//! Settings loading: config.toml, environment variables, and CLI overrides

use super::types::Settings;
use memegen_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "memegen";

/// Base URL of the meme campaign API
pub const ENV_API_BASE_URL: &str = "NEXT_PUBLIC_API_BASE_URL";
/// Analytics tag identifier
pub const ENV_MEASUREMENT_ID: &str = "GA_MEASUREMENT_ID";
/// Measurement Protocol secret
pub const ENV_API_SECRET: &str = "GA_API_SECRET";

/// Values supplied on the command line. `None` leaves the setting untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub api_base_url: Option<String>,
    pub measurement_id: Option<String>,
    pub dark_mode: Option<bool>,
    pub download_dir: Option<String>,
}

/// Default location of the config directory (`~/.config/memegen`)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Default location of the config file
pub fn default_config_path() -> PathBuf {
    default_config_dir().join(CONFIG_FILENAME)
}

/// Load settings from a config file, falling back to defaults
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply environment variable overrides on top of file settings.
///
/// Empty variables are ignored so an exported-but-blank variable does not
/// wipe a value from the config file.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Some(base_url) = non_empty_env(ENV_API_BASE_URL) {
        debug!("{} overrides api.base_url", ENV_API_BASE_URL);
        settings.api.base_url = base_url;
    }
    if let Some(id) = non_empty_env(ENV_MEASUREMENT_ID) {
        debug!("{} overrides analytics.measurement_id", ENV_MEASUREMENT_ID);
        settings.analytics.measurement_id = id;
    }
    if let Some(secret) = non_empty_env(ENV_API_SECRET) {
        settings.analytics.api_secret = secret;
    }
}

/// Apply command line overrides (highest priority)
pub fn apply_overrides(settings: &mut Settings, overrides: &SettingsOverrides) {
    if let Some(ref base_url) = overrides.api_base_url {
        settings.api.base_url = base_url.clone();
    }
    if let Some(ref id) = overrides.measurement_id {
        settings.analytics.measurement_id = id.clone();
    }
    if let Some(dark) = overrides.dark_mode {
        settings.ui.dark_mode = dark;
    }
    if let Some(ref dir) = overrides.download_dir {
        settings.ui.download_dir = dir.clone();
    }
}

/// Resolve settings in priority order: CLI > environment > file > defaults
pub fn resolve_settings(config_path: &Path, overrides: &SettingsOverrides) -> Settings {
    let mut settings = load_settings(config_path);
    apply_env_overrides(&mut settings);
    apply_overrides(&mut settings, overrides);
    settings
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Create the config directory with a commented default config file
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# memegen configuration
#
# Environment variables override these values:
#   NEXT_PUBLIC_API_BASE_URL -> api.base_url
#   GA_MEASUREMENT_ID        -> analytics.measurement_id
#   GA_API_SECRET            -> analytics.api_secret

[api]
base_url = ""           # Required for generation to succeed

[analytics]
measurement_id = ""     # Empty = analytics disabled
api_secret = ""
endpoint = "https://www.google-analytics.com/mp/collect"

[ui]
dark_mode = false
download_dir = ""       # Empty = current directory
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        std::env::remove_var(ENV_API_BASE_URL);
        std::env::remove_var(ENV_MEASUREMENT_ID);
        std::env::remove_var(ENV_API_SECRET);
    }

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join(CONFIG_FILENAME));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);

        let config = r#"
[api]
base_url = "https://memes.example.com"

[ui]
dark_mode = true
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.api.base_url, "https://memes.example.com");
        assert!(settings.ui.dark_mode);
        assert!(!settings.analytics.is_enabled());
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("memegen");

        init_config_dir(&dir).unwrap();

        let content = std::fs::read_to_string(dir.join(CONFIG_FILENAME)).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("memegen");
        init_config_dir(&dir).unwrap();

        std::fs::write(dir.join(CONFIG_FILENAME), "[ui]\ndark_mode = true\n").unwrap();
        init_config_dir(&dir).unwrap();

        // Existing file must not be overwritten
        let settings = load_settings(&dir.join(CONFIG_FILENAME));
        assert!(settings.ui.dark_mode);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_values() {
        clear_env();
        std::env::set_var(ENV_API_BASE_URL, "https://env.example.com");
        std::env::set_var(ENV_MEASUREMENT_ID, "G-ENV123");

        let mut settings = Settings::default();
        settings.api.base_url = "https://file.example.com".to_string();
        apply_env_overrides(&mut settings);

        assert_eq!(settings.api.base_url, "https://env.example.com");
        assert_eq!(settings.analytics.measurement_id, "G-ENV123");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_env_is_ignored() {
        clear_env();
        std::env::set_var(ENV_API_BASE_URL, "   ");

        let mut settings = Settings::default();
        settings.api.base_url = "https://file.example.com".to_string();
        apply_env_overrides(&mut settings);

        assert_eq!(settings.api.base_url, "https://file.example.com");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_resolve_priority_cli_over_env_over_file() {
        clear_env();
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://file.example.com\"\n[analytics]\nmeasurement_id = \"G-FILE\"\n",
        )
        .unwrap();
        std::env::set_var(ENV_API_BASE_URL, "https://env.example.com");
        std::env::set_var(ENV_MEASUREMENT_ID, "G-ENV");

        let overrides = SettingsOverrides {
            api_base_url: Some("https://cli.example.com".to_string()),
            dark_mode: Some(true),
            ..Default::default()
        };
        let settings = resolve_settings(&path, &overrides);

        assert_eq!(settings.api.base_url, "https://cli.example.com");
        assert_eq!(settings.analytics.measurement_id, "G-ENV");
        assert!(settings.ui.dark_mode);
        clear_env();
    }
}
