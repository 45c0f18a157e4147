//! memegen - Generate memes from any webpage, in your terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use memegen_app::config::{
    default_config_dir, default_config_path, init_config_dir, resolve_settings, SettingsOverrides,
};
use memegen_core::prelude::*;

/// memegen - Generate memes from any webpage
#[derive(Parser, Debug)]
#[command(name = "memegen")]
#[command(about = "Generate memes from any webpage, in your terminal", long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the meme campaign API
    #[arg(long, value_name = "URL")]
    api_base_url: Option<String>,

    /// Analytics measurement ID (empty disables analytics)
    #[arg(long, value_name = "ID")]
    measurement_id: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Directory downloaded memes are saved to
    #[arg(long, value_name = "DIR")]
    download_dir: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Run one generation without the TUI (JSON output)
    #[arg(long, requires = "url")]
    headless: bool,

    /// Webpage to generate memes from (headless mode)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Number of memes to generate (headless mode, clamped to 1-5)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    count: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file since the TUI owns stdout
    memegen_core::logging::init()?;

    if args.init_config {
        let dir = default_config_dir();
        init_config_dir(&dir).context("Writing default config")?;
        eprintln!("Config written to {}", default_config_path().display());
        return Ok(());
    }

    // An explicit --config must exist; the default location is optional
    let config_path = match args.config {
        Some(path) if !path.exists() => return Err(Error::config_not_found(path)),
        Some(path) => path,
        None => default_config_path(),
    };
    let overrides = SettingsOverrides {
        api_base_url: args.api_base_url,
        measurement_id: args.measurement_id,
        dark_mode: args.dark.then_some(true),
        download_dir: args.download_dir,
    };
    let settings = resolve_settings(&config_path, &overrides);

    if settings.api.base_url.is_empty() {
        warn!("No API base URL configured, requests will fail");
    }

    if args.headless {
        let url = args.url.unwrap_or_default();
        let succeeded = memegen::run_headless(settings, url, args.count).await?;
        if !succeeded {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = memegen::run(settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!(
            "memegen failed: {}\nLogs: {}",
            e,
            memegen_core::logging::log_directory().display()
        );
    }

    info!("memegen exiting");
    result
}
