#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use apod_core::config::{DEFAULT_API_KEY, DEFAULT_BASE_URL};
use apod_core::ApodConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Client configuration, set from command line and environment
static APOD_CONFIG: OnceLock<ApodConfig> = OnceLock::new();

/// Get the client configuration (set at start-up or defaults)
pub fn get_apod_config() -> ApodConfig {
    APOD_CONFIG.get().cloned().unwrap_or_default()
}

/// APOD Gallery - NASA Astronomy Picture of the Day explorer
#[derive(Parser, Debug)]
#[command(name = "apod-gallery")]
#[command(about = "Browse NASA's Astronomy Picture of the Day by date range")]
struct Args {
    /// api.nasa.gov key (falls back to DEMO_KEY)
    #[arg(long, env = "APOD_API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    api_key: String,

    /// APOD endpoint
    #[arg(long, env = "APOD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Give up on a request after this many seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// tracing filter directive, overrides RUST_LOG
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.log_filter.as_deref() {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("apod_gallery=info,apod_core=info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ApodConfig::default()
        .with_api_key(args.api_key)
        .with_base_url(args.base_url)
        .with_timeout(args.timeout_secs.map(Duration::from_secs));
    config.validate()?;

    tracing::info!(?config, "Starting APOD Gallery");
    let _ = APOD_CONFIG.set(config);

    let window_width = 1100.0;
    let window_height = 900.0;

    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("NASA Space Explorer")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(app::App);

    Ok(())
}
