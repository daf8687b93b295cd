//! Entry point for the Quran reader.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments (an optional juz to open on launch).
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI application.

mod api;
mod app;
mod audio;
mod config;
mod pagination;

use crate::app::run_app;
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let initial_juz = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        api = %config.api_base_url,
        "Starting Quran reader"
    );
    if let Some(juz) = initial_juz {
        info!(juz, "Opening juz from command line");
    }
    run_app(config, initial_juz).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<u32>> {
    let mut args = env::args().skip(1);
    let Some(arg) = args.next() else {
        return Ok(None);
    };
    let juz: u32 = arg
        .parse()
        .map_err(|_| anyhow!("Usage: mushaf [juz-number]"))?;
    if !(1..=30).contains(&juz) {
        return Err(anyhow!("Juz number must be between 1 and 30, got {juz}"));
    }
    Ok(Some(juz))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
