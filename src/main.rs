//! Entry point for the swipe gallery.
//!
//! - Parse command-line arguments into media entries.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI with the media list and config.

mod app;
mod carousel;
mod config;
mod media;
mod theme;

use crate::app::run_app;
use crate::config::{load_config, serialize_config};
use crate::media::{MediaList, collect_entries, parse_entries};
use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args();
    let config = load_config(Path::new(CONFIG_PATH));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    if args.print_config {
        print!("{}", serialize_config(&config)?);
        return Ok(());
    }

    let entries = collect_entries(&args.entries)?;
    let sources = parse_entries(&entries);
    if sources.is_empty() {
        warn!("Usage: swipe-gallery <image-url-or-path|manifest.json>...");
    }
    info!(
        slides = sources.len(),
        level = %config.log_level,
        settle_ms = config.settle_ms,
        "Starting swipe gallery"
    );

    run_app(MediaList::new(sources), config).context("Failed to start the GUI")?;
    Ok(())
}

struct CliArgs {
    entries: Vec<String>,
    print_config: bool,
}

fn parse_args() -> CliArgs {
    let mut print_config = false;
    let entries = env::args()
        .skip(1)
        .filter(|arg| {
            if arg == "--print-config" {
                print_config = true;
                false
            } else {
                true
            }
        })
        .collect();
    CliArgs {
        entries,
        print_config,
    }
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
    if env::var_os("RUST_LOG").is_some() {
        info!("RUST_LOG is set; ignoring log_level from config");
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
