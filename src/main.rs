//! # Paneshift demo shell
//!
//! A tiny headless driver for the windowing core: loads a config,
//! opens a handful of windows, and logs the admission decisions and
//! resulting layout. Useful for eyeballing tiling behavior without
//! the full desktop shell.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use paneshift::{PaneshiftConfig, WindowManager, WindowRequest};

#[derive(Parser)]
#[command(name = "paneshift")]
#[command(about = "Window admission and tiling core for a simulated desktop environment")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window class to open
    #[arg(long, default_value = "terminal")]
    class: String,

    /// How many windows to request
    #[arg(short, long, default_value_t = 4)]
    windows: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    info!("Starting Paneshift v{}", paneshift::VERSION);

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            PaneshiftConfig::load(path)?
        }
        None => PaneshiftConfig::default(),
    };

    let mut manager = WindowManager::from_config(&config);
    manager.add_listener(|event| info!("Lifecycle event: {event:?}"));

    info!(
        "Capacity tier: {:?}, free placement: {}",
        manager.oracle().capacity_tier(),
        manager.oracle().free_placement()
    );

    for i in 1..=args.windows {
        let title = format!("{} {i}", args.class);
        let outcome = manager.request_open(WindowRequest::regular(&args.class, title))?;
        info!("Request {i}: {outcome:?}");
    }

    info!("Final desktop state:");
    for window in manager.windows() {
        info!(
            "  {} '{}' [{:?}] at ({}, {}) {}x{}",
            window.id,
            window.title,
            window.kind,
            window.geometry.x,
            window.geometry.y,
            window.geometry.width,
            window.geometry.height
        );
    }

    Ok(())
}
