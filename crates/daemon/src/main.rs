// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event Mirror Daemon (emd)
//!
//! Polls the watched spaces for scheduled event changes and dispatches them
//! to the mirroring engine.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod lifecycle;
mod watch;

use std::process::ExitCode;

use tokio::signal::unix::{signal, SignalKind};
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use crate::lifecycle::{LifecycleError, Settings, DEBUG_ENV, TOKEN_ENV};
use em_core::Config;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("emd: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), LifecycleError> {
    // Parse arguments
    let env_debug = std::env::var(DEBUG_ENV).ok();
    let settings = Settings::from_args(std::env::args().skip(1), env_debug.as_deref())?;

    // Load configuration
    let config = lifecycle::load_config(&settings.config_path)?;

    if settings.check_only {
        println!("{}: ok", settings.config_path.display());
        return Ok(());
    }

    // Set up logging
    let _log_guard = setup_logging(&config)?;
    install_panic_hook();

    info!("Starting emd with config {}", settings.config_path.display());

    let token = match lifecycle::token_from(std::env::var(TOKEN_ENV).ok()) {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to start daemon: {}", e);
            return Err(e);
        }
    };

    let mut daemon = match lifecycle::startup(&config, &token, settings.debug).await {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to start daemon: {}", e);
            return Err(e);
        }
    };

    // Set up signal handlers
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let mut poll = tokio::time::interval(daemon.poll_interval);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        "Daemon ready, polling every {}s",
        daemon.poll_interval.as_secs_f64()
    );

    // Main event loop
    loop {
        tokio::select! {
            _ = poll.tick() => {
                let dispatched = daemon.tick().await;
                if dispatched > 0 {
                    info!(notifications = dispatched, "dispatched changes");
                }
            }

            // Graceful shutdown on SIGTERM
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down...");
                break;
            }

            // Graceful shutdown on SIGINT
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down...");
                break;
            }
        }
    }

    info!("Daemon stopped");
    Ok(())
}

/// Log panics that escape every other layer
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        error!("panic: {}", panic);
        default_hook(panic);
    }));
}

fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, LifecycleError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let (writer, guard) = match &config.log_file {
        Some(path) => {
            // Create log directory if needed
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => std::path::PathBuf::from("."),
            };
            std::fs::create_dir_all(&dir)?;
            let file_name = path.file_name().ok_or_else(|| {
                LifecycleError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("log_file {} has no file name", path.display()),
                ))
            })?;
            let file_appender = tracing_appender::rolling::never(dir, file_name);
            tracing_appender::non_blocking(file_appender)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    // Set up subscriber with env filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(guard)
}
