// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: arguments, configuration and startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use em_adapters::{
    Alert, AlertAdapter, AlertError, ChannelAlertAdapter, DiscordHttpAdapter, NoOpAlertAdapter,
    PlatformAdapter, PlatformError, TracedAlertAdapter, TracedPlatformAdapter,
};
use em_core::{Config, ConfigError, DescriptionCodec, JobMatcher, SpaceId};
use em_engine::{Dispatcher, FailureReporter};
use thiserror::Error;
use tracing::{info, warn};

use crate::watch::EventWatcher;

/// Environment variable holding the bot token
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";

/// Environment variable enabling debug mode
pub const DEBUG_ENV: &str = "EMD_DEBUG";

/// Platform adapter used by the running daemon
pub type DaemonPlatform = TracedPlatformAdapter<DiscordHttpAdapter>;

/// Alert sink of the running daemon
#[derive(Clone)]
pub enum DaemonAlerts<P> {
    /// Posts to the configured log channel
    Channel(TracedAlertAdapter<ChannelAlertAdapter<P>>),
    /// Debug mode: failures are only logged
    Disabled(NoOpAlertAdapter),
}

impl<P> DaemonAlerts<P> {
    pub fn new(platform: P, config: &Config, debug: bool) -> Self {
        if debug {
            DaemonAlerts::Disabled(NoOpAlertAdapter::new())
        } else {
            DaemonAlerts::Channel(TracedAlertAdapter::new(ChannelAlertAdapter::new(
                platform,
                config.log_channel.clone(),
            )))
        }
    }
}

#[async_trait]
impl<P: PlatformAdapter> AlertAdapter for DaemonAlerts<P> {
    async fn alert(&self, alert: &Alert) -> Result<(), AlertError> {
        match self {
            DaemonAlerts::Channel(adapter) => adapter.alert(alert).await,
            DaemonAlerts::Disabled(adapter) => adapter.alert(alert).await,
        }
    }
}

/// Command line settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_path: PathBuf,
    pub debug: bool,
    /// Validate the configuration and exit
    pub check_only: bool,
}

impl Settings {
    /// Parse `[--debug] [--check] [CONFIG]`.
    ///
    /// `env_debug` is the value of the debug environment variable, if set.
    pub fn from_args<I>(args: I, env_debug: Option<&str>) -> Result<Self, LifecycleError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut debug = matches!(env_debug, Some("1") | Some("true"));
        let mut check_only = false;
        let mut config_path = None;

        for arg in args {
            match arg.as_str() {
                "--debug" => debug = true,
                "--check" => check_only = true,
                flag if flag.starts_with("--") => {
                    return Err(LifecycleError::UnknownArgument(flag.to_string()))
                }
                other if config_path.is_some() => {
                    return Err(LifecycleError::UnknownArgument(other.to_string()))
                }
                other => config_path = Some(PathBuf::from(other)),
            }
        }

        let config_path = match config_path {
            Some(path) => path,
            None => default_config_path()?,
        };

        Ok(Self {
            config_path,
            debug,
            check_only,
        })
    }
}

/// `<config dir>/event-mirror/config.toml`
pub fn default_config_path() -> Result<PathBuf, LifecycleError> {
    let dir = dirs::config_dir().ok_or(LifecycleError::NoConfigDir)?;
    Ok(dir.join("event-mirror").join("config.toml"))
}

/// Load and validate the configuration file
pub fn load_config(path: &Path) -> Result<Config, LifecycleError> {
    Ok(Config::load(path)?)
}

/// Read the bot token from its environment value
pub fn token_from(value: Option<String>) -> Result<String, LifecycleError> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(LifecycleError::MissingToken),
    }
}

/// Running daemon state
pub struct Daemon<P, A> {
    pub dispatcher: Dispatcher<P, A, DescriptionCodec>,
    pub watcher: EventWatcher<P>,
    pub poll_interval: Duration,
}

impl<P, A> Daemon<P, A>
where
    P: PlatformAdapter,
    A: AlertAdapter,
{
    /// Poll once and dispatch every resulting notification without waiting
    pub async fn tick(&mut self) -> usize {
        let notifications = self.watcher.poll().await;
        for notification in &notifications {
            // Handles are dropped: the tasks keep running detached
            drop(self.dispatcher.dispatch(notification));
        }
        notifications.len()
    }
}

/// Start the daemon against the Discord API
pub async fn startup(
    config: &Config,
    token: &str,
    debug: bool,
) -> Result<Daemon<DaemonPlatform, DaemonAlerts<DaemonPlatform>>, LifecycleError> {
    let platform = TracedPlatformAdapter::new(DiscordHttpAdapter::new(token));
    let alerts = DaemonAlerts::new(platform.clone(), config, debug);
    build(platform, alerts, config, debug).await
}

/// Wire the daemon from its adapters
pub async fn build<P, A>(
    platform: P,
    alerts: A,
    config: &Config,
    debug: bool,
) -> Result<Daemon<P, A>, LifecycleError>
where
    P: PlatformAdapter,
    A: AlertAdapter,
{
    if debug {
        warn!("debug mode: failures are logged but not alerted");
    }

    let spaces = watched_spaces(&platform, config).await?;
    let watcher = EventWatcher::new(platform.clone(), spaces);
    info!(
        spaces = watcher.spaces().len(),
        mirror_jobs = config.mirror.len(),
        announcement_jobs = config.announce.len(),
        "watching spaces"
    );

    let reporter = FailureReporter::new(alerts, debug);
    Ok(Daemon {
        dispatcher: Dispatcher::new(
            platform,
            JobMatcher::from_config(config),
            DescriptionCodec,
            reporter,
        ),
        watcher,
        poll_interval: config.poll_interval,
    })
}

/// Listened spaces followed by the spaces owning announcement channels
async fn watched_spaces<P: PlatformAdapter>(
    platform: &P,
    config: &Config,
) -> Result<Vec<SpaceId>, LifecycleError> {
    let mut spaces = Vec::new();
    for space in config.listened_spaces() {
        match platform.space(&space).await? {
            Some(found) => info!(space = %found.id, name = %found.name, "listening"),
            None => warn!(%space, "listened space not found or not accessible"),
        }
        spaces.push(space);
    }

    for channel in config.announcement_channels() {
        match platform.channel(&channel).await? {
            Some(found) => {
                if !spaces.contains(&found.space_id) {
                    spaces.push(found.space_id);
                }
            }
            None => warn!(
                "Channel {} doesn't exist. Please check the ID and permissions",
                channel
            ),
        }
    }
    Ok(spaces)
}

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("DISCORD_TOKEN is not set")]
    MissingToken,

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error during startup: {0}")]
    Platform(#[from] PlatformError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
