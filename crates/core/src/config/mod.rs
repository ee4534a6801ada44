// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Static configuration
//!
//! Loaded once at startup from TOML and immutable afterwards:
//!
//! ```toml
//! log_channel = "900000000000000001"
//! poll_interval = "30s"
//!
//! [[mirror]]
//! listen = ["100"]
//! distribute = ["200", "300"]
//! description_suffix = "Mirrored from the Main server"
//! types = { stage_instance = true, voice = true, external = true }
//!
//! [[announce]]
//! channels = ["110"]
//! message = "Heads up!"
//! types = { created = true, deleted = true }
//! ```

mod jobs;

pub use jobs::{AnnouncementJob, MediumFlags, MirrorJob, TransitionFlags};

use crate::event::{ChannelId, SpaceId};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(30)
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Operations channel receiving failure alerts
    pub log_channel: ChannelId,
    /// Log file; stderr when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// How often watched spaces are polled for changes
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,
    /// Mirroring jobs, in evaluation order
    #[serde(default)]
    pub mirror: Vec<MirrorJob>,
    /// Announcement jobs, in evaluation order
    #[serde(default)]
    pub announce: Vec<AnnouncementJob>,
}

impl Config {
    /// Read, parse and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the TOML schema cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.log_channel.as_str().trim().is_empty() {
            problems.push("log_channel must not be empty".to_string());
        }
        if self.poll_interval.is_zero() {
            problems.push("poll_interval must be greater than zero".to_string());
        }

        let listened = self.listened_spaces();
        for (i, job) in self.mirror.iter().enumerate() {
            if job.listen.is_empty() {
                problems.push(format!("mirror[{}].listen must not be empty", i));
            }
            if job.distribute.is_empty() {
                problems.push(format!("mirror[{}].distribute must not be empty", i));
            }
            if job.listen.iter().any(|s| s.as_str().trim().is_empty())
                || job.distribute.iter().any(|s| s.as_str().trim().is_empty())
            {
                problems.push(format!("mirror[{}] contains an empty space id", i));
            }
            if let Some(space) = job.distribute.iter().find(|s| listened.contains(s)) {
                problems.push(format!(
                    "mirror[{}] distributes to listened space {}",
                    i, space
                ));
            }
        }

        for (i, job) in self.announce.iter().enumerate() {
            if job.channels.is_empty() {
                problems.push(format!("announce[{}].channels must not be empty", i));
            }
            if job.channels.iter().any(|c| c.as_str().trim().is_empty()) {
                problems.push(format!("announce[{}] contains an empty channel id", i));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }

    /// Spaces listened to by any mirroring job, deduplicated in configuration order
    pub fn listened_spaces(&self) -> Vec<SpaceId> {
        let mut spaces: Vec<SpaceId> = Vec::new();
        for space in self.mirror.iter().flat_map(|job| job.listen.iter()) {
            if !spaces.contains(space) {
                spaces.push(space.clone());
            }
        }
        spaces
    }

    /// Every channel referenced by an announcement job, deduplicated
    pub fn announcement_channels(&self) -> Vec<ChannelId> {
        let mut channels: Vec<ChannelId> = Vec::new();
        for channel in self.announce.iter().flat_map(|job| job.channels.iter()) {
            if !channels.contains(channel) {
                channels.push(channel.clone());
            }
        }
        channels
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
