// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discord REST payloads and their conversion to the event model

use crate::platform::PlatformError;
use chrono::{DateTime, SecondsFormat, Utc};
use em_core::{
    Channel, ChannelId, EventId, EventMedium, EventStatus, MirrorEvent, OutboundMessage,
    ScheduledEvent, Space, SpaceId, Timestamp,
};
use serde::{Deserialize, Serialize};

const ENTITY_STAGE_INSTANCE: u8 = 1;
const ENTITY_VOICE: u8 = 2;
const ENTITY_EXTERNAL: u8 = 3;

/// Only guild-restricted events are supported by the API
const PRIVACY_GUILD_ONLY: u8 = 2;

#[derive(Debug, Deserialize)]
pub(crate) struct WireGuild {
    pub id: String,
    pub name: String,
}

impl From<WireGuild> for Space {
    fn from(guild: WireGuild) -> Self {
        Space {
            id: SpaceId(guild.id),
            name: guild.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireChannel {
    pub id: String,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl WireChannel {
    /// DM channels have no guild and are never valid targets
    pub fn into_channel(self) -> Option<Channel> {
        let guild_id = self.guild_id?;
        Some(Channel {
            id: ChannelId(self.id),
            space_id: SpaceId(guild_id),
            name: self.name.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireEntityMetadata {
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireScheduledEvent {
    pub id: String,
    pub guild_id: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub scheduled_start_time: String,
    #[serde(default)]
    pub scheduled_end_time: Option<String>,
    pub status: u8,
    pub entity_type: u8,
    #[serde(default)]
    pub entity_metadata: Option<WireEntityMetadata>,
}

impl WireScheduledEvent {
    /// Convert using the resolved space name and, for channel events, the channel name
    pub fn into_event(
        self,
        space_name: &str,
        channel_name: Option<String>,
    ) -> Result<ScheduledEvent, PlatformError> {
        let channel = || {
            channel_name
                .clone()
                .or_else(|| self.channel_id.clone())
                .unwrap_or_default()
        };
        let medium = match self.entity_type {
            ENTITY_STAGE_INSTANCE => EventMedium::Stage { channel: channel() },
            ENTITY_VOICE => EventMedium::Voice { channel: channel() },
            ENTITY_EXTERNAL => EventMedium::External {
                location: self
                    .entity_metadata
                    .as_ref()
                    .and_then(|m| m.location.clone())
                    .unwrap_or_default(),
            },
            other => {
                return Err(PlatformError::Payload(format!(
                    "event {} has unknown entity type {}",
                    self.id, other
                )))
            }
        };

        let status = match self.status {
            1 => EventStatus::Scheduled,
            2 => EventStatus::Active,
            3 => EventStatus::Completed,
            4 => EventStatus::Cancelled,
            other => {
                return Err(PlatformError::Payload(format!(
                    "event {} has unknown status {}",
                    self.id, other
                )))
            }
        };

        let start = parse_timestamp(&self.scheduled_start_time)?;
        let end = self
            .scheduled_end_time
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(ScheduledEvent {
            id: EventId(self.id),
            space_id: SpaceId(self.guild_id),
            space_name: space_name.to_string(),
            name: self.name,
            description: self.description.unwrap_or_default(),
            start,
            end,
            medium,
            status,
        })
    }

    /// Channel whose name must be resolved for this event, if any
    pub fn channel_to_resolve(&self) -> Option<ChannelId> {
        match self.entity_type {
            ENTITY_STAGE_INSTANCE | ENTITY_VOICE => self.channel_id.clone().map(ChannelId),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct WireLocation {
    pub location: String,
}

/// Create/edit body for an external event.
///
/// `channel_id` is always sent as null so an edit clears any channel binding.
#[derive(Debug, Serialize)]
pub(crate) struct WireEventBody {
    pub name: String,
    pub description: String,
    pub scheduled_start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<String>,
    pub privacy_level: u8,
    pub entity_type: u8,
    pub entity_metadata: WireLocation,
    pub channel_id: Option<String>,
}

impl WireEventBody {
    pub fn from_mirror(event: &MirrorEvent) -> Result<Self, PlatformError> {
        let location = event.location().ok_or_else(|| {
            PlatformError::Payload("mirror events must use an external location".to_string())
        })?;
        Ok(Self {
            name: event.name.clone(),
            description: event.description.clone(),
            scheduled_start_time: format_timestamp(event.start)?,
            scheduled_end_time: event.end.map(format_timestamp).transpose()?,
            privacy_level: PRIVACY_GUILD_ONLY,
            entity_type: ENTITY_EXTERNAL,
            entity_metadata: WireLocation {
                location: location.to_string(),
            },
            channel_id: None,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct WireStatusBody {
    pub status: u8,
}

impl From<EventStatus> for WireStatusBody {
    fn from(status: EventStatus) -> Self {
        let status = match status {
            EventStatus::Scheduled => 1,
            EventStatus::Active => 2,
            EventStatus::Completed => 3,
            EventStatus::Cancelled => 4,
        };
        Self { status }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct WireEmbedAuthor {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireEmbed {
    pub description: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<WireEmbedAuthor>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub embeds: Vec<WireEmbed>,
}

impl From<&OutboundMessage> for WireMessage {
    fn from(message: &OutboundMessage) -> Self {
        Self {
            content: message.content.clone(),
            embeds: message
                .embeds
                .iter()
                .map(|embed| WireEmbed {
                    description: embed.description.clone(),
                    color: embed.color.rgb(),
                    author: embed
                        .author
                        .clone()
                        .map(|name| WireEmbedAuthor { name }),
                })
                .collect(),
        }
    }
}

/// Event id returned by a create call
#[derive(Debug, Deserialize)]
pub(crate) struct WireCreated {
    pub id: String,
}

/// Classify a non-success HTTP status.
///
/// 403 Missing Access is what the API answers for guilds and channels the bot
/// cannot see, so it is treated like 404.
pub(crate) fn status_error(method: &'static str, path: &str, status: u16) -> PlatformError {
    match status {
        403 | 404 => PlatformError::NotFound(format!("{} {} ({})", method, path, status)),
        status => PlatformError::Status {
            method,
            path: path.to_string(),
            status,
        },
    }
}

fn parse_timestamp(value: &str) -> Result<Timestamp, PlatformError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| PlatformError::Payload(format!("invalid timestamp '{}': {}", value, e)))
}

fn format_timestamp(ms: Timestamp) -> Result<String, PlatformError> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| PlatformError::Payload(format!("timestamp {} out of range", ms)))
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
