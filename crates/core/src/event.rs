// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduled event model
//!
//! A [`ScheduledEvent`] is the platform's record of a scheduled occurrence in
//! a space. Source events and the mirrors created from them share this shape;
//! mirrors are always [`EventMedium::External`].

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

define_id!(
    /// Identifier of a community space (guild)
    SpaceId
);
define_id!(
    /// Identifier of a channel inside a space
    ChannelId
);
define_id!(
    /// Identifier of a scheduled event
    EventId
);

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// Lifecycle status of a scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Active => "active",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Medium type of an event, without its location payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediumKind {
    Stage,
    Voice,
    External,
}

impl fmt::Display for MediumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediumKind::Stage => "stage",
            MediumKind::Voice => "voice",
            MediumKind::External => "external",
        };
        f.write_str(s)
    }
}

/// Where an event takes place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventMedium {
    /// Stage channel in the owning space
    Stage { channel: String },
    /// Voice channel in the owning space
    Voice { channel: String },
    /// Free-text location outside the platform
    External { location: String },
}

impl EventMedium {
    pub fn kind(&self) -> MediumKind {
        match self {
            EventMedium::Stage { .. } => MediumKind::Stage,
            EventMedium::Voice { .. } => MediumKind::Voice,
            EventMedium::External { .. } => MediumKind::External,
        }
    }
}

/// A scheduled event as known by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: EventId,
    pub space_id: SpaceId,
    /// Display name of the owning space, used in mirror locations
    pub space_name: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start: Timestamp,
    #[serde(default)]
    pub end: Option<Timestamp>,
    pub medium: EventMedium,
    pub status: EventStatus,
}

impl ScheduledEvent {
    /// Public link to the event, used as the textual event reference in announcements
    pub fn url(&self) -> String {
        format!("https://discord.com/events/{}/{}", self.space_id, self.id)
    }

    /// Handle addressing this event for edit/status/delete commands
    pub fn handle(&self) -> EventHandle {
        EventHandle {
            space_id: self.space_id.clone(),
            event_id: self.id.clone(),
        }
    }
}

/// Addresses a platform-side event
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventHandle {
    pub space_id: SpaceId,
    pub event_id: EventId,
}

impl fmt::Display for EventHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.space_id, self.event_id)
    }
}

/// A community space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    pub id: SpaceId,
    pub name: String,
}

/// A channel, with the space that owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    pub space_id: SpaceId,
    pub name: String,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
