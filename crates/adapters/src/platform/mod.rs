// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hosting platform adapters

mod discord;

pub use discord::DiscordHttpAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePlatformAdapter, PlatformCall};

use async_trait::async_trait;
use em_core::{
    Channel, ChannelId, EventHandle, EventStatus, MirrorEvent, OutboundMessage, ScheduledEvent,
    Space, SpaceId,
};
use thiserror::Error;

/// Errors from platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{method} {path} returned status {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
    #[error("malformed payload: {0}")]
    Payload(String),
    #[error("request failed: {0}")]
    Transport(String),
}

impl PlatformError {
    /// Whether the error only means the addressed resource is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, PlatformError::NotFound(_))
    }
}

/// Client capability for the hosting platform.
///
/// Lookups return `Ok(None)` for absent resources; commands on absent
/// resources fail with [`PlatformError::NotFound`].
#[async_trait]
pub trait PlatformAdapter: Clone + Send + Sync + 'static {
    /// Resolve a space by id
    async fn space(&self, id: &SpaceId) -> Result<Option<Space>, PlatformError>;

    /// Resolve a channel by id
    async fn channel(&self, id: &ChannelId) -> Result<Option<Channel>, PlatformError>;

    /// Events currently known in a space
    async fn list_events(&self, space: &SpaceId) -> Result<Vec<ScheduledEvent>, PlatformError>;

    /// Create an event in a space
    async fn create_event(
        &self,
        space: &SpaceId,
        event: &MirrorEvent,
    ) -> Result<EventHandle, PlatformError>;

    /// Replace timing, description and location of an event
    async fn edit_event(&self, handle: &EventHandle, event: &MirrorEvent)
        -> Result<(), PlatformError>;

    /// Move an event to a new lifecycle status
    async fn set_status(&self, handle: &EventHandle, status: EventStatus)
        -> Result<(), PlatformError>;

    /// Delete an event
    async fn delete_event(&self, handle: &EventHandle) -> Result<(), PlatformError>;

    /// Post a message to a channel
    async fn send_message(
        &self,
        channel: &ChannelId,
        message: &OutboundMessage,
    ) -> Result<(), PlatformError>;
}
