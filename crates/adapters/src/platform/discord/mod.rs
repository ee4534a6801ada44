// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discord REST adapter
//!
//! Requests are blocking `ureq` calls moved onto tokio's blocking pool.

mod names;
mod wire;

use super::{PlatformAdapter, PlatformError};
use async_trait::async_trait;
use em_core::{
    Channel, ChannelId, EventHandle, EventId, EventStatus, MirrorEvent, OutboundMessage,
    ScheduledEvent, Space, SpaceId,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use names::SpaceNames;
use wire::{
    WireChannel, WireCreated, WireEventBody, WireGuild, WireMessage, WireScheduledEvent,
    WireStatusBody,
};

/// Default REST endpoint
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

enum Request {
    Get,
    Post(Value),
    Patch(Value),
    Delete,
}

impl Request {
    fn method(&self) -> &'static str {
        match self {
            Request::Get => "GET",
            Request::Post(_) => "POST",
            Request::Patch(_) => "PATCH",
            Request::Delete => "DELETE",
        }
    }
}

struct Client {
    agent: ureq::Agent,
    base_url: String,
    authorization: String,
}

impl Client {
    /// Perform a request, returning the JSON body if there is one
    fn call(&self, path: &str, request: Request) -> Result<Option<Value>, PlatformError> {
        let url = format!("{}{}", self.base_url, path);
        let auth = self.authorization.as_str();
        let method = request.method();

        let result = match request {
            Request::Get => self.agent.get(&url).header("Authorization", auth).call(),
            Request::Delete => self.agent.delete(&url).header("Authorization", auth).call(),
            Request::Post(body) => self
                .agent
                .post(&url)
                .header("Authorization", auth)
                .send_json(&body),
            Request::Patch(body) => self
                .agent
                .patch(&url)
                .header("Authorization", auth)
                .send_json(&body),
        };

        match result {
            Ok(mut response) => {
                if response.status() == 204 {
                    return Ok(None);
                }
                let value: Value = response
                    .body_mut()
                    .read_json()
                    .map_err(|e| PlatformError::Payload(format!("{} {}: {}", method, path, e)))?;
                Ok(Some(value))
            }
            Err(ureq::Error::StatusCode(status)) => Err(wire::status_error(method, path, status)),
            Err(e) => Err(PlatformError::Transport(format!("{} {}: {}", method, path, e))),
        }
    }
}

/// Platform adapter speaking the Discord REST API with a bot token
#[derive(Clone)]
pub struct DiscordHttpAdapter {
    client: Arc<Client>,
    space_names: SpaceNames,
}

impl DiscordHttpAdapter {
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, DEFAULT_API_BASE)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            client: Arc::new(Client {
                agent: ureq::Agent::new_with_defaults(),
                base_url: base_url.trim_end_matches('/').to_string(),
                authorization: format!("Bot {}", token),
            }),
            space_names: SpaceNames::default(),
        }
    }

    async fn send(&self, path: String, request: Request) -> Result<Option<Value>, PlatformError> {
        let client = Arc::clone(&self.client);
        tokio::task::spawn_blocking(move || client.call(&path, request))
            .await
            .map_err(|e| PlatformError::Transport(format!("request task failed: {}", e)))?
    }

    async fn fetch<T: DeserializeOwned>(&self, path: String) -> Result<T, PlatformError> {
        let value = self
            .send(path.clone(), Request::Get)
            .await?
            .ok_or_else(|| PlatformError::Payload(format!("GET {}: empty response", path)))?;
        serde_json::from_value(value)
            .map_err(|e| PlatformError::Payload(format!("GET {}: {}", path, e)))
    }

    /// Treat an absent or inaccessible resource as `None`
    async fn lookup<T: DeserializeOwned>(&self, path: String) -> Result<Option<T>, PlatformError> {
        match self.fetch(path).await {
            Ok(value) => Ok(Some(value)),
            Err(PlatformError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn event_path(handle: &EventHandle) -> String {
        format!(
            "/guilds/{}/scheduled-events/{}",
            handle.space_id, handle.event_id
        )
    }

    fn to_json<T: serde::Serialize>(body: &T) -> Result<Value, PlatformError> {
        serde_json::to_value(body).map_err(|e| PlatformError::Payload(e.to_string()))
    }
}

#[async_trait]
impl PlatformAdapter for DiscordHttpAdapter {
    async fn space(&self, id: &SpaceId) -> Result<Option<Space>, PlatformError> {
        let guild: Option<WireGuild> = self.lookup(format!("/guilds/{}", id)).await?;
        let space = guild.map(Space::from);
        if let Some(space) = &space {
            self.space_names.insert(&space.id, &space.name);
        }
        Ok(space)
    }

    async fn channel(&self, id: &ChannelId) -> Result<Option<Channel>, PlatformError> {
        let channel: Option<WireChannel> = self.lookup(format!("/channels/{}", id)).await?;
        Ok(channel.and_then(WireChannel::into_channel))
    }

    async fn list_events(&self, space: &SpaceId) -> Result<Vec<ScheduledEvent>, PlatformError> {
        let wire_events: Vec<WireScheduledEvent> = self
            .fetch(format!("/guilds/{}/scheduled-events", space))
            .await?;
        if wire_events.is_empty() {
            return Ok(Vec::new());
        }

        let space_name = self
            .space_names
            .get_or_fetch(space, || async {
                self.space(space)
                    .await?
                    .map(|guild| guild.name)
                    .ok_or_else(|| PlatformError::NotFound(format!("space {}", space)))
            })
            .await?;
        let mut channel_names: HashMap<ChannelId, Option<String>> = HashMap::new();
        let mut events = Vec::with_capacity(wire_events.len());
        for wire_event in wire_events {
            let channel_name = match wire_event.channel_to_resolve() {
                Some(channel_id) => {
                    if !channel_names.contains_key(&channel_id) {
                        let name = self.channel(&channel_id).await?.map(|c| c.name);
                        channel_names.insert(channel_id.clone(), name);
                    }
                    channel_names.get(&channel_id).cloned().flatten()
                }
                None => None,
            };
            events.push(wire_event.into_event(&space_name, channel_name)?);
        }
        Ok(events)
    }

    async fn create_event(
        &self,
        space: &SpaceId,
        event: &MirrorEvent,
    ) -> Result<EventHandle, PlatformError> {
        let body = Self::to_json(&WireEventBody::from_mirror(event)?)?;
        let path = format!("/guilds/{}/scheduled-events", space);
        let value = self
            .send(path.clone(), Request::Post(body))
            .await?
            .ok_or_else(|| PlatformError::Payload(format!("POST {}: empty response", path)))?;
        let created: WireCreated = serde_json::from_value(value)
            .map_err(|e| PlatformError::Payload(format!("POST {}: {}", path, e)))?;
        Ok(EventHandle {
            space_id: space.clone(),
            event_id: EventId(created.id),
        })
    }

    async fn edit_event(
        &self,
        handle: &EventHandle,
        event: &MirrorEvent,
    ) -> Result<(), PlatformError> {
        let body = Self::to_json(&WireEventBody::from_mirror(event)?)?;
        self.send(Self::event_path(handle), Request::Patch(body))
            .await?;
        Ok(())
    }

    async fn set_status(
        &self,
        handle: &EventHandle,
        status: EventStatus,
    ) -> Result<(), PlatformError> {
        let body = Self::to_json(&WireStatusBody::from(status))?;
        self.send(Self::event_path(handle), Request::Patch(body))
            .await?;
        Ok(())
    }

    async fn delete_event(&self, handle: &EventHandle) -> Result<(), PlatformError> {
        self.send(Self::event_path(handle), Request::Delete).await?;
        Ok(())
    }

    async fn send_message(
        &self,
        channel: &ChannelId,
        message: &OutboundMessage,
    ) -> Result<(), PlatformError> {
        let body = Self::to_json(&WireMessage::from(message))?;
        self.send(format!("/channels/{}/messages", channel), Request::Post(body))
            .await?;
        Ok(())
    }
}
