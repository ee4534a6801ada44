// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake platform adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PlatformAdapter, PlatformError};
use async_trait::async_trait;
use em_core::{
    Channel, ChannelId, EventHandle, EventId, EventStatus, MirrorEvent, OutboundMessage,
    ScheduledEvent, Space, SpaceId,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Recorded platform call
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Space {
        id: SpaceId,
    },
    Channel {
        id: ChannelId,
    },
    ListEvents {
        space: SpaceId,
    },
    CreateEvent {
        space: SpaceId,
        event: MirrorEvent,
    },
    EditEvent {
        handle: EventHandle,
        event: MirrorEvent,
    },
    SetStatus {
        handle: EventHandle,
        status: EventStatus,
    },
    DeleteEvent {
        handle: EventHandle,
    },
    SendMessage {
        channel: ChannelId,
        message: OutboundMessage,
    },
}

impl PlatformCall {
    /// Whether the call changes remote state
    pub fn is_command(&self) -> bool {
        !matches!(
            self,
            PlatformCall::Space { .. }
                | PlatformCall::Channel { .. }
                | PlatformCall::ListEvents { .. }
        )
    }
}

#[derive(Default)]
struct FakeState {
    spaces: HashMap<SpaceId, Space>,
    channels: HashMap<ChannelId, Channel>,
    events: HashMap<SpaceId, Vec<ScheduledEvent>>,
    unreachable: HashSet<SpaceId>,
    next_id: u64,
}

/// In-memory platform for testing
#[derive(Clone, Default)]
pub struct FakePlatformAdapter {
    state: Arc<Mutex<FakeState>>,
    calls: Arc<Mutex<Vec<PlatformCall>>>,
}

impl FakePlatformAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a space
    pub fn add_space(&self, id: &str, name: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.spaces.insert(
            SpaceId::new(id),
            Space {
                id: SpaceId::new(id),
                name: name.to_string(),
            },
        );
        state.events.entry(SpaceId::new(id)).or_default();
    }

    /// Register a channel owned by `space`
    pub fn add_channel(&self, id: &str, space: &str, name: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.channels.insert(
            ChannelId::new(id),
            Channel {
                id: ChannelId::new(id),
                space_id: SpaceId::new(space),
                name: name.to_string(),
            },
        );
    }

    /// Place an event directly into its space's listing
    pub fn insert_event(&self, event: ScheduledEvent) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let events = state.events.entry(event.space_id.clone()).or_default();
        events.retain(|e| e.id != event.id);
        events.push(event);
    }

    /// Remove an event without recording a call, as if deleted out-of-band
    pub fn remove_event(&self, space: &str, id: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(events) = state.events.get_mut(&SpaceId::new(space)) {
            events.retain(|e| e.id.as_str() != id);
        }
    }

    /// Make every call addressing `space` fail with a transport error
    pub fn make_unreachable(&self, space: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.unreachable.insert(SpaceId::new(space));
    }

    /// Events currently in a space
    pub fn events(&self, space: &str) -> Vec<ScheduledEvent> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state
            .events
            .get(&SpaceId::new(space))
            .cloned()
            .unwrap_or_default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Recorded calls that change remote state
    pub fn commands(&self) -> Vec<PlatformCall> {
        self.calls().into_iter().filter(|c| c.is_command()).collect()
    }

    fn record(&self, call: PlatformCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    fn check_reachable(state: &FakeState, space: &SpaceId) -> Result<(), PlatformError> {
        if state.unreachable.contains(space) {
            return Err(PlatformError::Transport(format!(
                "connection reset talking to space {}",
                space
            )));
        }
        Ok(())
    }

    fn with_event<T>(
        &self,
        handle: &EventHandle,
        f: impl FnOnce(&mut Vec<ScheduledEvent>, usize) -> T,
    ) -> Result<T, PlatformError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Self::check_reachable(&state, &handle.space_id)?;
        let events = state
            .events
            .get_mut(&handle.space_id)
            .ok_or_else(|| PlatformError::NotFound(format!("space {}", handle.space_id)))?;
        let index = events
            .iter()
            .position(|e| e.id == handle.event_id)
            .ok_or_else(|| PlatformError::NotFound(format!("event {}", handle)))?;
        Ok(f(events, index))
    }
}

#[async_trait]
impl PlatformAdapter for FakePlatformAdapter {
    async fn space(&self, id: &SpaceId) -> Result<Option<Space>, PlatformError> {
        self.record(PlatformCall::Space { id: id.clone() });
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Self::check_reachable(&state, id)?;
        Ok(state.spaces.get(id).cloned())
    }

    async fn channel(&self, id: &ChannelId) -> Result<Option<Channel>, PlatformError> {
        self.record(PlatformCall::Channel { id: id.clone() });
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state.channels.get(id).cloned())
    }

    async fn list_events(&self, space: &SpaceId) -> Result<Vec<ScheduledEvent>, PlatformError> {
        self.record(PlatformCall::ListEvents {
            space: space.clone(),
        });
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Self::check_reachable(&state, space)?;
        state
            .events
            .get(space)
            .cloned()
            .ok_or_else(|| PlatformError::NotFound(format!("space {}", space)))
    }

    async fn create_event(
        &self,
        space: &SpaceId,
        event: &MirrorEvent,
    ) -> Result<EventHandle, PlatformError> {
        self.record(PlatformCall::CreateEvent {
            space: space.clone(),
            event: event.clone(),
        });

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Self::check_reachable(&state, space)?;
        let space_name = state
            .spaces
            .get(space)
            .map(|s| s.name.clone())
            .ok_or_else(|| PlatformError::NotFound(format!("space {}", space)))?;

        state.next_id += 1;
        let id = EventId::new(format!("mirror-{}", state.next_id));
        let created = ScheduledEvent {
            id: id.clone(),
            space_id: space.clone(),
            space_name,
            name: event.name.clone(),
            description: event.description.clone(),
            start: event.start,
            end: event.end,
            medium: event.medium.clone(),
            status: EventStatus::Scheduled,
        };
        state.events.entry(space.clone()).or_default().push(created);

        Ok(EventHandle {
            space_id: space.clone(),
            event_id: id,
        })
    }

    async fn edit_event(
        &self,
        handle: &EventHandle,
        event: &MirrorEvent,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::EditEvent {
            handle: handle.clone(),
            event: event.clone(),
        });
        self.with_event(handle, |events, index| {
            let existing = &mut events[index];
            existing.name = event.name.clone();
            existing.description = event.description.clone();
            existing.start = event.start;
            existing.end = event.end;
            existing.medium = event.medium.clone();
        })
    }

    async fn set_status(
        &self,
        handle: &EventHandle,
        status: EventStatus,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::SetStatus {
            handle: handle.clone(),
            status,
        });
        self.with_event(handle, |events, index| events[index].status = status)
    }

    async fn delete_event(&self, handle: &EventHandle) -> Result<(), PlatformError> {
        self.record(PlatformCall::DeleteEvent {
            handle: handle.clone(),
        });
        self.with_event(handle, |events, index| {
            events.remove(index);
        })
    }

    async fn send_message(
        &self,
        channel: &ChannelId,
        message: &OutboundMessage,
    ) -> Result<(), PlatformError> {
        self.record(PlatformCall::SendMessage {
            channel: channel.clone(),
            message: message.clone(),
        });
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if !state.channels.contains_key(channel) {
            return Err(PlatformError::NotFound(format!("channel {}", channel)));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
