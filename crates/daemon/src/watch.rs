// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Poll-based notification source
//!
//! The platform is polled per watched space and each listing is diffed
//! against the previous one to synthesize lifecycle notifications.

use em_adapters::{PlatformAdapter, PlatformError};
use em_core::{EventId, EventStatus, Notification, ScheduledEvent, SpaceId};
use std::collections::BTreeMap;

type Snapshot = BTreeMap<EventId, ScheduledEvent>;

/// Watches spaces for scheduled event changes
pub struct EventWatcher<P> {
    platform: P,
    spaces: Vec<SpaceId>,
    snapshots: BTreeMap<SpaceId, Snapshot>,
}

impl<P: PlatformAdapter> EventWatcher<P> {
    pub fn new(platform: P, spaces: Vec<SpaceId>) -> Self {
        Self {
            platform,
            spaces,
            snapshots: BTreeMap::new(),
        }
    }

    pub fn spaces(&self) -> &[SpaceId] {
        &self.spaces
    }

    /// Poll every watched space.
    ///
    /// A space whose listing fails keeps its previous snapshot.
    pub async fn poll(&mut self) -> Vec<Notification> {
        let mut notifications = Vec::new();
        for space in self.spaces.clone() {
            match self.poll_space(&space).await {
                Ok(found) => notifications.extend(found),
                Err(e) => tracing::warn!(%space, error = %e, "could not poll space"),
            }
        }
        notifications
    }

    /// Poll one space and diff against its snapshot
    pub async fn poll_space(
        &mut self,
        space: &SpaceId,
    ) -> Result<Vec<Notification>, PlatformError> {
        let events = self.platform.list_events(space).await?;
        let current: Snapshot = events
            .iter()
            .map(|event| (event.id.clone(), event.clone()))
            .collect();

        let Some(previous) = self.snapshots.insert(space.clone(), current) else {
            tracing::warn!(
                %space,
                count = events.len(),
                "seeded event snapshot; changes made while offline are not replayed"
            );
            return Ok(Vec::new());
        };

        Ok(diff(&previous, &events))
    }
}

/// Notifications turning `previous` into `current`.
///
/// Creations and updates come first in listing order, then deletions.
/// The platform drops finished events from its listing, so an active event
/// that disappears is reported as completed rather than deleted.
pub(crate) fn diff(previous: &Snapshot, current: &[ScheduledEvent]) -> Vec<Notification> {
    let mut notifications = Vec::new();
    for event in current {
        match previous.get(&event.id) {
            None => notifications.push(Notification::Created(event.clone())),
            Some(old) if old != event => notifications.push(Notification::Updated {
                old: old.clone(),
                new: event.clone(),
            }),
            Some(_) => {}
        }
    }

    for (id, old) in previous {
        if !current.iter().any(|event| &event.id == id) {
            notifications.push(vanished(old));
        }
    }
    notifications
}

fn vanished(old: &ScheduledEvent) -> Notification {
    if old.status == EventStatus::Active {
        return Notification::Updated {
            old: old.clone(),
            new: ScheduledEvent {
                status: EventStatus::Completed,
                ..old.clone()
            },
        };
    }
    Notification::Deleted(old.clone())
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
