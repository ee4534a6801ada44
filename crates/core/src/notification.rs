// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle notifications and the transitions derived from them

use crate::event::{EventStatus, ScheduledEvent};
use std::fmt;

/// A lifecycle notification for a source event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Created(ScheduledEvent),
    Updated {
        old: ScheduledEvent,
        new: ScheduledEvent,
    },
    Deleted(ScheduledEvent),
}

impl Notification {
    /// The event in its latest known state
    pub fn event(&self) -> &ScheduledEvent {
        match self {
            Notification::Created(event) | Notification::Deleted(event) => event,
            Notification::Updated { new, .. } => new,
        }
    }

    /// Notification name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Notification::Created(_) => "event:created",
            Notification::Updated { .. } => "event:updated",
            Notification::Deleted(_) => "event:deleted",
        }
    }

    /// Lifecycle transition this notification represents.
    ///
    /// Updates map by the new status; a cancelled status has no transition.
    pub fn transition(&self) -> Option<Transition> {
        match self {
            Notification::Created(_) => Some(Transition::Created),
            Notification::Deleted(_) => Some(Transition::Deleted),
            Notification::Updated { new, .. } => match new.status {
                EventStatus::Active => Some(Transition::Started),
                EventStatus::Completed => Some(Transition::Ended),
                EventStatus::Scheduled => Some(Transition::GeneralUpdate),
                EventStatus::Cancelled => None,
            },
        }
    }
}

/// Lifecycle transitions that announcement jobs can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Created,
    Started,
    Ended,
    GeneralUpdate,
    Deleted,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Transition::Created => "created",
            Transition::Started => "started",
            Transition::Ended => "ended",
            Transition::GeneralUpdate => "general_update",
            Transition::Deleted => "deleted",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
