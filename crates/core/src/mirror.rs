// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound mirror representation

use crate::event::{EventMedium, MediumKind, Timestamp};
use serde::{Deserialize, Serialize};

/// The event payload sent to a target space when creating or editing a mirror.
///
/// Built by [`crate::projector::project`]. The medium is always
/// [`EventMedium::External`] since channels of the origin space cannot be
/// referenced from another space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorEvent {
    pub name: String,
    pub description: String,
    pub start: Timestamp,
    pub end: Option<Timestamp>,
    pub medium: EventMedium,
}

impl MirrorEvent {
    pub fn kind(&self) -> MediumKind {
        self.medium.kind()
    }

    /// Synthesized location string of the mirror
    pub fn location(&self) -> Option<&str> {
        match &self.medium {
            EventMedium::External { location } => Some(location),
            _ => None,
        }
    }
}
