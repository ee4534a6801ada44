// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mirroring and announcement job definitions

use crate::event::{ChannelId, MediumKind, SpaceId};
use crate::notification::Transition;
use serde::Deserialize;

/// Per-medium enable flags of a mirroring job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediumFlags {
    #[serde(default)]
    pub stage_instance: bool,
    #[serde(default)]
    pub voice: bool,
    #[serde(default)]
    pub external: bool,
}

impl MediumFlags {
    /// Only the flag of the given medium is consulted
    pub fn allows(&self, kind: MediumKind) -> bool {
        match kind {
            MediumKind::Stage => self.stage_instance,
            MediumKind::Voice => self.voice,
            MediumKind::External => self.external,
        }
    }
}

/// Copies events from the listened spaces into the distribution spaces
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MirrorJob {
    pub listen: Vec<SpaceId>,
    #[serde(default)]
    pub types: MediumFlags,
    pub distribute: Vec<SpaceId>,
    /// Appended to every mirror description, on creation and on each edit
    #[serde(default)]
    pub description_suffix: String,
}

/// Per-transition enable flags of an announcement job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionFlags {
    #[serde(default)]
    pub created: bool,
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub ended: bool,
    #[serde(default)]
    pub general_update: bool,
    #[serde(default)]
    pub deleted: bool,
}

impl TransitionFlags {
    pub fn allows(&self, transition: Transition) -> bool {
        match transition {
            Transition::Created => self.created,
            Transition::Started => self.started,
            Transition::Ended => self.ended,
            Transition::GeneralUpdate => self.general_update,
            Transition::Deleted => self.deleted,
        }
    }
}

/// Posts lifecycle messages to channels of the event's own space
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnouncementJob {
    pub channels: Vec<ChannelId>,
    #[serde(default)]
    pub types: TransitionFlags,
    /// Plain-text line posted above the summary embed
    #[serde(default)]
    pub message: Option<String>,
}
