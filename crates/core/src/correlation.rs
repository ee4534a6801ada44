// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Correlation between source events and their mirrors
//!
//! The platform offers no link between an event and its copies in other
//! spaces. The source identifier is carried in the mirror itself and a mirror
//! is found again by scanning a target space's listing for it.

use crate::event::{EventId, ScheduledEvent};

/// Embeds and recovers the source identifier of a mirror
pub trait CorrelationCodec: Clone + Send + Sync + 'static {
    /// Build a mirror description carrying the source identifier
    fn embed(&self, source_id: &EventId, base_description: &str, suffix: &str) -> String;

    /// Locate the mirror of `source_id` among a space's events
    fn find_mirror<'a>(
        &self,
        events: &'a [ScheduledEvent],
        source_id: &EventId,
    ) -> Option<&'a ScheduledEvent>;
}

/// Stores the source identifier as the trailing line of the description
#[derive(Clone, Copy, Debug, Default)]
pub struct DescriptionCodec;

impl CorrelationCodec for DescriptionCodec {
    fn embed(&self, source_id: &EventId, base_description: &str, suffix: &str) -> String {
        format!("{}\n{}\n\n{}", base_description, suffix, source_id)
    }

    fn find_mirror<'a>(
        &self,
        events: &'a [ScheduledEvent],
        source_id: &EventId,
    ) -> Option<&'a ScheduledEvent> {
        events
            .iter()
            .find(|event| event.description.contains(source_id.as_str()))
    }
}
