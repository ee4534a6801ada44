// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Projection of a source event into its mirror representation

use crate::config::MirrorJob;
use crate::correlation::CorrelationCodec;
use crate::event::{EventMedium, ScheduledEvent, Timestamp};
use crate::mirror::MirrorEvent;

/// Duration given to channel-bound events that have no end time (2 hours)
pub const DEFAULT_EVENT_DURATION_MS: Timestamp = 7_200_000;

/// Build the mirror of `source` for `job`.
///
/// The result owns all of its data. Stage and voice events are turned into
/// external events whose location names the original channel and space.
pub fn project<C: CorrelationCodec>(
    codec: &C,
    source: &ScheduledEvent,
    job: &MirrorJob,
) -> MirrorEvent {
    let end = match (&source.end, &source.medium) {
        (Some(end), _) => Some(*end),
        (None, EventMedium::External { .. }) => None,
        (None, _) => Some(source.start + DEFAULT_EVENT_DURATION_MS),
    };

    MirrorEvent {
        name: source.name.clone(),
        description: codec.embed(&source.id, &source.description, &job.description_suffix),
        start: source.start,
        end,
        medium: EventMedium::External {
            location: location(source),
        },
    }
}

fn location(source: &ScheduledEvent) -> String {
    match &source.medium {
        EventMedium::Stage { channel } => {
            format!("Stage \"{}\" in {}", channel, source.space_name)
        }
        EventMedium::Voice { channel } => format!("VC \"{}\" in {}", channel, source.space_name),
        EventMedium::External { location } => location.clone(),
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
