// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job selection for source events and transitions

use crate::config::{AnnouncementJob, Config, MirrorJob};
use crate::event::ScheduledEvent;
use crate::notification::Transition;

/// Selects the configured jobs that apply to an event or transition.
///
/// Results keep configuration order.
#[derive(Debug, Clone, Default)]
pub struct JobMatcher {
    mirror_jobs: Vec<MirrorJob>,
    announcement_jobs: Vec<AnnouncementJob>,
}

impl JobMatcher {
    pub fn new(mirror_jobs: Vec<MirrorJob>, announcement_jobs: Vec<AnnouncementJob>) -> Self {
        Self {
            mirror_jobs,
            announcement_jobs,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mirror.clone(), config.announce.clone())
    }

    /// Mirroring jobs listening to the event's space with its medium enabled
    pub fn match_mirror_jobs(&self, event: &ScheduledEvent) -> Vec<&MirrorJob> {
        let kind = event.medium.kind();
        self.mirror_jobs
            .iter()
            .filter(|job| job.listen.contains(&event.space_id))
            .filter(|job| job.types.allows(kind))
            .collect()
    }

    /// Announcement jobs subscribed to the transition, regardless of space
    pub fn match_announcement_jobs(&self, transition: Transition) -> Vec<&AnnouncementJob> {
        self.announcement_jobs
            .iter()
            .filter(|job| job.types.allows(transition))
            .collect()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
