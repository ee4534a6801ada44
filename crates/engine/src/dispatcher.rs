// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification dispatch

use crate::announcer::AnnouncementBroadcaster;
use crate::reconciler::ReconciliationEngine;
use crate::reporter::FailureReporter;
use em_adapters::{AlertAdapter, PlatformAdapter};
use em_core::{CorrelationCodec, DescriptionCodec, JobMatcher, Notification};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Runs mirroring and announcing independently for each notification
pub struct Dispatcher<P, A, C = DescriptionCodec> {
    reconciler: ReconciliationEngine<P, A, C>,
    broadcaster: AnnouncementBroadcaster<P, A>,
}

impl<P, A, C> Dispatcher<P, A, C>
where
    P: PlatformAdapter,
    A: AlertAdapter,
    C: CorrelationCodec,
{
    pub fn new(platform: P, matcher: JobMatcher, codec: C, reporter: FailureReporter<A>) -> Self {
        let matcher = Arc::new(matcher);
        Self {
            reconciler: ReconciliationEngine::new(
                platform.clone(),
                Arc::clone(&matcher),
                codec,
                reporter.clone(),
            ),
            broadcaster: AnnouncementBroadcaster::new(platform, matcher, reporter),
        }
    }

    /// One dispatch pass.
    ///
    /// Does not wait for the spawned operations; production callers drop the
    /// returned handles.
    pub fn dispatch(&self, notification: &Notification) -> Vec<JoinHandle<()>> {
        let event = notification.event();
        let pass = uuid::Uuid::new_v4();
        let span = tracing::info_span!(
            "dispatch",
            %pass,
            notification = notification.name(),
            space = %event.space_id,
            event = %event.id
        );
        let _guard = span.enter();

        tracing::info!(name = %event.name, status = %event.status, "dispatching");
        let mut tasks = self.reconciler.reconcile(notification);
        tasks.extend(self.broadcaster.announce(notification));
        tracing::debug!(tasks = tasks.len(), "operations started");
        tasks
    }
}

impl<P: Clone, A: Clone, C: Clone> Clone for Dispatcher<P, A, C> {
    fn clone(&self) -> Self {
        Self {
            reconciler: self.reconciler.clone(),
            broadcaster: self.broadcaster.clone(),
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
