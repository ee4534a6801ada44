// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mirror reconciliation
//!
//! Drives create, edit, status and delete commands against the mirrors of a
//! source event. Every target space is handled by its own task; a missing
//! mirror or failure in one target never affects the others.

use crate::error::EngineError;
use crate::reporter::FailureReporter;
use crate::spawn::spawn_reported;
use em_adapters::{AlertAdapter, PlatformAdapter, PlatformError};
use em_core::{
    project, CorrelationCodec, DescriptionCodec, EventId, EventStatus, JobMatcher, MirrorEvent,
    Notification, ScheduledEvent, SpaceId,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Command to apply to an existing mirror
#[derive(Debug, Clone)]
enum MirrorCommand {
    SetStatus(EventStatus),
    Edit(MirrorEvent),
    Delete,
}

impl MirrorCommand {
    fn action(&self) -> &'static str {
        match self {
            MirrorCommand::SetStatus(_) => "update status of",
            MirrorCommand::Edit(_) => "edit",
            MirrorCommand::Delete => "delete",
        }
    }
}

/// Propagates source event lifecycle changes to mirrors in target spaces
pub struct ReconciliationEngine<P, A, C = DescriptionCodec> {
    platform: P,
    matcher: Arc<JobMatcher>,
    codec: C,
    reporter: FailureReporter<A>,
}

impl<P, A, C> ReconciliationEngine<P, A, C>
where
    P: PlatformAdapter,
    A: AlertAdapter,
    C: CorrelationCodec,
{
    pub fn new(
        platform: P,
        matcher: Arc<JobMatcher>,
        codec: C,
        reporter: FailureReporter<A>,
    ) -> Self {
        Self {
            platform,
            matcher,
            codec,
            reporter,
        }
    }

    /// Start the mirror operations for a notification.
    ///
    /// Returns immediately; the handles only serve callers that want to wait.
    pub fn reconcile(&self, notification: &Notification) -> Vec<JoinHandle<()>> {
        match notification {
            Notification::Created(event) => self.on_created(event),
            Notification::Updated { new, .. } => self.on_updated(new),
            Notification::Deleted(event) => self.on_deleted(event),
        }
    }

    fn on_created(&self, source: &ScheduledEvent) -> Vec<JoinHandle<()>> {
        let mut tasks = Vec::new();
        for job in self.matcher.match_mirror_jobs(source) {
            let mirror = project(&self.codec, source, job);
            for target in &job.distribute {
                let span = tracing::info_span!("mirror.create", source = %source.id, %target);
                let operation = create_mirror(self.platform.clone(), target.clone(), mirror.clone());
                tasks.push(spawn_reported(&self.reporter, operation.instrument(span)));
            }
        }
        tasks
    }

    fn on_updated(&self, source: &ScheduledEvent) -> Vec<JoinHandle<()>> {
        let status = source.status;
        if status == EventStatus::Cancelled {
            tracing::warn!(event = %source.id, %status, "unknown update, mirrors left unchanged");
            return Vec::new();
        }

        let mut tasks = Vec::new();
        for job in self.matcher.match_mirror_jobs(source) {
            let command = match status {
                EventStatus::Scheduled => MirrorCommand::Edit(project(&self.codec, source, job)),
                other => MirrorCommand::SetStatus(other),
            };
            tasks.extend(self.spawn_for_targets(source, &job.distribute, command));
        }
        tasks
    }

    fn on_deleted(&self, source: &ScheduledEvent) -> Vec<JoinHandle<()>> {
        let mut tasks = Vec::new();
        for job in self.matcher.match_mirror_jobs(source) {
            tasks.extend(self.spawn_for_targets(source, &job.distribute, MirrorCommand::Delete));
        }
        tasks
    }

    fn spawn_for_targets(
        &self,
        source: &ScheduledEvent,
        targets: &[SpaceId],
        command: MirrorCommand,
    ) -> Vec<JoinHandle<()>> {
        targets
            .iter()
            .map(|target| {
                let span = tracing::info_span!(
                    "mirror.apply",
                    source = %source.id,
                    %target,
                    action = command.action()
                );
                let operation = apply_to_mirror(
                    self.platform.clone(),
                    self.codec.clone(),
                    source.id.clone(),
                    target.clone(),
                    command.clone(),
                );
                spawn_reported(&self.reporter, operation.instrument(span))
            })
            .collect()
    }
}

impl<P: Clone, A: Clone, C: Clone> Clone for ReconciliationEngine<P, A, C> {
    fn clone(&self) -> Self {
        Self {
            platform: self.platform.clone(),
            matcher: Arc::clone(&self.matcher),
            codec: self.codec.clone(),
            reporter: self.reporter.clone(),
        }
    }
}

async fn create_mirror<P: PlatformAdapter>(
    platform: P,
    target: SpaceId,
    mirror: MirrorEvent,
) -> Result<(), EngineError> {
    match platform.create_event(&target, &mirror).await {
        Ok(handle) => {
            tracing::info!(mirror = %handle, "mirror created");
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            tracing::warn!(error = %e, "target space not found, mirror not created");
            Ok(())
        }
        Err(source) => Err(EngineError::Mirror {
            action: "create",
            space: target,
            source,
        }),
    }
}

async fn apply_to_mirror<P: PlatformAdapter, C: CorrelationCodec>(
    platform: P,
    codec: C,
    source_id: EventId,
    target: SpaceId,
    command: MirrorCommand,
) -> Result<(), EngineError> {
    let events = match platform.list_events(&target).await {
        Ok(events) => events,
        Err(e) if e.is_not_found() => {
            tracing::warn!(error = %e, "target space not found, skipping");
            return Ok(());
        }
        Err(source) => {
            return Err(EngineError::Listing {
                space: target,
                source,
            })
        }
    };

    let Some(mirror) = codec.find_mirror(&events, &source_id) else {
        tracing::warn!(
            "unable to find mirror of event {} in space {}, most likely edited or offline",
            source_id,
            target
        );
        return Ok(());
    };
    let handle = mirror.handle();

    let action = command.action();
    let result: Result<(), PlatformError> = match command {
        MirrorCommand::SetStatus(status) => platform.set_status(&handle, status).await,
        MirrorCommand::Edit(event) => platform.edit_event(&handle, &event).await,
        MirrorCommand::Delete => platform.delete_event(&handle).await,
    };

    match result {
        Ok(()) => {
            tracing::debug!(mirror = %handle, "mirror reconciled");
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            tracing::warn!(mirror = %handle, error = %e, "mirror vanished before {}", action);
            Ok(())
        }
        Err(source) => Err(EngineError::Mirror {
            action,
            space: target,
            source,
        }),
    }
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;
