// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Detached task spawning for outbound operations

use crate::error::EngineError;
use crate::reporter::FailureReporter;
use em_adapters::AlertAdapter;
use std::future::Future;
use tokio::task::JoinHandle;
use tracing::instrument::WithSubscriber;
use tracing::Instrument;

/// Spawn one outbound operation as an independent task.
///
/// The task inherits the caller's span and subscriber. A failure is handed to
/// the reporter and never reaches sibling tasks.
pub(crate) fn spawn_reported<A, F>(reporter: &FailureReporter<A>, operation: F) -> JoinHandle<()>
where
    A: AlertAdapter,
    F: Future<Output = Result<(), EngineError>> + Send + 'static,
{
    let reporter = reporter.clone();
    let task = async move {
        if let Err(e) = operation.await {
            reporter.report(&e).await;
        }
    };
    tokio::spawn(
        task.instrument(tracing::Span::current())
            .with_current_subscriber(),
    )
}
