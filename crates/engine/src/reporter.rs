// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure reporting to logs and the operations alert sink

use em_adapters::{Alert, AlertAdapter};
use std::error::Error;

/// Upper bound on the detail sent with an alert, in characters
pub const MAX_ALERT_DETAIL: usize = 4000;

/// Logs failures and, outside debug mode, forwards them as alerts
#[derive(Clone)]
pub struct FailureReporter<A> {
    alerts: A,
    debug: bool,
}

impl<A: AlertAdapter> FailureReporter<A> {
    pub fn new(alerts: A, debug: bool) -> Self {
        Self { alerts, debug }
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Report a failure.
    ///
    /// Never fails: an undeliverable alert is only logged.
    pub async fn report(&self, error: &(dyn Error + Send + Sync + 'static)) {
        let detail = error_detail(error);
        tracing::error!(error = %error, detail = %detail, "operation failed");

        if self.debug {
            return;
        }

        let alert = Alert {
            title: format!("Error: '{}'", error),
            detail: truncate(&detail, MAX_ALERT_DETAIL),
        };
        if let Err(e) = self.alerts.alert(&alert).await {
            tracing::warn!(error = %e, "could not deliver failure alert");
        }
    }
}

/// Render an error with its full source chain
pub fn error_detail(error: &(dyn Error + 'static)) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        detail.push_str("\ncaused by: ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
