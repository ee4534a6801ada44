// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake alert adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Alert, AlertAdapter, AlertError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Fake alert adapter for testing
#[derive(Clone, Default)]
pub struct FakeAlertAdapter {
    alerts: Arc<Mutex<Vec<Alert>>>,
}

impl FakeAlertAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded alerts
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl AlertAdapter for FakeAlertAdapter {
    async fn alert(&self, alert: &Alert) -> Result<(), AlertError> {
        self.alerts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(alert.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
