// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op alert adapter for debug mode.

use super::{Alert, AlertAdapter, AlertError};
use async_trait::async_trait;

/// Alert adapter that drops every alert.
///
/// Used in debug mode, where failures are only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpAlertAdapter;

impl NoOpAlertAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AlertAdapter for NoOpAlertAdapter {
    async fn alert(&self, _alert: &Alert) -> Result<(), AlertError> {
        Ok(())
    }
}
