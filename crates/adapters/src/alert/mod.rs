// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operations alert adapters

mod channel;
mod noop;

pub use channel::ChannelAlertAdapter;
pub use noop::NoOpAlertAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAlertAdapter;

use crate::platform::PlatformError;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from alert delivery
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("alert delivery failed: {0}")]
    Delivery(#[from] PlatformError),
}

/// A failure alert for operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    /// Error detail, already truncated to the sink's limits
    pub detail: String,
}

/// Adapter for delivering alerts to operators
#[async_trait]
pub trait AlertAdapter: Clone + Send + Sync + 'static {
    async fn alert(&self, alert: &Alert) -> Result<(), AlertError>;
}
