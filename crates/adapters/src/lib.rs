// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the hosting platform and the operations alert sink

pub mod alert;
pub mod platform;
pub mod traced;

pub use alert::{Alert, AlertAdapter, AlertError, ChannelAlertAdapter, NoOpAlertAdapter};
pub use platform::{DiscordHttpAdapter, PlatformAdapter, PlatformError};
pub use traced::{TracedAlertAdapter, TracedPlatformAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use alert::FakeAlertAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use platform::{FakePlatformAdapter, PlatformCall};
