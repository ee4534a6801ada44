// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Event mirroring engine

mod announcer;
mod dispatcher;
mod error;
mod reconciler;
mod reporter;
mod spawn;

#[cfg(test)]
mod test_helpers;

pub use announcer::{announcement, summary, AnnouncementBroadcaster};
pub use dispatcher::Dispatcher;
pub use error::EngineError;
pub use reconciler::ReconciliationEngine;
pub use reporter::{error_detail, FailureReporter, MAX_ALERT_DETAIL};
