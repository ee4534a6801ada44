// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the mirroring engine

use em_adapters::PlatformError;
use em_core::{ChannelId, SpaceId};
use thiserror::Error;

/// Unexpected failures of a single outbound operation.
///
/// Absent mirrors, spaces and channels are not errors; they are logged and
/// skipped where they occur.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to list events of space {space}")]
    Listing {
        space: SpaceId,
        #[source]
        source: PlatformError,
    },
    #[error("failed to {action} mirror in space {space}")]
    Mirror {
        action: &'static str,
        space: SpaceId,
        #[source]
        source: PlatformError,
    },
    #[error("failed to announce in channel {channel}")]
    Announce {
        channel: ChannelId,
        #[source]
        source: PlatformError,
    },
}
