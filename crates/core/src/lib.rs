// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! em-core: pure building blocks of the event mirror
//!
//! This crate provides:
//! - The scheduled event model shared by source events and mirrors
//! - Static configuration of mirroring and announcement jobs
//! - Job matching, correlation encoding and mirror projection

pub mod config;
pub mod correlation;
pub mod event;
pub mod matcher;
pub mod message;
pub mod mirror;
pub mod notification;
pub mod projector;

pub use config::{
    AnnouncementJob, Config, ConfigError, MediumFlags, MirrorJob, TransitionFlags,
};
pub use correlation::{CorrelationCodec, DescriptionCodec};
pub use event::{
    Channel, ChannelId, EventHandle, EventId, EventMedium, EventStatus, MediumKind,
    ScheduledEvent, Space, SpaceId, Timestamp,
};
pub use matcher::JobMatcher;
pub use message::{Embed, EmbedColor, OutboundMessage};
pub use mirror::MirrorEvent;
pub use notification::{Notification, Transition};
pub use projector::{project, DEFAULT_EVENT_DURATION_MS};
