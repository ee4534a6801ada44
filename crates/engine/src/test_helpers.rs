// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for engine tests

use em_adapters::{FakeAlertAdapter, FakePlatformAdapter};
use em_core::{
    AnnouncementJob, ChannelId, EventId, EventMedium, EventStatus, MediumFlags, MirrorJob,
    ScheduledEvent, SpaceId, TransitionFlags,
};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
pub struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
pub fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

/// Count log lines at WARN level containing `needle`
pub fn count_warnings(logs: &str, needle: &str) -> usize {
    logs.lines()
        .filter(|line| line.contains("WARN") && line.contains(needle))
        .count()
}

pub async fn join_all(tasks: Vec<JoinHandle<()>>) {
    for task in tasks {
        task.await.unwrap();
    }
}

/// Platform with source space G1 and target spaces G2, G3
pub fn platform() -> FakePlatformAdapter {
    let platform = FakePlatformAdapter::new();
    platform.add_space("G1", "Guild One");
    platform.add_space("G2", "Guild Two");
    platform.add_space("G3", "Guild Three");
    platform
}

pub fn alerts() -> FakeAlertAdapter {
    FakeAlertAdapter::new()
}

/// Voice event E1 in G1 starting at 1000 without end
pub fn voice_event() -> ScheduledEvent {
    ScheduledEvent {
        id: EventId::new("E1"),
        space_id: SpaceId::new("G1"),
        space_name: "Guild One".to_string(),
        name: "Weekly sync".to_string(),
        description: "Weekly sync".to_string(),
        start: 1000,
        end: None,
        medium: EventMedium::Voice {
            channel: "general".to_string(),
        },
        status: EventStatus::Scheduled,
    }
}

pub fn with_status(event: &ScheduledEvent, status: EventStatus) -> ScheduledEvent {
    ScheduledEvent {
        status,
        ..event.clone()
    }
}

pub fn voice_job(distribute: &[&str]) -> MirrorJob {
    MirrorJob {
        listen: vec![SpaceId::new("G1")],
        types: MediumFlags {
            voice: true,
            ..MediumFlags::default()
        },
        distribute: distribute.iter().map(|s| SpaceId::new(*s)).collect(),
        description_suffix: "Mirrored from G1".to_string(),
    }
}

pub fn announce_job(
    channels: &[&str],
    types: TransitionFlags,
    message: Option<&str>,
) -> AnnouncementJob {
    AnnouncementJob {
        channels: channels.iter().map(|c| ChannelId::new(*c)).collect(),
        types,
        message: message.map(str::to_string),
    }
}
