// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Announcement fan-out to broadcast channels

use crate::error::EngineError;
use crate::reporter::FailureReporter;
use crate::spawn::spawn_reported;
use em_adapters::{AlertAdapter, PlatformAdapter};
use em_core::{
    ChannelId, Embed, EmbedColor, JobMatcher, Notification, OutboundMessage, ScheduledEvent,
    SpaceId, Transition,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Summary embed for a transition of `event`
pub fn summary(transition: Transition, event: &ScheduledEvent) -> Embed {
    match transition {
        Transition::Created => Embed::new("New Event!", EmbedColor::Green),
        Transition::Started => Embed::new(
            format!("Event **{}** has started.", event.name),
            EmbedColor::Blue,
        ),
        Transition::Ended => Embed::new(
            format!("Event **{}** has ended.", event.name),
            EmbedColor::Grey,
        ),
        Transition::GeneralUpdate => Embed::new(
            format!("Event **{}** got updated.", event.name),
            EmbedColor::Yellow,
        ),
        Transition::Deleted => Embed::new(
            format!("Event **{}** got cancelled.", event.name),
            EmbedColor::Red,
        ),
    }
}

/// Build the announcement posted by a job with the given message line.
///
/// The message line and event link accompany every transition the job
/// announces, not only creation.
pub fn announcement(
    transition: Transition,
    event: &ScheduledEvent,
    message: Option<&str>,
) -> OutboundMessage {
    let mut outbound = OutboundMessage::embed(summary(transition, event));
    if let Some(message) = message {
        outbound = outbound.with_content(format!("{}\n{}", message, event.url()));
    }
    outbound
}

/// Posts lifecycle announcements to the channels of matching jobs
pub struct AnnouncementBroadcaster<P, A> {
    platform: P,
    matcher: Arc<JobMatcher>,
    reporter: FailureReporter<A>,
}

impl<P, A> AnnouncementBroadcaster<P, A>
where
    P: PlatformAdapter,
    A: AlertAdapter,
{
    pub fn new(platform: P, matcher: Arc<JobMatcher>, reporter: FailureReporter<A>) -> Self {
        Self {
            platform,
            matcher,
            reporter,
        }
    }

    /// Start one post per configured channel of every matching job
    pub fn announce(&self, notification: &Notification) -> Vec<JoinHandle<()>> {
        let Some(transition) = notification.transition() else {
            tracing::debug!(notification = notification.name(), "no announceable transition");
            return Vec::new();
        };
        let event = notification.event();

        let mut tasks = Vec::new();
        for job in self.matcher.match_announcement_jobs(transition) {
            let message = announcement(transition, event, job.message.as_deref());
            for channel in &job.channels {
                let span = tracing::info_span!(
                    "announce",
                    %transition,
                    event = %event.id,
                    %channel
                );
                let operation = post(
                    self.platform.clone(),
                    channel.clone(),
                    event.space_id.clone(),
                    message.clone(),
                );
                tasks.push(spawn_reported(&self.reporter, operation.instrument(span)));
            }
        }
        tasks
    }
}

impl<P: Clone, A: Clone> Clone for AnnouncementBroadcaster<P, A> {
    fn clone(&self) -> Self {
        Self {
            platform: self.platform.clone(),
            matcher: Arc::clone(&self.matcher),
            reporter: self.reporter.clone(),
        }
    }
}

async fn post<P: PlatformAdapter>(
    platform: P,
    channel_id: ChannelId,
    origin: SpaceId,
    message: OutboundMessage,
) -> Result<(), EngineError> {
    let channel = match platform.channel(&channel_id).await {
        Ok(Some(channel)) => channel,
        Ok(None) => {
            tracing::warn!(
                "Channel {} doesn't exist. Please check the ID and permissions",
                channel_id
            );
            return Ok(());
        }
        Err(source) => {
            return Err(EngineError::Announce {
                channel: channel_id,
                source,
            })
        }
    };

    if channel.space_id != origin {
        tracing::warn!(
            channel_space = %channel.space_id,
            event_space = %origin,
            "channel {} belongs to another space, not announcing",
            channel_id
        );
        return Ok(());
    }

    platform
        .send_message(&channel_id, &message)
        .await
        .map_err(|source| EngineError::Announce {
            channel: channel_id.clone(),
            source,
        })?;
    tracing::debug!("announcement posted");
    Ok(())
}

#[cfg(test)]
#[path = "announcer_tests.rs"]
mod tests;
