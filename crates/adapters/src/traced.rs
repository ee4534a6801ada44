// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::alert::{Alert, AlertAdapter, AlertError};
use crate::platform::{PlatformAdapter, PlatformError};
use async_trait::async_trait;
use em_core::{
    Channel, ChannelId, EventHandle, EventStatus, MirrorEvent, OutboundMessage, ScheduledEvent,
    Space, SpaceId,
};
use tracing::Instrument;

/// Wrapper that adds tracing to any PlatformAdapter
#[derive(Clone)]
pub struct TracedPlatformAdapter<P> {
    inner: P,
}

impl<P> TracedPlatformAdapter<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: PlatformAdapter> PlatformAdapter for TracedPlatformAdapter<P> {
    async fn space(&self, id: &SpaceId) -> Result<Option<Space>, PlatformError> {
        let result = self.inner.space(id).await;
        tracing::trace!(
            %id,
            found = ?result.as_ref().map(|s| s.is_some()).ok(),
            "resolved space"
        );
        result
    }

    async fn channel(&self, id: &ChannelId) -> Result<Option<Channel>, PlatformError> {
        let result = self.inner.channel(id).await;
        tracing::trace!(
            %id,
            found = ?result.as_ref().map(|c| c.is_some()).ok(),
            "resolved channel"
        );
        result
    }

    async fn list_events(&self, space: &SpaceId) -> Result<Vec<ScheduledEvent>, PlatformError> {
        let span = tracing::debug_span!("platform.list_events", %space);
        async {
            let start = std::time::Instant::now();
            let result = self.inner.list_events(space).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(events) => tracing::debug!(
                    count = events.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "listed events"
                ),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "listing failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn create_event(
        &self,
        space: &SpaceId,
        event: &MirrorEvent,
    ) -> Result<EventHandle, PlatformError> {
        let span = tracing::info_span!("platform.create_event", %space, name = %event.name);
        async {
            tracing::info!(start = event.start, end = ?event.end, "creating");

            // Precondition: mirrors never reference a channel
            if event.location().is_none() {
                tracing::error!(medium = %event.kind(), "mirror is not an external event");
                return Err(PlatformError::Payload(format!(
                    "mirror must be external, got {}",
                    event.kind()
                )));
            }

            let start = std::time::Instant::now();
            let result = self.inner.create_event(space, event).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(handle) => tracing::info!(
                    event_id = %handle.event_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "event created"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "create failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn edit_event(
        &self,
        handle: &EventHandle,
        event: &MirrorEvent,
    ) -> Result<(), PlatformError> {
        let span = tracing::info_span!("platform.edit_event", %handle);
        async {
            if event.location().is_none() {
                tracing::error!(medium = %event.kind(), "mirror is not an external event");
                return Err(PlatformError::Payload(format!(
                    "mirror must be external, got {}",
                    event.kind()
                )));
            }

            let start = std::time::Instant::now();
            let result = self.inner.edit_event(handle, event).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "event edited"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "edit failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn set_status(
        &self,
        handle: &EventHandle,
        status: EventStatus,
    ) -> Result<(), PlatformError> {
        let span = tracing::info_span!("platform.set_status", %handle, %status);
        async {
            let result = self.inner.set_status(handle, status).await;
            match &result {
                Ok(()) => tracing::info!("status set"),
                Err(e) => tracing::error!(error = %e, "set status failed"),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn delete_event(&self, handle: &EventHandle) -> Result<(), PlatformError> {
        let span = tracing::info_span!("platform.delete_event", %handle);
        async {
            let result = self.inner.delete_event(handle).await;
            // deleting an event that is already gone is often acceptable
            match &result {
                Ok(()) => tracing::info!("event deleted"),
                Err(e) => tracing::warn!(error = %e, "delete failed"),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn send_message(
        &self,
        channel: &ChannelId,
        message: &OutboundMessage,
    ) -> Result<(), PlatformError> {
        let span = tracing::info_span!("platform.send_message", %channel);
        async {
            tracing::debug!(
                has_content = message.content.is_some(),
                embeds = message.embeds.len(),
                "sending"
            );
            let result = self.inner.send_message(channel, message).await;

            match &result {
                Ok(()) => tracing::debug!("sent"),
                Err(e) => tracing::error!(error = %e, "send failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any AlertAdapter
#[derive(Clone)]
pub struct TracedAlertAdapter<A> {
    inner: A,
}

impl<A> TracedAlertAdapter<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<A: AlertAdapter> AlertAdapter for TracedAlertAdapter<A> {
    async fn alert(&self, alert: &Alert) -> Result<(), AlertError> {
        let span = tracing::info_span!("alert.send", title = %alert.title);
        async {
            tracing::debug!(detail_len = alert.detail.len(), "sending");
            let result = self.inner.alert(alert).await;

            match &result {
                Ok(()) => tracing::debug!("alert delivered"),
                Err(e) => tracing::warn!(error = %e, "alert delivery failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
