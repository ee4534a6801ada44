// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alerts posted to an operations channel

use super::{Alert, AlertAdapter, AlertError};
use crate::platform::PlatformAdapter;
use async_trait::async_trait;
use em_core::{ChannelId, Embed, EmbedColor, OutboundMessage};

/// Posts alerts as red embeds to a channel through a platform adapter
#[derive(Clone)]
pub struct ChannelAlertAdapter<P> {
    platform: P,
    channel: ChannelId,
}

impl<P> ChannelAlertAdapter<P> {
    pub fn new(platform: P, channel: ChannelId) -> Self {
        Self { platform, channel }
    }

    fn message(alert: &Alert) -> OutboundMessage {
        let description = format!("STACKTRACE:\n```{}```", alert.detail);
        OutboundMessage::embed(
            Embed::new(description, EmbedColor::Red).with_author(alert.title.clone()),
        )
    }
}

#[async_trait]
impl<P: PlatformAdapter> AlertAdapter for ChannelAlertAdapter<P> {
    async fn alert(&self, alert: &Alert) -> Result<(), AlertError> {
        self.platform
            .send_message(&self.channel, &Self::message(alert))
            .await?;
        Ok(())
    }
}
