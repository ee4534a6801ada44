// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel message model

use serde::{Deserialize, Serialize};

/// Embed accent colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedColor {
    Green,
    Red,
    Blue,
    Yellow,
    Grey,
}

impl EmbedColor {
    /// RGB value as used by the platform
    pub fn rgb(self) -> u32 {
        match self {
            EmbedColor::Green => 0x57F287,
            EmbedColor::Red => 0xED4245,
            EmbedColor::Blue => 0x3498DB,
            EmbedColor::Yellow => 0xFEE75C,
            EmbedColor::Grey => 0x95A5A6,
        }
    }
}

/// An embedded summary block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    /// Optional author line shown above the description
    pub author: Option<String>,
    pub description: String,
    pub color: EmbedColor,
}

impl Embed {
    pub fn new(description: impl Into<String>, color: EmbedColor) -> Self {
        Self {
            author: None,
            description: description.into(),
            color,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// A message posted to a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Plain-text line above the embed
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
}

impl OutboundMessage {
    pub fn embed(embed: Embed) -> Self {
        Self {
            content: None,
            embeds: vec![embed],
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_content_and_embed() {
        let msg = OutboundMessage::embed(Embed::new("New Event!", EmbedColor::Green))
            .with_content("Heads up");
        assert_eq!(msg.content.as_deref(), Some("Heads up"));
        assert_eq!(msg.embeds.len(), 1);
        assert_eq!(msg.embeds[0].color.rgb(), 0x57F287);
        assert!(msg.embeds[0].author.is_none());
    }
}
