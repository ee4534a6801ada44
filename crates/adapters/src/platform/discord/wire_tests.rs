// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use em_core::{Embed, EmbedColor};
use serde_json::json;

fn voice_payload() -> serde_json::Value {
    json!({
        "id": "1100000000000000001",
        "guild_id": "1000000000000000001",
        "channel_id": "1200000000000000001",
        "creator_id": "1300000000000000001",
        "name": "Weekly sync",
        "description": "Weekly sync",
        "scheduled_start_time": "2026-10-19T18:00:00.000+00:00",
        "scheduled_end_time": null,
        "privacy_level": 2,
        "status": 1,
        "entity_type": 2,
        "entity_id": null,
        "entity_metadata": null
    })
}

#[test]
fn voice_event_converts_with_resolved_names() {
    let wire: WireScheduledEvent = serde_json::from_value(voice_payload()).unwrap();
    assert_eq!(
        wire.channel_to_resolve(),
        Some(ChannelId::new("1200000000000000001"))
    );

    let event = wire
        .into_event("Guild One", Some("general".to_string()))
        .unwrap();
    assert_eq!(event.id, EventId::new("1100000000000000001"));
    assert_eq!(event.space_name, "Guild One");
    assert_eq!(
        event.medium,
        EventMedium::Voice {
            channel: "general".to_string()
        }
    );
    assert_eq!(event.status, EventStatus::Scheduled);
    assert_eq!(event.start, 1_792_432_800_000);
    assert_eq!(event.end, None);
}

#[test]
fn external_event_reads_location_metadata() {
    let wire: WireScheduledEvent = serde_json::from_value(json!({
        "id": "11",
        "guild_id": "10",
        "channel_id": null,
        "name": "Meetup",
        "description": null,
        "scheduled_start_time": "2026-10-19T18:00:00+00:00",
        "scheduled_end_time": "2026-10-19T20:00:00+00:00",
        "status": 2,
        "entity_type": 3,
        "entity_metadata": { "location": "Central Park" }
    }))
    .unwrap();
    assert_eq!(wire.channel_to_resolve(), None);

    let event = wire.into_event("Guild", None).unwrap();
    assert_eq!(
        event.medium,
        EventMedium::External {
            location: "Central Park".to_string()
        }
    );
    assert_eq!(event.description, "");
    assert_eq!(event.status, EventStatus::Active);
    assert_eq!(event.end, Some(event.start + 7_200_000));
}

#[test]
fn unknown_entity_type_is_a_payload_error() {
    let mut payload = voice_payload();
    payload["entity_type"] = json!(9);
    let wire: WireScheduledEvent = serde_json::from_value(payload).unwrap();

    let err = wire.into_event("Guild", None).unwrap_err();
    assert!(matches!(err, PlatformError::Payload(_)));
}

#[test]
fn mirror_body_is_external_and_unbinds_channel() {
    let mirror = MirrorEvent {
        name: "Weekly sync".to_string(),
        description: "Weekly sync\nMirrored\n\nE1".to_string(),
        start: 1_792_432_800_000,
        end: None,
        medium: EventMedium::External {
            location: "VC \"general\" in Guild One".to_string(),
        },
    };

    let body = serde_json::to_value(WireEventBody::from_mirror(&mirror).unwrap()).unwrap();
    assert_eq!(body["entity_type"], json!(3));
    assert_eq!(body["privacy_level"], json!(2));
    assert_eq!(body["channel_id"], serde_json::Value::Null);
    assert_eq!(body["scheduled_start_time"], json!("2026-10-19T18:00:00.000Z"));
    assert!(body.get("scheduled_end_time").is_none());
    assert_eq!(
        body["entity_metadata"]["location"],
        json!("VC \"general\" in Guild One")
    );
}

#[test]
fn channel_bound_mirror_is_rejected() {
    let mirror = MirrorEvent {
        name: "x".to_string(),
        description: String::new(),
        start: 0,
        end: None,
        medium: EventMedium::Voice {
            channel: "general".to_string(),
        },
    };
    assert!(WireEventBody::from_mirror(&mirror).is_err());
}

#[test]
fn dm_channels_have_no_space() {
    let wire: WireChannel =
        serde_json::from_value(json!({ "id": "5", "type": 1 })).unwrap();
    assert!(wire.into_channel().is_none());

    let wire: WireChannel = serde_json::from_value(
        json!({ "id": "6", "guild_id": "10", "name": "announcements", "type": 0 }),
    )
    .unwrap();
    let channel = wire.into_channel().unwrap();
    assert_eq!(channel.space_id, SpaceId::new("10"));
}

#[test]
fn message_serializes_embed_color_and_author() {
    let message = OutboundMessage::embed(
        Embed::new("STACKTRACE", EmbedColor::Red).with_author("Error: 'boom'"),
    );
    let body = serde_json::to_value(WireMessage::from(&message)).unwrap();
    assert!(body.get("content").is_none());
    assert_eq!(body["embeds"][0]["color"], json!(0xED4245));
    assert_eq!(body["embeds"][0]["author"]["name"], json!("Error: 'boom'"));
}

#[test]
fn missing_access_counts_as_absent() {
    let err = status_error("GET", "/channels/5", 403);
    assert!(err.is_not_found(), "{:?}", err);
    assert!(status_error("GET", "/guilds/10", 404).is_not_found());
}

#[test]
fn other_statuses_stay_failures() {
    let err = status_error("POST", "/guilds/10/scheduled-events", 500);
    assert!(!err.is_not_found());
    assert_eq!(
        err.to_string(),
        "POST /guilds/10/scheduled-events returned status 500"
    );
}
