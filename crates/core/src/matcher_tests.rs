// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::config::{MediumFlags, TransitionFlags};
use crate::event::{ChannelId, EventId, EventMedium, EventStatus, SpaceId};
use yare::parameterized;

fn event(space: &str, medium: EventMedium) -> ScheduledEvent {
    ScheduledEvent {
        id: EventId::new("E1"),
        space_id: SpaceId::new(space),
        space_name: "Guild".to_string(),
        name: "Event".to_string(),
        description: String::new(),
        start: 0,
        end: None,
        medium,
        status: EventStatus::Scheduled,
    }
}

fn voice() -> EventMedium {
    EventMedium::Voice {
        channel: "vc".to_string(),
    }
}

fn stage() -> EventMedium {
    EventMedium::Stage {
        channel: "stage".to_string(),
    }
}

fn external() -> EventMedium {
    EventMedium::External {
        location: "Park".to_string(),
    }
}

fn mirror_job(listen: &[&str], types: MediumFlags, suffix: &str) -> MirrorJob {
    MirrorJob {
        listen: listen.iter().map(|s| SpaceId::new(*s)).collect(),
        types,
        distribute: vec![SpaceId::new("G9")],
        description_suffix: suffix.to_string(),
    }
}

fn all_media() -> MediumFlags {
    MediumFlags {
        stage_instance: true,
        voice: true,
        external: true,
    }
}

#[test]
fn matches_jobs_listening_to_origin_space() {
    let matcher = JobMatcher::new(
        vec![
            mirror_job(&["G1"], all_media(), "a"),
            mirror_job(&["G2"], all_media(), "b"),
            mirror_job(&["G2", "G1"], all_media(), "c"),
        ],
        vec![],
    );

    let jobs = matcher.match_mirror_jobs(&event("G1", voice()));
    let suffixes: Vec<_> = jobs.iter().map(|j| j.description_suffix.as_str()).collect();
    assert_eq!(suffixes, vec!["a", "c"]);
}

#[test]
fn disabled_voice_flag_excludes_voice_events_regardless_of_other_flags() {
    let matcher = JobMatcher::new(
        vec![mirror_job(
            &["A"],
            MediumFlags {
                stage_instance: true,
                voice: false,
                external: true,
            },
            "",
        )],
        vec![],
    );

    assert!(matcher.match_mirror_jobs(&event("A", voice())).is_empty());
}

#[parameterized(
    stage_only_matches_stage = { MediumFlags { stage_instance: true, voice: false, external: false }, stage(), true },
    stage_only_skips_voice = { MediumFlags { stage_instance: true, voice: false, external: false }, voice(), false },
    stage_only_skips_external = { MediumFlags { stage_instance: true, voice: false, external: false }, external(), false },
    voice_only_matches_voice = { MediumFlags { stage_instance: false, voice: true, external: false }, voice(), true },
    external_only_matches_external = { MediumFlags { stage_instance: false, voice: false, external: true }, external(), true },
    nothing_enabled = { MediumFlags::default(), external(), false },
)]
fn only_matching_medium_flag_gates(flags: MediumFlags, medium: EventMedium, expected: bool) {
    let matcher = JobMatcher::new(vec![mirror_job(&["G1"], flags, "")], vec![]);
    let matched = !matcher.match_mirror_jobs(&event("G1", medium)).is_empty();
    assert_eq!(matched, expected);
}

#[test]
fn announcement_jobs_filter_by_transition_only() {
    let created_only = AnnouncementJob {
        channels: vec![ChannelId::new("C1")],
        types: TransitionFlags {
            created: true,
            ..TransitionFlags::default()
        },
        message: None,
    };
    let lifecycle = AnnouncementJob {
        channels: vec![ChannelId::new("C2")],
        types: TransitionFlags {
            started: true,
            ended: true,
            ..TransitionFlags::default()
        },
        message: Some("Live".to_string()),
    };
    let matcher = JobMatcher::new(vec![], vec![created_only, lifecycle]);

    let created = matcher.match_announcement_jobs(Transition::Created);
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].channels, vec![ChannelId::new("C1")]);

    let started = matcher.match_announcement_jobs(Transition::Started);
    assert_eq!(started.len(), 1);
    assert_eq!(started[0].message.as_deref(), Some("Live"));

    assert!(matcher
        .match_announcement_jobs(Transition::Deleted)
        .is_empty());
}
