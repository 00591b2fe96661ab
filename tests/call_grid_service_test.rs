//! Call grid service integration tests

use callgrid::application::{CallGridService, GridEvent};
use callgrid::config::Config;
use callgrid::domain::call::{
    ActiveSpeakerState, CallParticipantState, MicrophoneState, Participant, PresentationMode,
    StreamSelectionPolicy, VideoState,
};
use callgrid::domain::grid::{LayoutDirection, Point, Size};
use callgrid::domain::shared::value_objects::{ClientId, UserId};
use callgrid::infrastructure::InMemoryRoster;
use std::sync::Arc;

fn participant(name: &str, video: VideoState) -> Participant {
    Participant::new(
        UserId::new(),
        ClientId::random(),
        name,
        CallParticipantState::Connected {
            video,
            microphone: MicrophoneState::Unmuted,
        },
    )
}

#[tokio::test]
async fn test_group_call_snapshot() {
    let me = participant("Me", VideoState::Started);
    let roster = Arc::new(InMemoryRoster::with_participants(vec![
        me.clone(),
        participant("bob", VideoState::Started),
        participant("Alice", VideoState::Started),
        participant("Cate", VideoState::Stopped),
    ]));

    let service = CallGridService::new(roster, &Config::default()).unwrap();
    let mut rx = service.subscribe();

    let snapshot = service.refresh(PresentationMode::AllVideoStreams, Some(&me.stream_id()));
    let names: Vec<&str> = snapshot
        .arrangement
        .grid
        .iter()
        .map(|s| s.display_name.as_str())
        .collect();

    assert_eq!(names, vec!["Me", "Alice", "bob"]);
    assert!(snapshot.arrangement.preview.is_none());
    assert_eq!(snapshot.pages, 1);

    match rx.recv().await.unwrap() {
        GridEvent::ArrangementUpdated {
            tiles,
            preview_visible,
            pages,
            ..
        } => {
            assert_eq!(tiles, 3);
            assert!(!preview_visible);
            assert_eq!(pages, 1);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_all_connected_policy_pages() {
    let mut config = Config::default();
    config.grid.max_items_per_page = 2;
    config.selection.policy = StreamSelectionPolicy::AllConnected;

    let roster = Arc::new(InMemoryRoster::with_participants(vec![
        participant("a", VideoState::Stopped),
        participant("b", VideoState::Stopped),
        participant("c", VideoState::Started),
        participant("d", VideoState::Stopped),
        participant("e", VideoState::Stopped),
    ]));

    let service = CallGridService::new(roster, &config).unwrap();
    let snapshot = service.refresh(PresentationMode::AllVideoStreams, None);

    assert_eq!(snapshot.arrangement.grid.len(), 5);
    assert_eq!(snapshot.pages, 3);
}

#[test]
fn test_active_speakers_follow_roster_order() {
    let alice = participant("Alice", VideoState::Started);
    let zoe = participant("Zoe", VideoState::Started);
    let roster = Arc::new(InMemoryRoster::with_participants(vec![
        alice.clone(),
        zoe.clone(),
        participant("Max", VideoState::Started),
    ]));
    roster
        .set_speaking(&alice.stream_id(), ActiveSpeakerState::Active)
        .unwrap();
    roster
        .set_speaking(&zoe.stream_id(), ActiveSpeakerState::Active)
        .unwrap();

    let service = CallGridService::new(roster.clone(), &Config::default()).unwrap();
    let snapshot = service.refresh(PresentationMode::ActiveSpeakers, None);
    let names: Vec<&str> = snapshot
        .arrangement
        .grid
        .iter()
        .map(|s| s.display_name.as_str())
        .collect();

    assert_eq!(names, vec!["Zoe", "Alice"]);
}

#[test]
fn test_refresh_is_idempotent() {
    let me = participant("Me", VideoState::Started);
    let roster = Arc::new(InMemoryRoster::with_participants(vec![
        me.clone(),
        participant("Remote", VideoState::Started),
    ]));

    let service = CallGridService::new(roster, &Config::default()).unwrap();
    let first = service.refresh(PresentationMode::AllVideoStreams, Some(&me.stream_id()));
    let second = service.refresh(PresentationMode::AllVideoStreams, Some(&me.stream_id()));

    assert_eq!(first, second);
    assert_eq!(
        first.arrangement.preview.map(|s| s.stream_id),
        Some(me.stream_id())
    );
}

#[test]
fn test_scroll_reports_clamped_page() {
    let roster = Arc::new(InMemoryRoster::new());
    let mut service = CallGridService::new(roster, &Config::default()).unwrap();
    service.set_layout_direction(LayoutDirection::Horizontal);
    assert_eq!(service.layout_direction(), LayoutDirection::Horizontal);

    let frame = Size::new(400.0, 800.0);
    assert_eq!(service.scroll_did_end(Point::new(400.0, 0.0), frame, 12), 1);
    assert_eq!(service.scroll_did_end(Point::new(4000.0, 0.0), frame, 12), 1);
    assert_eq!(service.scroll_did_end(Point::new(0.0, 0.0), frame, 0), 0);
}
