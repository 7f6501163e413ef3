use super::*;
use crate::model::player::{Denial, PlayOutcome};

/// Tests a search with zero results.
///
/// Verifies that the caller gets the "no media found" denial and that the player is
/// never touched: no voice connection, no panel, no session.
///
/// Expected: Denied(NoMediaFound), guild stays idle
#[tokio::test]
async fn empty_search_is_denied_without_state_change() {
    let (service, transport, board) = spawn_worker();

    let outcome = service
        .play_query(&FakeResolver::Empty, GUILD, VOICE, TEXT, "nothing at all")
        .await
        .unwrap();

    assert_eq!(outcome, PlayOutcome::Denied(Denial::NoMediaFound));
    assert!(!service.is_active(GUILD).await.unwrap());
    assert!(transport.calls().is_empty());
    assert!(board.published().is_empty());
}

/// Tests a backend failure during resolution.
///
/// Expected: same denial as an empty search
#[tokio::test]
async fn extractor_failure_is_denied_like_empty_search() {
    let (service, transport, _board) = spawn_worker();

    let outcome = service
        .play_query(&FakeResolver::Broken, GUILD, VOICE, TEXT, "anything")
        .await
        .unwrap();

    assert_eq!(outcome, PlayOutcome::Denied(Denial::NoMediaFound));
    assert!(transport.calls().is_empty());
}

/// Tests a denied query while a session is running.
///
/// Expected: queue and current track untouched
#[tokio::test]
async fn empty_search_leaves_running_session_alone() {
    let (service, _transport, board) = spawn_worker();
    service
        .play_query(&FakeResolver::Found(track("A")), GUILD, VOICE, TEXT, "a")
        .await
        .unwrap();

    let outcome = service
        .play_query(&FakeResolver::Empty, GUILD, VOICE, TEXT, "nothing")
        .await
        .unwrap();

    assert_eq!(outcome, PlayOutcome::Denied(Denial::NoMediaFound));
    assert!(service.is_active(GUILD).await.unwrap());
    assert_eq!(board.last_update(), None);
}

/// Tests resolution followed by playback.
///
/// Expected: Started for an idle guild, Queued behind it afterwards
#[tokio::test]
async fn resolved_query_starts_then_queues() {
    let (service, _transport, board) = spawn_worker();

    let first = service
        .play_query(&FakeResolver::Found(track("A")), GUILD, VOICE, TEXT, "a")
        .await
        .unwrap();
    let second = service
        .play_query(&FakeResolver::Found(track("B")), GUILD, VOICE, TEXT, "b")
        .await
        .unwrap();

    assert_eq!(
        first,
        PlayOutcome::Started {
            title: "A".to_string()
        }
    );
    assert_eq!(
        second,
        PlayOutcome::Queued {
            title: "B".to_string(),
            position: 1
        }
    );
    assert_eq!(board.published().len(), 1);
}
