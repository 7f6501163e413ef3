use super::*;
use crate::{
    model::player::PlaybackStatus,
    service::player::session::{Advance, Session, Teardown},
};

fn playing(titles: &[&str]) -> Session {
    let mut session = Session::new();
    let mut titles = titles.iter();

    if let Some(first) = titles.next() {
        session.begin(VOICE, track(first));
    }
    for title in titles {
        session.enqueue(track(title));
    }

    session
}

/// Tests the first track of an idle session.
///
/// Verifies that beginning a session dequeues the track straight into the current slot
/// and marks the session as playing in the requested channel.
///
/// Expected: Playing, current = A, queue empty
#[test]
fn begin_moves_first_track_to_current() {
    let mut session = Session::new();

    let advance = session.begin(VOICE, track("A"));

    assert_eq!(
        advance,
        Some(Advance::Play {
            play_id: 1,
            track: track("A")
        })
    );
    assert_eq!(session.status(), PlaybackStatus::Playing);
    assert_eq!(session.current(), Some(&track("A")));
    assert!(session.queue().is_empty());
    assert_eq!(session.voice_channel(), Some(VOICE));
}

/// Tests that begin on an active session only queues.
///
/// Expected: None, track appended
#[test]
fn begin_on_active_session_enqueues() {
    let mut session = playing(&["A"]);

    assert_eq!(session.begin(OTHER_VOICE, track("B")), None);
    assert_eq!(session.current(), Some(&track("A")));
    assert_eq!(session.queue().len(), 1);
    assert_eq!(session.voice_channel(), Some(VOICE));
}

/// Tests FIFO order of the queue.
///
/// Expected: tracks come out in the order they were queued
#[test]
fn plays_queue_in_fifo_order() {
    let mut session = playing(&["A", "B", "C", "D"]);

    let mut played = Vec::new();
    while let Some(Advance::Play { play_id, track }) = session.finish(session.play_id()) {
        assert_eq!(play_id, session.play_id());
        played.push(track.title);
    }

    assert_eq!(played, vec!["B", "C", "D"]);
    assert_eq!(session.status(), PlaybackStatus::Idle);
}

/// Tests the play/pause toggle.
///
/// Expected: Playing -> Paused -> Playing, idle sessions are untouched
#[test]
fn toggles_between_playing_and_paused() {
    let mut session = playing(&["A"]);

    assert_eq!(session.toggle_pause(), Some(PlaybackStatus::Paused));
    assert_eq!(session.toggle_pause(), Some(PlaybackStatus::Playing));

    let mut idle = Session::new();
    assert_eq!(idle.toggle_pause(), None);
    assert_eq!(idle.status(), PlaybackStatus::Idle);
}

/// Tests skipping a paused session with a queued track.
///
/// Expected: next track current, status back to Playing
#[test]
fn skip_from_paused_resumes_with_next_track() {
    let mut session = playing(&["A", "B"]);
    session.toggle_pause();

    let advance = session.skip();

    assert!(matches!(advance, Advance::Play { ref track, .. } if track.title == "B"));
    assert_eq!(session.status(), PlaybackStatus::Playing);
    assert!(session.queue().is_empty());
}

/// Tests that skip with an empty queue behaves like stop.
///
/// Expected: Exhausted with the same teardown a reset produces, session idle
#[test]
fn skip_with_empty_queue_is_stop() {
    let message = StatusMessage {
        channel_id: TEXT,
        message_id: MessageId::new(5),
    };

    let mut skipped = playing(&["A"]);
    skipped.set_status_message(message);
    let mut stopped = playing(&["A"]);
    stopped.set_status_message(message);

    let expected = Teardown {
        voice_channel: Some(VOICE),
        status_message: Some(message),
    };
    assert_eq!(skipped.skip(), Advance::Exhausted(expected));
    assert_eq!(stopped.reset(), expected);
    assert_eq!(skipped.status(), stopped.status());
    assert_eq!(skipped.current(), None);
}

/// Tests that stale end notifications are ignored.
///
/// A track replaced by skip still reports its end; that must not advance the queue
/// a second time.
///
/// Expected: None for the old play id
#[test]
fn ignores_stale_track_end() {
    let mut session = playing(&["A", "B", "C"]);
    let first = session.play_id();
    session.skip();

    assert_eq!(session.finish(first), None);
    assert_eq!(session.current(), Some(&track("B")));
    assert_eq!(session.queue().len(), 1);
}

/// Tests that reset is idempotent.
///
/// Expected: second reset yields an empty teardown and the same idle state
#[test]
fn reset_is_idempotent() {
    let mut session = playing(&["A", "B"]);

    let first = session.reset();
    let second = session.reset();

    assert_eq!(first.voice_channel, Some(VOICE));
    assert_eq!(second, Teardown::default());
    assert_eq!(session.status(), PlaybackStatus::Idle);
    assert_eq!(session.current(), None);
    assert!(session.queue().is_empty());
    assert_eq!(session.voice_channel(), None);
}

/// Tests following the bot to a new channel.
///
/// Expected: active sessions move, idle sessions stay unbound
#[test]
fn relocates_only_active_sessions() {
    let mut session = playing(&["A"]);
    session.relocate(OTHER_VOICE);
    assert_eq!(session.voice_channel(), Some(OTHER_VOICE));

    let mut idle = Session::new();
    idle.relocate(OTHER_VOICE);
    assert_eq!(idle.voice_channel(), None);
}
