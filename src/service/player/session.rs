//! Queue and playback state of one guild.
//!
//! `Session` is a plain state machine. It performs no I/O; every transition reports
//! what the caller has to do next (start a track, tear the connection down) and the
//! player worker carries that out.

use std::collections::VecDeque;

use serenity::all::ChannelId;

use crate::model::{
    player::{PlaybackStatus, StatusMessage},
    track::Track,
};

/// What to do after the current track changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Start playing `track`; its end notification must carry `play_id`.
    Play { play_id: u64, track: Track },
    /// Queue ran dry. The session is already idle, release the external resources.
    Exhausted(Teardown),
}

/// External resources a reset has to release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Teardown {
    pub voice_channel: Option<ChannelId>,
    pub status_message: Option<StatusMessage>,
}

#[derive(Debug, Default)]
pub struct Session {
    voice_channel: Option<ChannelId>,
    current: Option<Track>,
    queue: VecDeque<Track>,
    status: PlaybackStatus,
    status_message: Option<StatusMessage>,
    play_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Playing or paused.
    pub fn is_active(&self) -> bool {
        self.status != PlaybackStatus::Idle
    }

    pub fn voice_channel(&self) -> Option<ChannelId> {
        self.voice_channel
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn queue(&self) -> &VecDeque<Track> {
        &self.queue
    }

    pub fn status_message(&self) -> Option<StatusMessage> {
        self.status_message
    }

    pub fn set_status_message(&mut self, message: StatusMessage) {
        self.status_message = Some(message);
    }

    /// Play id of the track currently handed to the transport.
    pub fn play_id(&self) -> u64 {
        self.play_id
    }

    /// Starts an idle session in `channel_id` with `track`.
    ///
    /// The track goes through the queue like any other and is immediately dequeued as
    /// the current track, so the queue is empty afterwards. Calling this on an active
    /// session degrades to `enqueue`.
    pub fn begin(&mut self, channel_id: ChannelId, track: Track) -> Option<Advance> {
        if self.is_active() {
            self.enqueue(track);
            return None;
        }

        self.voice_channel = Some(channel_id);
        self.status = PlaybackStatus::Playing;
        self.queue.push_back(track);

        Some(self.advance())
    }

    /// Appends a track to the tail of the queue.
    ///
    /// # Returns
    /// - 1-based queue position of the appended track
    pub fn enqueue(&mut self, track: Track) -> usize {
        self.queue.push_back(track);
        self.queue.len()
    }

    /// Flips between playing and paused.
    ///
    /// # Returns
    /// - `Some(status)` - The new status
    /// - `None` - The session is idle, nothing changed
    pub fn toggle_pause(&mut self) -> Option<PlaybackStatus> {
        self.status = match self.status {
            PlaybackStatus::Idle => return None,
            PlaybackStatus::Playing => PlaybackStatus::Paused,
            PlaybackStatus::Paused => PlaybackStatus::Playing,
        };

        Some(self.status)
    }

    /// Abandons the current track for the head of the queue.
    ///
    /// With an empty queue this is a stop: the session resets and the teardown is
    /// returned.
    pub fn skip(&mut self) -> Advance {
        if self.is_active() && !self.queue.is_empty() {
            self.status = PlaybackStatus::Playing;
        }

        self.advance()
    }

    /// Handles the transport reporting that track `play_id` ended.
    ///
    /// # Returns
    /// - `Some(advance)` - The current track finished, move on
    /// - `None` - The notification is stale (skipped or stopped track), ignore it
    pub fn finish(&mut self, play_id: u64) -> Option<Advance> {
        if !self.is_active() || play_id != self.play_id {
            return None;
        }

        Some(self.advance())
    }

    /// Moves the session along with the bot when it is dragged to another channel.
    pub fn relocate(&mut self, channel_id: ChannelId) {
        if self.is_active() {
            self.voice_channel = Some(channel_id);
        }
    }

    /// Returns the session to idle.
    ///
    /// Idempotent; resetting an idle session yields an empty teardown.
    pub fn reset(&mut self) -> Teardown {
        let teardown = Teardown {
            voice_channel: self.voice_channel.take(),
            status_message: self.status_message.take(),
        };

        self.current = None;
        self.queue.clear();
        self.status = PlaybackStatus::Idle;

        teardown
    }

    fn advance(&mut self) -> Advance {
        let next = if self.is_active() {
            self.queue.pop_front()
        } else {
            None
        };

        match next {
            Some(track) => {
                self.play_id += 1;
                self.current = Some(track.clone());
                Advance::Play {
                    play_id: self.play_id,
                    track,
                }
            }
            None => Advance::Exhausted(self.reset()),
        }
    }
}
