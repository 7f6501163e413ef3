//! Media playback for the media player bot.
//!
//! All playback state lives in a single `PlayerWorker` task that owns one `Session` per
//! guild and consumes `PlayerEvent`s from one channel. Slash commands, button presses,
//! gateway events and songbird's track-end callbacks are all funnelled through that
//! channel, so every transition runs to completion before the next one starts even
//! though it awaits Discord or the voice transport in between.
//!
//! - `session` - Pure queue/playback state machine
//! - `display` - Pure rendering of the player panel
//! - `transport` - Voice connection seam (songbird)
//! - `board` - Player panel message seam (Discord)
//! - `worker` - The event loop applying transitions and their side effects

pub mod board;
pub mod display;
pub mod session;
pub mod transport;
pub mod worker;

#[cfg(test)]
mod test;

use serenity::all::{ChannelId, GuildId, MessageId};
use tokio::sync::{mpsc, oneshot};

use crate::{
    error::AppError,
    model::{
        player::{ControlAction, ControlOutcome, Denial, PlayOutcome},
        track::Track,
    },
    service::resolver::MediaResolver,
};

pub use worker::PlayerWorker;

/// Inputs of the player worker.
#[derive(Debug)]
pub enum PlayerEvent {
    /// Asks whether the guild has a playing or paused session.
    IsActive {
        guild_id: GuildId,
        reply: oneshot::Sender<bool>,
    },
    /// Starts a session with `track`, or queues it when one is running.
    Play {
        guild_id: GuildId,
        channel_id: ChannelId,
        track: Track,
        text_channel: ChannelId,
        reply: oneshot::Sender<Result<PlayOutcome, AppError>>,
    },
    /// A panel button was pressed by a member in `caller_channel`.
    Control {
        guild_id: GuildId,
        action: ControlAction,
        caller_channel: Option<ChannelId>,
        reply: oneshot::Sender<ControlOutcome>,
    },
    /// The transport finished (or failed) playing track `play_id`.
    TrackEnded { guild_id: GuildId, play_id: u64 },
    /// The bot's own voice state changed; `None` means it was disconnected.
    VoiceMoved {
        guild_id: GuildId,
        channel_id: Option<ChannelId>,
    },
    /// A message was deleted somewhere.
    MessageDeleted {
        channel_id: ChannelId,
        message_id: MessageId,
    },
}

/// Cloneable handle for sending events to the player worker.
#[derive(Clone, Debug)]
pub struct PlayerService {
    events: mpsc::UnboundedSender<PlayerEvent>,
}

impl PlayerService {
    /// Creates the handle together with the receiving end for `PlayerWorker`.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PlayerEvent>) {
        let (events, inbox) = mpsc::unbounded_channel();

        (Self { events }, inbox)
    }

    pub async fn is_active(&self, guild_id: GuildId) -> Result<bool, AppError> {
        let (reply, response) = oneshot::channel();
        self.send(PlayerEvent::IsActive { guild_id, reply })?;

        response.await.map_err(|_| Self::stopped())
    }

    /// Plays `track` in `channel_id`, or queues it behind the running session.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was invoked in
    /// - `channel_id` - Caller's voice channel, joined when a session starts
    /// - `track` - Resolved media
    /// - `text_channel` - Channel the player panel is posted in when a session starts
    ///
    /// # Returns
    /// - `Err(AppError)` - The session could not be started; the guild is idle again
    pub async fn play(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        track: Track,
        text_channel: ChannelId,
    ) -> Result<PlayOutcome, AppError> {
        let (reply, response) = oneshot::channel();
        self.send(PlayerEvent::Play {
            guild_id,
            channel_id,
            track,
            text_channel,
            reply,
        })?;

        response.await.map_err(|_| Self::stopped())?
    }

    /// Resolves `query` and plays or queues the result.
    ///
    /// Resolution runs on the caller's task, so a slow extractor never holds up other
    /// guilds. A query that yields nothing playable is denied without reaching the
    /// worker.
    pub async fn play_query(
        &self,
        resolver: &dyn MediaResolver,
        guild_id: GuildId,
        channel_id: ChannelId,
        text_channel: ChannelId,
        query: &str,
    ) -> Result<PlayOutcome, AppError> {
        let track = match resolver.resolve(query).await {
            Ok(track) => track,
            Err(e) => {
                if e.is_empty_result() {
                    tracing::debug!("No media found for '{}': {}", query, e);
                } else {
                    tracing::error!("Failed to resolve '{}': {}", query, e);
                }
                return Ok(PlayOutcome::Denied(Denial::NoMediaFound));
            }
        };

        self.play(guild_id, channel_id, track, text_channel).await
    }

    pub async fn control(
        &self,
        guild_id: GuildId,
        action: ControlAction,
        caller_channel: Option<ChannelId>,
    ) -> Result<ControlOutcome, AppError> {
        let (reply, response) = oneshot::channel();
        self.send(PlayerEvent::Control {
            guild_id,
            action,
            caller_channel,
            reply,
        })?;

        response.await.map_err(|_| Self::stopped())
    }

    pub fn track_ended(&self, guild_id: GuildId, play_id: u64) {
        self.notify(PlayerEvent::TrackEnded { guild_id, play_id });
    }

    pub fn voice_moved(&self, guild_id: GuildId, channel_id: Option<ChannelId>) {
        self.notify(PlayerEvent::VoiceMoved {
            guild_id,
            channel_id,
        });
    }

    pub fn message_deleted(&self, channel_id: ChannelId, message_id: MessageId) {
        self.notify(PlayerEvent::MessageDeleted {
            channel_id,
            message_id,
        });
    }

    fn send(&self, event: PlayerEvent) -> Result<(), AppError> {
        self.events.send(event).map_err(|_| Self::stopped())
    }

    fn notify(&self, event: PlayerEvent) {
        if self.send(event).is_err() {
            tracing::warn!("Dropped player event, worker is not running");
        }
    }

    fn stopped() -> AppError {
        AppError::InternalError("Player worker is not running".to_string())
    }
}
