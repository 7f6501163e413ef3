use std::collections::HashMap;

use serenity::all::{ChannelId, GuildId, MessageId};
use tokio::sync::mpsc;

use crate::{
    error::AppError,
    model::{
        player::{ControlAction, ControlOutcome, Denial, PlayOutcome, PlaybackStatus},
        track::Track,
    },
};

use super::{
    board::StatusBoard,
    display,
    session::{Advance, Session, Teardown},
    transport::VoiceTransport,
    PlayerEvent,
};

/// Single consumer of `PlayerEvent`s, owning every guild's session.
///
/// Only guilds with an active session have an entry in `sessions`; a reset removes it.
pub struct PlayerWorker<T, B> {
    inbox: mpsc::UnboundedReceiver<PlayerEvent>,
    transport: T,
    board: B,
    sessions: HashMap<GuildId, Session>,
}

impl<T: VoiceTransport, B: StatusBoard> PlayerWorker<T, B> {
    pub fn new(inbox: mpsc::UnboundedReceiver<PlayerEvent>, transport: T, board: B) -> Self {
        Self {
            inbox,
            transport,
            board,
            sessions: HashMap::new(),
        }
    }

    /// Processes events until every `PlayerService` handle has been dropped.
    pub async fn run(mut self) {
        tracing::debug!("Player worker started");

        while let Some(event) = self.inbox.recv().await {
            self.handle(event).await;
        }

        tracing::debug!("Player worker stopped");
    }

    pub(crate) fn session(&self, guild_id: GuildId) -> Option<&Session> {
        self.sessions.get(&guild_id)
    }

    pub(crate) async fn handle(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::IsActive { guild_id, reply } => {
                let _ = reply.send(self.is_active(guild_id));
            }
            PlayerEvent::Play {
                guild_id,
                channel_id,
                track,
                text_channel,
                reply,
            } => {
                let outcome = self.play(guild_id, channel_id, track, text_channel).await;
                let _ = reply.send(outcome);
            }
            PlayerEvent::Control {
                guild_id,
                action,
                caller_channel,
                reply,
            } => {
                let outcome = self.control(guild_id, action, caller_channel).await;
                let _ = reply.send(outcome);
            }
            PlayerEvent::TrackEnded { guild_id, play_id } => {
                self.track_ended(guild_id, play_id).await;
            }
            PlayerEvent::VoiceMoved {
                guild_id,
                channel_id,
            } => {
                self.voice_moved(guild_id, channel_id).await;
            }
            PlayerEvent::MessageDeleted {
                channel_id,
                message_id,
            } => {
                self.message_deleted(channel_id, message_id).await;
            }
        }
    }

    fn is_active(&self, guild_id: GuildId) -> bool {
        self.sessions
            .get(&guild_id)
            .is_some_and(Session::is_active)
    }

    async fn play(
        &mut self,
        guild_id: GuildId,
        channel_id: ChannelId,
        track: Track,
        text_channel: ChannelId,
    ) -> Result<PlayOutcome, AppError> {
        let title = track.title.clone();
        let uploader = track.uploader.clone();

        if let Some(session) = self.sessions.get_mut(&guild_id).filter(|s| s.is_active()) {
            let position = session.enqueue(track);
            tracing::debug!("Queued '{}' at position {} in guild {}", title, position, guild_id);

            self.refresh(guild_id).await;

            return Ok(PlayOutcome::Queued { title, position });
        }

        if let Err(e) = self.transport.connect(guild_id, channel_id).await {
            if let Err(cleanup) = self.transport.disconnect(guild_id).await {
                tracing::warn!("Failed to clean up voice connection: {}", cleanup);
            }
            return Err(e);
        }

        let session = self.sessions.entry(guild_id).or_default();
        let Some(advance) = session.begin(channel_id, track) else {
            return Err(AppError::InternalError(format!(
                "Session in guild {} was already active",
                guild_id
            )));
        };

        let view = display::render(session);
        match self.board.publish(text_channel, &view).await {
            Ok(message) => session.set_status_message(message),
            Err(e) => {
                tracing::error!("Failed to publish player panel in guild {}: {}", guild_id, e);
                self.reset(guild_id).await;
                return Err(e);
            }
        }

        if !self.start(guild_id, advance).await {
            return Err(AppError::InternalError(format!(
                "Playback of '{}' in guild {} failed to start",
                title, guild_id
            )));
        }

        tracing::info!(
            "Started playback of '{}' by {} in guild {}",
            title,
            uploader,
            guild_id
        );

        Ok(PlayOutcome::Started { title })
    }

    async fn control(
        &mut self,
        guild_id: GuildId,
        action: ControlAction,
        caller_channel: Option<ChannelId>,
    ) -> ControlOutcome {
        let Some(caller_channel) = caller_channel else {
            return ControlOutcome::Denied(Denial::ControlNotInVoice);
        };

        let Some(session) = self
            .sessions
            .get_mut(&guild_id)
            .filter(|s| s.is_active() && s.voice_channel() == Some(caller_channel))
        else {
            return ControlOutcome::Denied(Denial::ControlWrongChannel);
        };

        match action {
            ControlAction::TogglePause => {
                let outcome = match session.toggle_pause() {
                    Some(PlaybackStatus::Paused) => {
                        if let Err(e) = self.transport.pause(guild_id).await {
                            tracing::warn!("Failed to pause playback in guild {}: {}", guild_id, e);
                        }
                        ControlOutcome::Paused
                    }
                    _ => {
                        if let Err(e) = self.transport.resume(guild_id).await {
                            tracing::warn!("Failed to resume playback in guild {}: {}", guild_id, e);
                        }
                        ControlOutcome::Resumed
                    }
                };

                self.refresh(guild_id).await;
                outcome
            }
            ControlAction::Skip => match session.skip() {
                advance @ Advance::Play { .. } => {
                    if !self.start(guild_id, advance).await {
                        return ControlOutcome::Stopped;
                    }
                    self.refresh(guild_id).await;
                    ControlOutcome::Skipped
                }
                Advance::Exhausted(teardown) => {
                    self.teardown(guild_id, teardown).await;
                    ControlOutcome::Exhausted
                }
            },
            ControlAction::Stop => {
                self.reset(guild_id).await;
                ControlOutcome::Stopped
            }
        }
    }

    async fn track_ended(&mut self, guild_id: GuildId, play_id: u64) {
        let Some(session) = self.sessions.get_mut(&guild_id) else {
            return;
        };

        match session.finish(play_id) {
            Some(advance @ Advance::Play { .. }) => {
                if self.start(guild_id, advance).await {
                    self.refresh(guild_id).await;
                }
            }
            Some(Advance::Exhausted(teardown)) => {
                tracing::info!("Queue finished in guild {}", guild_id);
                self.teardown(guild_id, teardown).await;
            }
            None => {
                tracing::debug!("Ignoring stale end of play {} in guild {}", play_id, guild_id);
            }
        }
    }

    async fn voice_moved(&mut self, guild_id: GuildId, channel_id: Option<ChannelId>) {
        match channel_id {
            Some(channel_id) => {
                if let Some(session) = self.sessions.get_mut(&guild_id) {
                    session.relocate(channel_id);
                }
            }
            None => {
                if self.is_active(guild_id) {
                    tracing::info!("Disconnected from voice in guild {}, resetting", guild_id);
                    self.reset(guild_id).await;
                }
            }
        }
    }

    async fn message_deleted(&mut self, channel_id: ChannelId, message_id: MessageId) {
        let guild_id = self.sessions.iter().find_map(|(guild_id, session)| {
            session
                .status_message()
                .filter(|m| m.channel_id == channel_id && m.message_id == message_id)
                .map(|_| *guild_id)
        });

        if let Some(guild_id) = guild_id {
            tracing::info!("Player panel deleted in guild {}, resetting", guild_id);
            self.reset(guild_id).await;
        }
    }

    /// Hands the next track to the transport, resetting when it cannot be played.
    ///
    /// # Returns
    /// - `true` - The track is playing
    /// - `false` - The session was torn down instead
    async fn start(&mut self, guild_id: GuildId, advance: Advance) -> bool {
        match advance {
            Advance::Play { play_id, track } => {
                match self.transport.play(guild_id, &track, play_id).await {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::error!("Failed to play '{}' in guild {}: {}", track.title, guild_id, e);
                        self.reset(guild_id).await;
                        false
                    }
                }
            }
            Advance::Exhausted(teardown) => {
                self.teardown(guild_id, teardown).await;
                false
            }
        }
    }

    /// Re-renders the panel, resetting when the message was deleted externally.
    async fn refresh(&mut self, guild_id: GuildId) {
        let Some(session) = self.sessions.get(&guild_id) else {
            return;
        };
        let Some(message) = session.status_message() else {
            return;
        };
        let view = display::render(session);

        match self.board.update(&message, &view).await {
            Ok(()) => {}
            Err(AppError::NotFound(_)) => {
                tracing::info!("Player panel in guild {} is gone, resetting", guild_id);
                self.reset(guild_id).await;
            }
            Err(e) => tracing::warn!("Failed to update player panel in guild {}: {}", guild_id, e),
        }
    }

    /// Full reset of a guild's session. Safe to call in any state.
    async fn reset(&mut self, guild_id: GuildId) {
        let teardown = self
            .sessions
            .get_mut(&guild_id)
            .map(Session::reset)
            .unwrap_or_default();

        self.teardown(guild_id, teardown).await;
    }

    /// Releases the external resources of a session that has just gone idle.
    async fn teardown(&mut self, guild_id: GuildId, teardown: Teardown) {
        self.sessions.remove(&guild_id);

        if let Err(e) = self.transport.disconnect(guild_id).await {
            tracing::warn!("Failed to leave voice in guild {}: {}", guild_id, e);
        }

        if let Some(message) = teardown.status_message {
            if let Err(e) = self.board.remove(&message).await {
                tracing::warn!("Failed to delete player panel in guild {}: {}", guild_id, e);
            }
        }

        tracing::debug!("Session in guild {} reset", guild_id);
    }
}
