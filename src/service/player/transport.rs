//! Voice transport used by the player worker.
//!
//! The worker only talks to `VoiceTransport`; the songbird implementation owns the
//! actual voice connections and track handles.

use std::{collections::HashMap, sync::Arc};

use serenity::{
    all::{ChannelId, GuildId},
    async_trait,
};
use songbird::{
    error::JoinError,
    input::{HttpRequest, Input},
    tracks::TrackHandle,
    Event, EventContext, EventHandler as SongbirdEventHandler, Songbird, TrackEvent,
};
use tokio::sync::Mutex;

use crate::{error::AppError, model::track::Track};

use super::PlayerService;

#[async_trait]
pub trait VoiceTransport: Send + Sync {
    /// Joins `channel_id`, establishing the guild's voice connection.
    async fn connect(&self, guild_id: GuildId, channel_id: ChannelId) -> Result<(), AppError>;

    /// Replaces whatever is playing with `track`.
    ///
    /// The end of the track must be reported back as `TrackEnded { play_id }`.
    async fn play(&self, guild_id: GuildId, track: &Track, play_id: u64) -> Result<(), AppError>;

    async fn pause(&self, guild_id: GuildId) -> Result<(), AppError>;

    async fn resume(&self, guild_id: GuildId) -> Result<(), AppError>;

    /// Stops output and leaves the channel. Succeeds when already disconnected.
    async fn disconnect(&self, guild_id: GuildId) -> Result<(), AppError>;
}

/// Voice transport backed by songbird.
pub struct SongbirdTransport {
    manager: Arc<Songbird>,
    http_client: reqwest::Client,
    events: PlayerService,
    tracks: Mutex<HashMap<GuildId, TrackHandle>>,
}

impl SongbirdTransport {
    /// # Arguments
    /// - `manager` - Songbird instance registered on the Serenity client
    /// - `http_client` - Client used to stream track audio
    /// - `events` - Player handle receiving track end notifications
    pub fn new(manager: Arc<Songbird>, http_client: reqwest::Client, events: PlayerService) -> Self {
        Self {
            manager,
            http_client,
            events,
            tracks: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl VoiceTransport for SongbirdTransport {
    async fn connect(&self, guild_id: GuildId, channel_id: ChannelId) -> Result<(), AppError> {
        self.manager.join(guild_id, channel_id).await?;

        tracing::info!("Joined voice channel {} in guild {}", channel_id, guild_id);

        Ok(())
    }

    async fn play(&self, guild_id: GuildId, track: &Track, play_id: u64) -> Result<(), AppError> {
        let call = self.manager.get(guild_id).ok_or_else(|| {
            AppError::NotFound(format!("No voice connection for guild {}", guild_id))
        })?;

        let input: Input = HttpRequest::new(self.http_client.clone(), track.url.clone()).into();
        let handle = call.lock().await.play_only_input(input);

        let notifier = TrackEndNotifier {
            guild_id,
            play_id,
            events: self.events.clone(),
        };
        handle.add_event(Event::Track(TrackEvent::End), notifier.clone())?;
        handle.add_event(Event::Track(TrackEvent::Error), notifier)?;

        self.tracks.lock().await.insert(guild_id, handle);

        tracing::debug!(
            "Playing '{}' ({}s) in guild {} (play {})",
            track.title,
            track.duration.unwrap_or_default(),
            guild_id,
            play_id
        );

        Ok(())
    }

    async fn pause(&self, guild_id: GuildId) -> Result<(), AppError> {
        if let Some(handle) = self.tracks.lock().await.get(&guild_id) {
            handle.pause()?;
        }

        Ok(())
    }

    async fn resume(&self, guild_id: GuildId) -> Result<(), AppError> {
        if let Some(handle) = self.tracks.lock().await.get(&guild_id) {
            handle.play()?;
        }

        Ok(())
    }

    async fn disconnect(&self, guild_id: GuildId) -> Result<(), AppError> {
        if let Some(handle) = self.tracks.lock().await.remove(&guild_id) {
            // Track may already have finished on its own
            let _ = handle.stop();
        }

        match self.manager.remove(guild_id).await {
            Ok(()) | Err(JoinError::NoCall) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Forwards songbird's end/error notification of one track into the player queue.
#[derive(Clone)]
struct TrackEndNotifier {
    guild_id: GuildId,
    play_id: u64,
    events: PlayerService,
}

#[async_trait]
impl SongbirdEventHandler for TrackEndNotifier {
    async fn act(&self, _ctx: &EventContext<'_>) -> Option<Event> {
        self.events.track_ended(self.guild_id, self.play_id);

        None
    }
}
