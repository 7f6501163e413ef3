//! Test factory for creating Serenity VoiceState objects.
//!
//! Voice states tell the bots which voice channel a member is connected to. The
//! factories here produce them both standalone (as delivered by `voice_state_update`)
//! and as JSON for embedding in a guild payload.

use serde_json::Value;
use serenity::all::VoiceState;

/// Minimal description of a member's voice connection.
#[derive(Debug, Clone, Copy)]
pub struct TestVoiceState {
    /// Discord user ID of the member
    pub user_id: u64,
    /// Voice channel the member is connected to, `None` when disconnected
    pub channel_id: Option<u64>,
}

impl TestVoiceState {
    pub fn new(user_id: u64, channel_id: Option<u64>) -> Self {
        Self {
            user_id,
            channel_id,
        }
    }

    /// Builds the gateway JSON for this voice state.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the voice state belongs to
    pub fn to_json(&self, guild_id: u64) -> Value {
        serde_json::json!({
            "guild_id": guild_id.to_string(),
            "channel_id": self.channel_id.map(|id| id.to_string()),
            "user_id": self.user_id.to_string(),
            "session_id": format!("session-{}", self.user_id),
            "deaf": false,
            "mute": false,
            "self_deaf": false,
            "self_mute": false,
            "self_stream": false,
            "self_video": false,
            "suppress": false,
            "request_to_speak_timestamp": null,
        })
    }
}

/// Creates a test Serenity VoiceState.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `user_id` - Discord user ID of the member
/// - `channel_id` - Voice channel ID, `None` for a disconnect
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(guild_id: u64, user_id: u64, channel_id: Option<u64>) -> VoiceState {
    serde_json::from_value(TestVoiceState::new(user_id, channel_id).to_json(guild_id))
        .expect("Failed to create test voice state - invalid JSON structure")
}
