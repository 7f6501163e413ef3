//! Test factory for creating Serenity Guild objects.
//!
//! This module provides factory functions for creating mock Serenity `Guild` structs
//! for testing purposes. These factories create valid Guild objects by deserializing
//! JSON, simulating what Discord's gateway would send in `GUILD_CREATE`.

use serenity::all::Guild;

use super::voice_state::TestVoiceState;

/// Creates a test Serenity Guild with the given members connected to voice.
///
/// Creates a Guild object by deserializing JSON with the provided values. Every entry
/// in `voice_states` becomes a cached voice state, which is how the bots learn which
/// voice channel a member is sitting in. All other fields are set to reasonable defaults.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `voice_states` - Members currently connected to voice channels
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_guild, TestVoiceState};
///
/// // Guild with nobody in voice
/// let guild = create_test_guild(123456789, "Test Guild", &[]);
///
/// // Guild where user 42 sits in voice channel 10
/// let guild = create_test_guild(123456789, "Test Guild", &[TestVoiceState::new(42, Some(10))]);
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, voice_states: &[TestVoiceState]) -> Guild {
    let voice_states: Vec<_> = voice_states
        .iter()
        .map(|state| state.to_json(guild_id))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_id": null,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": voice_states,
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
