//! Voice channel lookups and permission checks for the media player bot.
//!
//! Voice states and channel overwrites come from the gateway cache, so these checks
//! never hit the HTTP API.

use serenity::all::{Cache, ChannelId, Guild, GuildId, Permissions, UserId, VoiceState};

use crate::model::player::Denial;

/// Returns the voice channel `user_id` is connected to in `guild`.
pub fn voice_channel_of(guild: &Guild, user_id: UserId) -> Option<ChannelId> {
    guild
        .voice_states
        .get(&user_id)
        .and_then(|state| state.channel_id)
}

/// Cached lookup of a member's current voice channel.
pub fn caller_voice_channel(cache: &Cache, guild_id: GuildId, user_id: UserId) -> Option<ChannelId> {
    let guild = cache.guild(guild_id)?;

    voice_channel_of(&guild, user_id)
}

/// Extracts the bot's own voice channel change from a voice state update.
///
/// # Returns
/// - `Some((guild_id, channel_id))` - The update concerns `bot_id`; `None` channel means disconnected
/// - `None` - Someone else's update, or one outside a guild
pub fn own_voice_change(
    state: &VoiceState,
    bot_id: UserId,
) -> Option<(GuildId, Option<ChannelId>)> {
    if state.user_id != bot_id {
        return None;
    }

    state.guild_id.map(|guild_id| (guild_id, state.channel_id))
}

/// Verifies the bot may join and talk in a channel.
///
/// Checked in order: view, connect, speak. The first missing permission is reported.
pub fn check_permissions(permissions: Permissions) -> Result<(), Denial> {
    let required = [
        (Permissions::VIEW_CHANNEL, Denial::MissingViewPermission),
        (Permissions::CONNECT, Denial::MissingConnectPermission),
        (Permissions::SPEAK, Denial::MissingSpeakPermission),
    ];

    match required
        .into_iter()
        .find(|(permission, _)| !permissions.contains(*permission))
    {
        Some((_, denial)) => Err(denial),
        None => Ok(()),
    }
}

/// Decides whether `/play` from `user_id` may proceed.
///
/// # Returns
/// - `Ok(channel_id)` - Caller's voice channel, which the bot is allowed to use
/// - `Err(denial)` - Caller is not in voice or the bot lacks a permission there
pub fn admit_play(cache: &Cache, guild_id: GuildId, user_id: UserId) -> Result<ChannelId, Denial> {
    let bot_id = cache.current_user().id;

    let Some(guild) = cache.guild(guild_id) else {
        tracing::warn!("Guild {} is not cached, cannot locate caller", guild_id);
        return Err(Denial::NotInVoice);
    };

    admit(&guild, bot_id, user_id)
}

/// Admission check against a guild snapshot.
///
/// The caller's voice connection is checked before any permission, so a caller outside
/// voice always gets `NotInVoice`.
pub fn admit(guild: &Guild, bot_id: UserId, user_id: UserId) -> Result<ChannelId, Denial> {
    let channel_id = voice_channel_of(guild, user_id).ok_or(Denial::NotInVoice)?;

    let permissions = match (guild.channels.get(&channel_id), guild.members.get(&bot_id)) {
        (Some(channel), Some(member)) => guild.user_permissions_in(channel, member),
        _ => {
            tracing::debug!(
                "Missing cached channel {} or bot member in guild {}",
                channel_id,
                guild.id
            );
            Permissions::empty()
        }
    };

    check_permissions(permissions)?;

    Ok(channel_id)
}

#[cfg(test)]
mod tests {
    use test_utils::serenity::{create_test_guild, create_test_voice_state, TestVoiceState};

    use super::*;

    #[test]
    fn finds_member_voice_channel() {
        let guild = create_test_guild(
            1,
            "Test Guild",
            &[
                TestVoiceState::new(42, Some(10)),
                TestVoiceState::new(43, Some(11)),
            ],
        );

        assert_eq!(
            voice_channel_of(&guild, UserId::new(42)),
            Some(ChannelId::new(10))
        );
        assert_eq!(
            voice_channel_of(&guild, UserId::new(43)),
            Some(ChannelId::new(11))
        );
    }

    #[test]
    fn member_outside_voice_has_no_channel() {
        let guild = create_test_guild(1, "Test Guild", &[TestVoiceState::new(42, Some(10))]);

        assert_eq!(voice_channel_of(&guild, UserId::new(7)), None);
    }

    #[test]
    fn tracks_only_the_bots_own_voice_state() {
        let bot_id = UserId::new(99);

        let moved = create_test_voice_state(1, 99, Some(11));
        assert_eq!(
            own_voice_change(&moved, bot_id),
            Some((GuildId::new(1), Some(ChannelId::new(11))))
        );

        let disconnected = create_test_voice_state(1, 99, None);
        assert_eq!(
            own_voice_change(&disconnected, bot_id),
            Some((GuildId::new(1), None))
        );

        let someone_else = create_test_voice_state(1, 42, None);
        assert_eq!(own_voice_change(&someone_else, bot_id), None);
    }

    #[test]
    fn caller_outside_voice_is_denied_before_permissions() {
        // Bot sits in voice, caller does not
        let guild = create_test_guild(1, "Test Guild", &[TestVoiceState::new(99, Some(10))]);

        assert_eq!(
            admit(&guild, UserId::new(99), UserId::new(42)),
            Err(Denial::NotInVoice)
        );
    }

    #[test]
    fn unknown_voice_channel_is_not_viewable() {
        let guild = create_test_guild(1, "Test Guild", &[TestVoiceState::new(42, Some(10))]);

        assert_eq!(
            admit(&guild, UserId::new(99), UserId::new(42)),
            Err(Denial::MissingViewPermission)
        );
    }

    #[test]
    fn accepts_full_voice_permissions() {
        let permissions = Permissions::VIEW_CHANNEL | Permissions::CONNECT | Permissions::SPEAK;

        assert_eq!(check_permissions(permissions), Ok(()));
    }

    #[test]
    fn reports_first_missing_permission() {
        assert_eq!(
            check_permissions(Permissions::empty()),
            Err(Denial::MissingViewPermission)
        );
        assert_eq!(
            check_permissions(Permissions::VIEW_CHANNEL | Permissions::SPEAK),
            Err(Denial::MissingConnectPermission)
        );
        assert_eq!(
            check_permissions(Permissions::VIEW_CHANNEL | Permissions::CONNECT),
            Err(Denial::MissingSpeakPermission)
        );
    }
}
