use serenity::all::{Context, VoiceState};

use crate::service::{player::PlayerService, voice};

/// Handle voice state changes, tracking only the bot's own connection
///
/// A `None` channel means the bot was disconnected (kicked or the channel deleted);
/// any other value means it joined or was dragged somewhere else.
pub fn handle_voice_state_update(player: &PlayerService, ctx: Context, new: VoiceState) {
    let bot_id = ctx.cache.current_user().id;

    let Some((guild_id, channel_id)) = voice::own_voice_change(&new, bot_id) else {
        return;
    };

    tracing::debug!(
        "Bot voice channel in guild {} is now {:?}",
        guild_id,
        channel_id
    );

    player.voice_moved(guild_id, channel_id);
}
