use serenity::all::{ChannelId, MessageId};

use crate::service::player::PlayerService;

/// Handle single and bulk message deletion
///
/// The player worker ignores every id except its own panel, so all deletions are
/// forwarded without filtering.
pub fn handle_message_delete(player: &PlayerService, channel_id: ChannelId, message_ids: &[MessageId]) {
    for message_id in message_ids {
        player.message_deleted(channel_id, *message_id);
    }
}
