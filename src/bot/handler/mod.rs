use std::sync::Arc;

use serenity::all::{
    ChannelId, Context, EventHandler, GuildId, Interaction, Member, MessageId, Ready, User,
    VoiceState,
};
use serenity::async_trait;

use crate::service::{player::PlayerService, resolver::MediaResolver};

pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;
pub mod voice;

/// Event handler of the manager bot
pub struct ManagerHandler {
    pub presence: String,
}

impl ManagerHandler {
    pub fn new(presence: String) -> Self {
        Self { presence }
    }
}

#[async_trait]
impl EventHandler for ManagerHandler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_manager_ready(ctx, ready, &self.presence).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(ctx, guild_id, user).await;
    }
}

/// Event handler of the media player bot
pub struct MediaPlayerHandler {
    pub player: PlayerService,
    pub resolver: Arc<dyn MediaResolver>,
}

impl MediaPlayerHandler {
    pub fn new(player: PlayerService, resolver: Arc<dyn MediaResolver>) -> Self {
        Self { player, resolver }
    }
}

#[async_trait]
impl EventHandler for MediaPlayerHandler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_media_player_ready(ctx, ready).await;
    }

    /// Called for slash commands and button presses
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(ctx, interaction, &self.player, self.resolver.as_ref())
            .await;
    }

    /// Called when a member (including the bot) joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, _old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.player, ctx, new);
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        _ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        _guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(&self.player, channel_id, &[deleted_message_id]);
    }

    /// Called when several messages are deleted at once
    async fn message_delete_bulk(
        &self,
        _ctx: Context,
        channel_id: ChannelId,
        multiple_deleted_messages_ids: Vec<MessageId>,
        _guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(&self.player, channel_id, &multiple_deleted_messages_ids);
    }
}
