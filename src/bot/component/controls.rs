//! Play/pause, skip and stop buttons on the player panel.

use serenity::all::{ComponentInteraction, Context};

use crate::{
    bot::reply::ReplyTarget,
    error::AppError,
    model::player::{ControlAction, Denial},
    service::{player::PlayerService, voice},
};

/// Handles a press of one of the panel buttons.
///
/// Only members in the bot's voice channel may use the controls; the player worker
/// makes that decision against the session's current channel. The press is
/// acknowledged before the worker is asked, and the outcome replaces the deferral.
pub async fn handle(
    ctx: &Context,
    component: &ComponentInteraction,
    action: ControlAction,
    player: &PlayerService,
) -> Result<(), AppError> {
    let reply = ReplyTarget::from(component);

    let Some(guild_id) = component.guild_id else {
        return reply
            .transient(&ctx.http, Denial::ControlNotInVoice.message())
            .await;
    };

    let caller_channel = voice::caller_voice_channel(&ctx.cache, guild_id, component.user.id);

    reply.defer(&ctx.http).await?;

    let outcome = match player.control(guild_id, action, caller_channel).await {
        Ok(outcome) => outcome,
        Err(e) => {
            reply.discard(&ctx.http).await?;
            return Err(e);
        }
    };

    tracing::debug!(
        "{:?} pressed by {} in guild {}: {:?}",
        action,
        component.user.name,
        guild_id,
        outcome
    );

    reply.edit_transient(&ctx.http, outcome.message()).await
}
