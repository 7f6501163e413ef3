//! Ready event handlers for bot initialization.
//!
//! The ready event fires once per gateway connection after authentication. Both bots
//! log their identity here; the manager sets its presence and the media player
//! registers its slash commands.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event of the manager bot.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
/// - `presence` - Custom status text
pub async fn handle_manager_ready(ctx: Context, ready: Ready, presence: &str) {
    tracing::info!(
        "{} ({}) is connected to Discord",
        ready.user.name,
        ready.user.id
    );

    ctx.set_activity(Some(ActivityData::custom(presence)));
}

/// Handles the ready event of the media player bot.
///
/// Overwrites the global command list, so a command removed from the code disappears
/// from Discord on the next start.
pub async fn handle_media_player_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} ({}) is connected to Discord",
        ready.user.name,
        ready.user.id
    );

    match Command::set_global_commands(&ctx.http, command::global_commands()).await {
        Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
        Err(e) => tracing::error!("Failed to register global commands: {}", e),
    }
}
