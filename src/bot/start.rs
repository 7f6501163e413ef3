use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use songbird::{SerenityInit, Songbird};

use crate::{
    bot::handler::{ManagerHandler, MediaPlayerHandler},
    config::Config,
    error::AppError,
    service::{
        player::{
            board::DiscordStatusBoard, transport::SongbirdTransport, PlayerService, PlayerWorker,
        },
        resolver::YtDlpResolver,
    },
};

/// Runs the manager bot until the gateway connection ends.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if client construction or the gateway connection fails
pub async fn start_manager(config: &Config) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = ManagerHandler::new(config.presence.clone());

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

/// Runs the media player bot until the gateway connection ends.
///
/// Registers songbird on the client and spawns the player worker before connecting,
/// so the first `/play` finds both ready.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if client construction or the gateway connection fails
pub async fn start_media_player(config: &Config) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGES;

    let songbird = Songbird::serenity();
    let (player, inbox) = PlayerService::channel();
    let resolver = Arc::new(YtDlpResolver::new(config.yt_dlp_path.clone()));

    let handler = MediaPlayerHandler::new(player.clone(), resolver);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .register_songbird_with(songbird.clone())
        .await?;

    let transport = SongbirdTransport::new(songbird, reqwest::Client::new(), player);
    let board = DiscordStatusBoard::new(client.http.clone());
    tokio::spawn(PlayerWorker::new(inbox, transport, board).run());

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
