use tracing_subscriber::EnvFilter;

use crate::{
    bot,
    config::{BotRole, Config},
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// Defaults to `info` level; set `RUST_LOG` to override (e.g. `RUST_LOG=mt_bots=debug`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the bot selected by the configuration until its gateway connection ends.
pub async fn run(config: Config) -> Result<(), AppError> {
    match config.role {
        BotRole::Manager => bot::start::start_manager(&config).await,
        BotRole::MediaPlayer => bot::start::start_media_player(&config).await,
    }
}
