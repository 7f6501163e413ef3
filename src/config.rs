use std::fmt;

use clap::Parser;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PRESENCE: &str = "I broke the cutting board";
const DEFAULT_YT_DLP_PATH: &str = "yt-dlp";

/// Run a Discord bot
#[derive(Debug, Parser)]
#[command(name = "mt-bots")]
pub struct Cli {
    /// Specifies manager bot
    #[arg(long)]
    pub manager: bool,

    /// Specifies media player bot
    #[arg(long = "media_player", alias = "media-player")]
    pub media_player: bool,

    /// Specifies the token variable name in .env file
    #[arg(long = "token_var", alias = "token-var")]
    pub token_var: String,

    /// Custom status shown by the manager bot
    #[arg(long, default_value = DEFAULT_PRESENCE)]
    pub presence: String,

    /// Media extractor binary used by the media player bot
    #[arg(long, env = "YT_DLP_PATH", default_value = DEFAULT_YT_DLP_PATH)]
    pub yt_dlp_path: String,
}

/// Which bot this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotRole {
    Manager,
    MediaPlayer,
}

impl fmt::Display for BotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manager => write!(f, "manager"),
            Self::MediaPlayer => write!(f, "media player"),
        }
    }
}

pub struct Config {
    pub role: BotRole,
    pub discord_bot_token: String,
    pub presence: String,
    pub yt_dlp_path: String,
}

impl Config {
    /// Builds the configuration from parsed flags and the process environment.
    ///
    /// `.env` must already be loaded so the token variable is visible.
    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        Self::from_lookup(cli, |name| std::env::var(name).ok())
    }

    fn from_lookup(cli: Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let role = match (cli.manager, cli.media_player) {
            (true, false) => BotRole::Manager,
            (false, true) => BotRole::MediaPlayer,
            (false, false) => return Err(ConfigError::MissingRole.into()),
            (true, true) => return Err(ConfigError::ConflictingRoles.into()),
        };

        let discord_bot_token = lookup(&cli.token_var)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(cli.token_var.clone()))?;

        Ok(Self {
            role,
            discord_bot_token,
            presence: cli.presence,
            yt_dlp_path: cli.yt_dlp_path,
        })
    }
}
