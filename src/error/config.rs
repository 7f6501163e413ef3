use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `--manager` nor `--media_player` was passed.
    #[error("You must specify either --manager or --media_player")]
    MissingRole,

    /// Both role flags were passed; a process runs exactly one bot.
    #[error("Specify only one of --manager or --media_player")]
    ConflictingRoles,

    /// Required environment variable is not set.
    ///
    /// The bot token is read from the variable named by `--token_var`. Check the
    /// `.env` file for the expected variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
