//! Error types for both bots.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Errors that
//! reach an event handler are logged there; errors during startup abort the process.

pub mod config;
pub mod resolve;

use serenity::http::HttpError;
use thiserror::Error;

use crate::error::{config::ConfigError, resolve::ResolveError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion so `?` works across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, the process does not start.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Media extraction failed or yielded nothing playable.
    #[error(transparent)]
    ResolveErr(#[from] ResolveError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Joining or leaving a voice channel failed.
    #[error(transparent)]
    JoinErr(#[from] songbird::error::JoinError),

    /// Pausing, resuming or subscribing to a playing track failed.
    #[error(transparent)]
    TrackErr(#[from] songbird::tracks::ControlError),

    /// External resource is already gone.
    ///
    /// Raised for deleted status messages and missing voice connections. Reset paths
    /// treat it as a normal outcome rather than a failure.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts a Discord error, mapping 404 responses to `NotFound`.
    ///
    /// # Arguments
    /// - `err` - Error returned by a Discord HTTP call
    /// - `what` - Description of the resource the call targeted
    pub fn from_discord(err: serenity::Error, what: impl Into<String>) -> Self {
        if is_discord_not_found(&err) {
            AppError::NotFound(format!("{} no longer exists", what.into()))
        } else {
            AppError::from(err)
        }
    }
}

/// Returns true when Discord answered a request with 404 Not Found.
pub fn is_discord_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}
