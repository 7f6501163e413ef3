use std::process::ExitStatus;
use thiserror::Error;

/// Failures while turning a user query into a playable track.
///
/// Every variant is shown to the user as the same "no media found" reply.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The extractor binary could not be started.
    #[error("Failed to run media extractor '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The extractor ran but reported a failure.
    #[error("Media extractor exited with {status}: {stderr}")]
    Extractor {
        /// Exit status of the extractor process
        status: ExitStatus,
        /// Trimmed standard error output
        stderr: String,
    },

    /// The extractor output was not the expected JSON.
    #[error("Failed to parse media extractor output: {0}")]
    Parse(#[from] serde_json::Error),

    /// The search returned zero results.
    #[error("No media found for '{0}'")]
    NoResults(String),

    /// A result was found but it carries no stream URL.
    #[error("No playable stream found for '{0}'")]
    NoPlayableUrl(String),
}

impl ResolveError {
    /// True for outcomes caused by the query itself rather than the backend.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoResults(_) | Self::NoPlayableUrl(_))
    }
}
