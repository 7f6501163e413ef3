//! Turns a `/play` query into a playable track using `yt-dlp`.

use std::process::Stdio;

use serenity::async_trait;
use tokio::process::Command;
use url::Url;

use crate::{
    error::resolve::ResolveError,
    model::track::{MediaInfo, Track},
};

const UNKNOWN_TITLE: &str = "Unknown title";
const UNKNOWN_UPLOADER: &str = "Unknown";

/// Looks up media for a user query.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Resolves a URL or free-text search to its first playable result.
    async fn resolve(&self, query: &str) -> Result<Track, ResolveError>;
}

/// Resolver backed by the `yt-dlp` command line tool.
pub struct YtDlpResolver {
    program: String,
}

impl YtDlpResolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn extract(&self, target: &str) -> Result<MediaInfo, ResolveError> {
        let output = Command::new(&self.program)
            .args([
                "-J",
                "--no-playlist",
                "-f",
                "bestaudio/best",
                "--quiet",
                "--no-warnings",
                target,
            ])
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ResolveError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ResolveError::Extractor {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

#[async_trait]
impl MediaResolver for YtDlpResolver {
    async fn resolve(&self, query: &str) -> Result<Track, ResolveError> {
        let target = search_target(query);
        tracing::debug!("Resolving '{}' as '{}'", query, target);

        let info = self.extract(&target).await?;

        track_from_info(query, info)
    }
}

/// Maps a query to the extractor argument.
///
/// http(s) URLs are passed through, anything else becomes a single-result search.
pub fn search_target(query: &str) -> String {
    let query = query.trim();

    match Url::parse(query) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => query.to_string(),
        _ => format!("ytsearch1:{}", query),
    }
}

/// Picks the stream to play from the extractor metadata.
///
/// Preference order: opus audio-only, any audio-only, any format carrying audio, the
/// top-level URL.
pub fn select_audio_url(info: &MediaInfo) -> Option<String> {
    let formats = info.formats.as_deref().unwrap_or_default();
    let with_url = || formats.iter().filter(|f| f.url.is_some());

    with_url()
        .find(|f| f.is_opus_audio_only())
        .or_else(|| with_url().find(|f| f.has_audio() && !f.has_video()))
        .or_else(|| with_url().find(|f| f.has_audio()))
        .and_then(|f| f.url.clone())
        .or_else(|| info.url.clone())
}

/// Builds a track from extractor output, unwrapping search results.
pub fn track_from_info(query: &str, info: MediaInfo) -> Result<Track, ResolveError> {
    let info = info
        .into_first_entry()
        .ok_or_else(|| ResolveError::NoResults(query.to_string()))?;

    let url = select_audio_url(&info).ok_or_else(|| ResolveError::NoPlayableUrl(query.to_string()))?;

    Ok(Track {
        title: info.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        url,
        thumbnail: info.thumbnail,
        duration: info
            .duration
            .filter(|d| d.is_finite() && *d >= 0.0)
            .map(|d| d.round() as u64),
        uploader: info.uploader.unwrap_or_else(|| UNKNOWN_UPLOADER.to_string()),
        description: info.description.unwrap_or_default(),
    })
}
