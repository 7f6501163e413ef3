use serde::Deserialize;

/// A resolved, playable piece of media.
///
/// Immutable once resolved. Owned by the playback session after it has been queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    /// Direct audio stream URL handed to the voice transport
    pub url: String,
    pub thumbnail: Option<String>,
    /// Length in seconds when known
    pub duration: Option<u64>,
    pub uploader: String,
    pub description: String,
}

/// Raw metadata as printed by the media extractor.
///
/// Either a single media item or, for searches, a playlist whose `entries` hold the
/// results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaInfo {
    pub title: Option<String>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    pub uploader: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub formats: Option<Vec<MediaFormat>>,
    #[serde(default)]
    pub entries: Option<Vec<MediaInfo>>,
}

/// One candidate stream of a media item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaFormat {
    pub acodec: Option<String>,
    pub vcodec: Option<String>,
    pub url: Option<String>,
}

impl MediaInfo {
    /// Unwraps a search playlist to its first result.
    ///
    /// A payload without `entries` is already a single media item and is returned
    /// as-is. An empty playlist yields `None`.
    pub fn into_first_entry(self) -> Option<MediaInfo> {
        if self.entries.is_none() {
            return Some(self);
        }

        self.entries.and_then(|entries| entries.into_iter().next())
    }
}

impl MediaFormat {
    /// The extractor spells a missing codec as `none` (sometimes `null`).
    fn is_absent(codec: Option<&str>) -> bool {
        matches!(codec, Some("none") | Some("null"))
    }

    pub fn has_video(&self) -> bool {
        !Self::is_absent(self.vcodec.as_deref())
    }

    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some("none")
    }

    pub fn is_opus_audio_only(&self) -> bool {
        self.acodec.as_deref() == Some("opus") && !self.has_video()
    }
}
