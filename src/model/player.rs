use serenity::all::{ChannelId, MessageId};

/// Playback status of a guild's session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Playing,
    Paused,
}

/// The continuously edited message showing the player panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

/// Buttons on the player panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    TogglePause,
    Skip,
    Stop,
}

impl ControlAction {
    pub const ALL: [ControlAction; 3] = [Self::TogglePause, Self::Skip, Self::Stop];

    pub fn custom_id(self) -> &'static str {
        match self {
            Self::TogglePause => "media_player:toggle",
            Self::Skip => "media_player:skip",
            Self::Stop => "media_player:stop",
        }
    }

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.custom_id() == custom_id)
    }
}

/// Reasons a user action is rejected without touching playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    NotInVoice,
    MissingViewPermission,
    MissingConnectPermission,
    MissingSpeakPermission,
    NoMediaFound,
    ControlNotInVoice,
    ControlWrongChannel,
}

impl Denial {
    pub fn message(self) -> &'static str {
        match self {
            Self::NotInVoice => "You are not connected to a voice channel",
            Self::MissingViewPermission => "I do not have permission to view your voice channel",
            Self::MissingConnectPermission => {
                "I do not have permission to connect to your voice channel"
            }
            Self::MissingSpeakPermission => "I do not have permission to speak in your voice channel",
            Self::NoMediaFound => "No media found for that query",
            Self::ControlNotInVoice => "You must be connected to a voice channel to use this button",
            Self::ControlWrongChannel => {
                "You must be in the same voice channel as me to use this button"
            }
        }
    }
}

/// Result of a `/play` request that reached the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A new session started with this track.
    Started { title: String },
    /// The track was appended to the queue of the running session.
    Queued { title: String, position: usize },
    /// Nothing was played or queued.
    Denied(Denial),
}

/// Result of a control button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    Resumed,
    Paused,
    Skipped,
    /// Skip with an empty queue, handled as a stop.
    Exhausted,
    Stopped,
    Denied(Denial),
}

impl ControlOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Resumed => "▶️ Resumed playback",
            Self::Paused => "⏸️ Paused playback",
            Self::Skipped => "⏭️ Skipped to the next media",
            Self::Exhausted => "No more media in the queue, stopping playback",
            Self::Stopped => "⏹️ Stopping playback and disconnecting from the voice channel",
            Self::Denied(denial) => denial.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_ids_round_trip() {
        for action in ControlAction::ALL {
            assert_eq!(ControlAction::from_custom_id(action.custom_id()), Some(action));
        }
    }

    #[test]
    fn unknown_custom_id_is_ignored() {
        assert_eq!(ControlAction::from_custom_id("poll:vote"), None);
    }

    #[test]
    fn denied_outcome_uses_denial_text() {
        assert_eq!(
            ControlOutcome::Denied(Denial::ControlWrongChannel).message(),
            "You must be in the same voice channel as me to use this button"
        );
    }
}
