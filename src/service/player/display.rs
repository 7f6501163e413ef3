//! Player panel rendering.
//!
//! `render` is a pure function of the session so the panel can be re-rendered and
//! edited after every transition without producing spurious changes.

use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter};

use crate::model::player::{ControlAction, PlaybackStatus};

use super::session::Session;

/// Number of upcoming tracks listed on the panel.
pub const QUEUE_PREVIEW_LEN: usize = 5;

const TITLE: &str = "🎵 Media Player";
const COLOR_BLURPLE: u32 = 0x5865F2;
const PLACEHOLDER: &str = "-";

/// Rendered content of the player panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub now_playing: String,
    pub thumbnail: Option<String>,
    pub queue_heading: String,
    pub queue_body: String,
    pub footer: String,
}

/// Renders the player panel for a session.
pub fn render(session: &Session) -> StatusView {
    let (now_playing, thumbnail) = match session.current() {
        Some(track) => (track.title.clone(), track.thumbnail.clone()),
        None => (PLACEHOLDER.to_string(), None),
    };

    let queue = session.queue();
    let queue_body = if queue.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        let mut lines: Vec<String> = queue
            .iter()
            .take(QUEUE_PREVIEW_LEN)
            .enumerate()
            .map(|(index, track)| format!("**{}.** {}", index + 1, track.title))
            .collect();

        if queue.len() > QUEUE_PREVIEW_LEN {
            lines.push(format!("...and {} more", queue.len() - QUEUE_PREVIEW_LEN));
        }

        lines.join("\n")
    };

    StatusView {
        now_playing,
        thumbnail,
        queue_heading: format!("📜 Queue ({})", queue.len()),
        queue_body,
        footer: format!("Status: {}", status_label(session.status())),
    }
}

fn status_label(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Playing => "▶️ Playing",
        PlaybackStatus::Paused => "⏸️ Paused",
        PlaybackStatus::Idle => "⏹️ Idle",
    }
}

impl From<&StatusView> for CreateEmbed {
    fn from(view: &StatusView) -> Self {
        let mut embed = CreateEmbed::new()
            .title(TITLE)
            .color(COLOR_BLURPLE)
            .field("🔊 Now Playing", &view.now_playing, false)
            .field(&view.queue_heading, &view.queue_body, false)
            .footer(CreateEmbedFooter::new(&view.footer));

        if let Some(thumbnail) = &view.thumbnail {
            embed = embed.thumbnail(thumbnail);
        }

        embed
    }
}

/// Play/pause, skip and stop buttons attached to the panel.
pub fn control_components() -> Vec<CreateActionRow> {
    let buttons = ControlAction::ALL
        .into_iter()
        .map(|action| {
            let (label, style) = match action {
                ControlAction::TogglePause => ("⏯️", ButtonStyle::Primary),
                ControlAction::Skip => ("⏭️", ButtonStyle::Primary),
                ControlAction::Stop => ("⏹️", ButtonStyle::Danger),
            };

            CreateButton::new(action.custom_id())
                .label(label)
                .style(style)
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}
