//! Publication of the player panel message.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage, EditMessage},
    async_trait,
    http::Http,
};

use crate::{
    error::AppError,
    model::player::StatusMessage,
};

use super::display::{self, StatusView};

#[async_trait]
pub trait StatusBoard: Send + Sync {
    /// Posts the panel for a freshly started session in `channel_id`.
    async fn publish(&self, channel_id: ChannelId, view: &StatusView)
        -> Result<StatusMessage, AppError>;

    /// Edits the panel in place.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The message was deleted externally
    async fn update(&self, message: &StatusMessage, view: &StatusView) -> Result<(), AppError>;

    /// Deletes the panel. Succeeds when the message is already gone.
    async fn remove(&self, message: &StatusMessage) -> Result<(), AppError>;
}

/// Status board posting the panel as a Discord embed with control buttons.
pub struct DiscordStatusBoard {
    http: Arc<Http>,
}

impl DiscordStatusBoard {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl StatusBoard for DiscordStatusBoard {
    async fn publish(
        &self,
        channel_id: ChannelId,
        view: &StatusView,
    ) -> Result<StatusMessage, AppError> {
        let message = CreateMessage::new()
            .embed(CreateEmbed::from(view))
            .components(display::control_components());

        let message = channel_id.send_message(&self.http, message).await?;

        tracing::debug!(
            "Published player panel {} in channel {}",
            message.id,
            message.channel_id
        );

        Ok(StatusMessage {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn update(&self, message: &StatusMessage, view: &StatusView) -> Result<(), AppError> {
        let edit = EditMessage::new().embed(CreateEmbed::from(view));

        self.http
            .edit_message(message.channel_id, message.message_id, &edit, vec![])
            .await
            .map(|_| ())
            .map_err(|e| AppError::from_discord(e, format!("Player panel {}", message.message_id)))
    }

    async fn remove(&self, message: &StatusMessage) -> Result<(), AppError> {
        match self
            .http
            .delete_message(message.channel_id, message.message_id, None)
            .await
            .map_err(|e| AppError::from_discord(e, format!("Player panel {}", message.message_id)))
        {
            Ok(()) | Err(AppError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
