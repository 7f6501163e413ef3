//! Interaction replies.
//!
//! Denials and confirmations are "transient": ephemeral, visible only to the caller,
//! and deleted a few seconds after they were sent.

use std::{sync::Arc, time::Duration};

use serenity::all::{
    CommandInteraction, ComponentInteraction, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, Http, InteractionId,
};

use crate::error::{is_discord_not_found, AppError};

/// How long transient replies stay visible.
pub const TRANSIENT_TTL: Duration = Duration::from_secs(5);

/// The interaction a reply answers.
#[derive(Debug, Clone)]
pub struct ReplyTarget {
    pub id: InteractionId,
    pub token: String,
}

impl From<&CommandInteraction> for ReplyTarget {
    fn from(command: &CommandInteraction) -> Self {
        Self {
            id: command.id,
            token: command.token.clone(),
        }
    }
}

impl From<&ComponentInteraction> for ReplyTarget {
    fn from(component: &ComponentInteraction) -> Self {
        Self {
            id: component.id,
            token: component.token.clone(),
        }
    }
}

impl ReplyTarget {
    /// Answers the interaction with a transient message.
    pub async fn transient(&self, http: &Arc<Http>, content: impl Into<String>) -> Result<(), AppError> {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true),
        );

        http.create_interaction_response(self.id, &self.token, &response, vec![])
            .await?;

        self.expire(http);

        Ok(())
    }

    /// Acknowledges the interaction now and answers later, visible only to the caller.
    pub async fn defer(&self, http: &Arc<Http>) -> Result<(), AppError> {
        let response = CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(true),
        );

        http.create_interaction_response(self.id, &self.token, &response, vec![])
            .await?;

        Ok(())
    }

    /// Turns a deferred response into a transient message.
    pub async fn edit_transient(
        &self,
        http: &Arc<Http>,
        content: impl Into<String>,
    ) -> Result<(), AppError> {
        let response = EditInteractionResponse::new().content(content);

        http.edit_original_interaction_response(&self.token, &response, vec![])
            .await?;

        self.expire(http);

        Ok(())
    }

    /// Deletes the response right away. Succeeds when it is already gone.
    pub async fn discard(&self, http: &Arc<Http>) -> Result<(), AppError> {
        match http.delete_original_interaction_response(&self.token).await {
            Ok(()) => Ok(()),
            Err(e) if is_discord_not_found(&e) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn expire(&self, http: &Arc<Http>) {
        let target = self.clone();
        let http = http.clone();

        tokio::spawn(async move {
            tokio::time::sleep(TRANSIENT_TTL).await;

            if let Err(e) = target.discard(&http).await {
                tracing::debug!("Failed to delete transient reply {}: {}", target.id, e);
            }
        });
    }
}
