use serenity::all::{Context, Interaction};

use crate::{
    bot::{command::play, component::controls},
    model::player::ControlAction,
    service::{player::PlayerService, resolver::MediaResolver},
};

/// Routes slash commands and button presses to their handlers
pub async fn handle_interaction(
    ctx: Context,
    interaction: Interaction,
    player: &PlayerService,
    resolver: &dyn MediaResolver,
) {
    match interaction {
        Interaction::Command(command) => {
            let result = match command.data.name.as_str() {
                play::NAME => play::handle(&ctx, &command, player, resolver).await,
                other => {
                    tracing::warn!("Received unknown command /{}", other);
                    return;
                }
            };

            if let Err(e) = result {
                tracing::error!("Failed to handle /{}: {}", command.data.name, e);
            }
        }
        Interaction::Component(component) => {
            let Some(action) = ControlAction::from_custom_id(&component.data.custom_id) else {
                tracing::warn!("Received unknown component {}", component.data.custom_id);
                return;
            };

            if let Err(e) = controls::handle(&ctx, &component, action, player).await {
                tracing::error!("Failed to handle {:?} button: {}", action, e);
            }
        }
        _ => {}
    }
}
