//! `/play <query>`: start a session in the caller's voice channel or queue behind it.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::reply::ReplyTarget,
    error::AppError,
    model::player::{Denial, PlayOutcome},
    service::{player::PlayerService, resolver::MediaResolver, voice},
};

pub const NAME: &str = "play";
const QUERY_OPTION: &str = "query";
const PLAY_FAILED: &str = "Failed to start playback";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Play media in a voice channel.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                QUERY_OPTION,
                "The name of the media or the URL of the media you want to play",
            )
            .required(true),
        )
}

/// Handles a `/play` invocation.
///
/// Pre-flight denials are answered immediately. Everything after them is deferred
/// ephemerally before the player is involved, because media resolution and the player
/// queue can both outlast Discord's response deadline. The player panel is posted as
/// its own channel message, so the deferral only ever becomes a transient reply.
///
/// # Arguments
/// - `ctx` - Discord context for the cache and HTTP client
/// - `command` - The invocation
/// - `player` - Handle of the player worker
/// - `resolver` - Media lookup for the query
pub async fn handle(
    ctx: &Context,
    command: &CommandInteraction,
    player: &PlayerService,
    resolver: &dyn MediaResolver,
) -> Result<(), AppError> {
    let reply = ReplyTarget::from(command);

    let Some(guild_id) = command.guild_id else {
        return reply.transient(&ctx.http, Denial::NotInVoice.message()).await;
    };

    let query = query_option(command)?;

    let channel_id = match voice::admit_play(&ctx.cache, guild_id, command.user.id) {
        Ok(channel_id) => channel_id,
        Err(denial) => return reply.transient(&ctx.http, denial.message()).await,
    };

    reply.defer(&ctx.http).await?;

    let outcome = match player
        .play_query(resolver, guild_id, channel_id, command.channel_id, query)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            reply.edit_transient(&ctx.http, PLAY_FAILED).await?;
            return Err(e);
        }
    };

    match outcome {
        PlayOutcome::Started { .. } => reply.discard(&ctx.http).await,
        PlayOutcome::Queued { title, .. } => {
            reply
                .edit_transient(&ctx.http, queued_message(&title))
                .await
        }
        PlayOutcome::Denied(denial) => reply.edit_transient(&ctx.http, denial.message()).await,
    }
}

fn query_option(command: &CommandInteraction) -> Result<&str, AppError> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == QUERY_OPTION)
        .and_then(|option| option.value.as_str())
        .map(str::trim)
        .ok_or_else(|| AppError::InternalError(format!("/{} invoked without a query", NAME)))
}

fn queued_message(title: &str) -> String {
    format!("Added {} to the queue", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_required_query_option() {
        let command = serde_json::to_value(register()).unwrap();

        assert_eq!(command["name"], NAME);
        assert_eq!(command["description"], "Play media in a voice channel.");

        let options = command["options"].as_array().unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0]["name"], QUERY_OPTION);
        assert_eq!(options[0]["type"], 3);
        assert_eq!(options[0]["required"], true);
    }

    #[test]
    fn formats_queue_confirmation() {
        assert_eq!(queued_message("Song"), "Added Song to the queue");
    }
}
