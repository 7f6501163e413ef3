//! Member join and leave announcements of the manager bot.

use serenity::all::{ChannelId, Context, GuildId, Mentionable, UserId};

use crate::error::AppError;

pub fn join_announcement(user_id: UserId) -> String {
    format!("{} has entered the building 😏", user_id.mention())
}

pub fn leave_announcement(user_id: UserId) -> String {
    format!("{} has left the building 🤮", user_id.mention())
}

/// Posts `content` in the guild's system channel.
///
/// Guilds without a system channel are skipped silently.
///
/// # Arguments
/// - `ctx` - Discord context, used for the cache and HTTP client
/// - `guild_id` - Guild the member joined or left
/// - `content` - Announcement text
pub async fn announce(ctx: &Context, guild_id: GuildId, content: String) -> Result<(), AppError> {
    let Some(channel_id) = system_channel(ctx, guild_id).await? else {
        tracing::debug!("Guild {} has no system channel, skipping announcement", guild_id);
        return Ok(());
    };

    channel_id.say(&ctx.http, content).await?;

    Ok(())
}

/// System channel of a guild, from cache when available.
async fn system_channel(ctx: &Context, guild_id: GuildId) -> Result<Option<ChannelId>, AppError> {
    let cached = ctx.cache.guild(guild_id).map(|guild| guild.system_channel_id);
    if let Some(channel_id) = cached {
        return Ok(channel_id);
    }

    let guild = ctx.http.get_guild(guild_id).await?;

    Ok(guild.system_channel_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_join_announcement() {
        assert_eq!(
            join_announcement(UserId::new(42)),
            "<@42> has entered the building 😏"
        );
    }

    #[test]
    fn formats_leave_announcement() {
        assert_eq!(
            leave_announcement(UserId::new(42)),
            "<@42> has left the building 🤮"
        );
    }
}
