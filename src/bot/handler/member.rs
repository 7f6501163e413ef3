use serenity::all::{Context, GuildId, Member, User};

use crate::service::greeting;

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id;
    let content = greeting::join_announcement(new_member.user.id);

    if let Err(e) = greeting::announce(&ctx, guild_id, content).await {
        tracing::error!("Failed to announce member join in guild {}: {}", guild_id, e);
    } else {
        tracing::debug!("User {} joined guild {}", new_member.user.name, guild_id);
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(ctx: Context, guild_id: GuildId, user: User) {
    let content = greeting::leave_announcement(user.id);

    if let Err(e) = greeting::announce(&ctx, guild_id, content).await {
        tracing::error!("Failed to announce member leave in guild {}: {}", guild_id, e);
    } else {
        tracing::debug!("User {} left guild {}", user.name, guild_id);
    }
}
