//! Slash commands of the media player bot.

use serenity::all::CreateCommand;

pub mod play;

/// Every global command, as registered on ready.
pub fn global_commands() -> Vec<CreateCommand> {
    vec![play::register()]
}
