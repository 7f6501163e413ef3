//! Discord integration for both bots.
//!
//! This module owns everything that talks to the gateway: building the Serenity client
//! for the selected role, receiving events, and translating slash commands and button
//! presses into calls on the service layer. Playback state itself lives in
//! `service::player`; the handlers here only forward events to it and render replies.
//!
//! # Gateway Intents
//!
//! Manager bot:
//! - `GUILDS` - Guild metadata, including the system channel
//! - `GUILD_MEMBERS` - Member join and leave events (privileged intent)
//!
//! Media player bot:
//! - `GUILDS` - Guild metadata, channels and permission overwrites
//! - `GUILD_VOICE_STATES` - Which voice channel each member (and the bot) is in
//! - `GUILD_MESSAGES` - Deletion of the player panel
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the manager bot application.

pub mod command;
pub mod component;
pub mod handler;
pub mod reply;
pub mod start;
