//! Business logic behind both bots.
//!
//! Services in this layer know nothing about interactions or gateway events. The bot
//! layer translates Discord input into calls here and renders the results back.

pub mod greeting;
pub mod player;
pub mod resolver;
pub mod voice;
