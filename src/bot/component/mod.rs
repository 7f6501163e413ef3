//! Message components (buttons) of the media player bot.

pub mod controls;
