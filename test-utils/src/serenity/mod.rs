//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, VoiceState) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's gateway would send.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects with voice states
//! - `voice_state::create_test_voice_state` - Create standalone Serenity VoiceState objects

pub mod guild;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use guild::create_test_guild;
pub use voice_state::{create_test_voice_state, TestVoiceState};
