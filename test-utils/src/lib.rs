//! MT Bots Test Utils
//!
//! Provides shared testing utilities for unit tests of the bots. Discord model objects
//! cannot be constructed directly outside of Serenity, so the factories here build them
//! by deserializing JSON shaped like Discord's gateway payloads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, TestVoiceState};
//!
//! #[test]
//! fn finds_caller_channel() {
//!     let guild = create_test_guild(1, "Test Guild", &[TestVoiceState::new(42, Some(10))]);
//!     assert_eq!(guild.voice_states.len(), 1);
//! }
//! ```

pub mod serenity;
