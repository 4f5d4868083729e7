//! Game Night Test Utils
//!
//! Provides shared testing utilities for building unit tests for the game night bot.
//! The bot's core works on members and voice states handed to it by Serenity, so this
//! crate offers factories that build those Serenity structs the same way Discord's
//! gateway would deliver them.
//!
//! # Overview
//!
//! The test utilities consist of two main components:
//! - **serenity**: Factories for individual Serenity model objects (users, members,
//!   voice states)
//! - **fixture**: Ready-made groups of members, such as a populated voice channel
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::fixture::voice_channel::create_voice_channel_members;
//!
//! #[tokio::test]
//! async fn test_pool() {
//!     let members = create_voice_channel_members(1, &["Alice", "Bob", "Carol"]);
//!     // Convert into candidates and run the selection...
//! }
//! ```

pub mod fixture;
pub mod serenity;
