//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Member, VoiceState) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{member::create_test_member, voice_state::create_test_voice_state};
//!
//! #[tokio::test]
//! async fn test_voice_leave() {
//!     let old = create_test_voice_state(10, 200, Some(300));
//!     let new = create_test_voice_state(10, 200, None);
//!     // Feed into the voice state handler...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod member;
pub mod user;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use user::create_test_user;
pub use voice_state::create_test_voice_state;

/// Guild ID used by factories when a test does not care which guild it runs in.
pub const TEST_GUILD_ID: u64 = 100000000000000001;
