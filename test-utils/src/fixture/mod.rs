//! Ready-made groups of Serenity objects for common test setups.

pub mod voice_channel;
