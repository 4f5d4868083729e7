//! Discord bot integration for game night commands.
//!
//! This module connects the game logic to Discord. The bot registers the slash
//! commands, answers them using the member's current voice channel, and tracks voice
//! channel departures so excluded members rejoin the candidate pool when they leave.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild data, including the voice states present at startup
//! - `GUILD_VOICE_STATES` - Receive voice channel joins, moves, and leaves
//! - `GUILD_MEMBERS` - Keep member data cached for members in voice (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
pub mod transport;
pub mod voice;
