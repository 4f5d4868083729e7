//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler
//! logs who the bot is running as and registers the slash commands, so a restarted
//! bot always serves the command set it was built with.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::{bot::command::register_commands, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// Failures are logged rather than propagated; the bot keeps running with whatever
/// command set Discord already has registered.
///
/// # Arguments
/// - `state` - Bot state holding the configuration
/// - `ctx` - Discord context for HTTP requests
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match ctx.http.get_current_application_info().await {
        Ok(info) => {
            if let Some(owner) = info.owner {
                tracing::info!("Bot owner: {}", owner.name);
            }
        }
        Err(e) => tracing::warn!("Failed to fetch application info: {}", e),
    }

    match register_commands(&ctx.http, state.config.debug_guild_id).await {
        Ok(count) => match state.config.debug_guild_id {
            Some(guild_id) => tracing::info!("Registered {} commands to guild {}", count, guild_id),
            None => tracing::info!("Registered {} global commands", count),
        },
        Err(e) => tracing::error!("Failed to register commands: {}", e),
    }
}
