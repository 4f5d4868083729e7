use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::state::BotState;

/// Builds the Discord bot client.
///
/// Creates the Serenity client with the event handler and stores the client's shard
/// manager in the bot state, so the owner-only shutdown command can stop it later.
///
/// # Arguments
/// - `state` - Shared bot state, including the configuration with the bot token
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(state: BotState) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MEMBERS;

    let token = state.config.discord_bot_token.clone();
    let shard_manager = state.shard_manager.clone();

    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    let _ = shard_manager.set(Arc::clone(&client.shard_manager));

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until every shard has shut down, either through the shutdown command or
/// a Ctrl+C signal.
///
/// # Arguments
/// - `client` - Client built by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        tracing::info!("Received Ctrl+C, shutting down");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
