//! Housekeeping commands: `/help`, `/test`, `/sync`, `/update`, and `/shutdown`.

use dioxus_logger::tracing;
use serenity::all::{CommandInteraction, Context, CreateCommand, UserId};
use std::time::Duration;

use crate::{
    bot::command::{
        register_commands,
        reply::{reply, reply_then_delete},
    },
    error::{game::GameError, AppError},
    state::BotState,
};

pub const HELP_NAME: &str = "help";
pub const TEST_NAME: &str = "test";
pub const SYNC_NAME: &str = "sync";
pub const UPDATE_NAME: &str = "update";
pub const SHUTDOWN_NAME: &str = "shutdown";

pub fn register_help() -> CreateCommand {
    CreateCommand::new(HELP_NAME).description("Provides info about the bot's commands")
}

pub fn register_test() -> CreateCommand {
    CreateCommand::new(TEST_NAME).description("Checks that the bot is online")
}

pub fn register_sync() -> CreateCommand {
    CreateCommand::new(SYNC_NAME)
        .description("(Alias of `/update`) Updates the bot's commands (Bot owner only)")
}

pub fn register_update() -> CreateCommand {
    CreateCommand::new(UPDATE_NAME).description("Updates the bot's commands (Bot owner only)")
}

pub fn register_shutdown() -> CreateCommand {
    CreateCommand::new(SHUTDOWN_NAME).description("Shuts down the bot (Bot owner only)")
}

/// Replies with the contents of the help file.
pub async fn help(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let help_text = tokio::fs::read_to_string(&state.config.help_file_path).await?;

    reply(ctx, command, help_text).await
}

pub async fn test(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    reply_then_delete(
        ctx,
        command,
        "I successfully responded to your test",
        state.config.delete_after,
    )
    .await
}

/// Re-registers every slash command. Shared by `/sync` and `/update`.
pub async fn update(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    ensure_owner(ctx, command.user.id).await?;

    let count = register_commands(&ctx.http, state.config.debug_guild_id).await?;
    tracing::info!("{} re-registered {} commands", command.user.name, count);

    reply_then_delete(ctx, command, "Bot updated!", state.config.delete_after).await
}

/// Stops the bot once the acknowledgement has been deleted.
pub async fn shutdown(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    ensure_owner(ctx, command.user.id).await?;

    let delete_after = state.config.delete_after;
    reply_then_delete(ctx, command, "Shutting down bot", delete_after).await?;

    tracing::info!("Shutdown requested by {}", command.user.name);
    tokio::time::sleep(delete_after + Duration::from_secs(1)).await;

    match state.shard_manager.get() {
        Some(shard_manager) => shard_manager.shutdown_all().await,
        None => tracing::error!("Shard manager unavailable, cannot shut down"),
    }

    Ok(())
}

/// Checks that a user owns the bot application, directly or through its team.
async fn ensure_owner(ctx: &Context, user_id: UserId) -> Result<(), AppError> {
    let info = ctx.http.get_current_application_info().await?;

    let is_owner = info.owner.as_ref().is_some_and(|owner| owner.id == user_id)
        || info
            .team
            .as_ref()
            .is_some_and(|team| team.members.iter().any(|member| member.user.id == user_id));

    if is_owner {
        Ok(())
    } else {
        Err(GameError::NotOwner.into())
    }
}
