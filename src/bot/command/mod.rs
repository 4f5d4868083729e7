//! Slash command definitions and dispatch.
//!
//! Each submodule defines the `CreateCommand` builders for its commands alongside
//! the functions that run them. Command functions return `Result<(), AppError>`;
//! the interaction handler turns an error into a reply for the invoking member.
//!
//! Every game command acts on the voice channel the invoking member is connected
//! to, resolved through `caller_voice` at the start of the command.

pub mod factorio;
pub mod general;
pub mod imposter;
pub mod options;
pub mod pool;
pub mod reply;
pub mod select;

use dioxus_logger::tracing;
use serenity::all::{Command, CommandInteraction, Context, CreateCommand, GuildId};
use serenity::http::Http;

use crate::{
    bot::voice::{caller_voice_context, CacheVoiceMembership, VoiceContext},
    error::{game::GameError, AppError},
    state::BotState,
};

/// Builders for every slash command the bot offers.
pub fn all_commands() -> Vec<CreateCommand> {
    vec![
        general::register_help(),
        general::register_test(),
        general::register_sync(),
        general::register_update(),
        general::register_shutdown(),
        select::register(),
        imposter::register(),
        pool::register_view(),
        pool::register_reset(),
        factorio::register(),
    ]
}

/// Registers all slash commands, replacing any previously registered set.
///
/// Global commands can take a while to propagate to every client, so a debug guild
/// may be configured to register them to that guild alone instead.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `debug_guild_id` - Guild to register to; `None` registers globally
///
/// # Returns
/// - `Ok(usize)` - Number of commands registered
/// - `Err(AppError)` - Registration request failed
pub async fn register_commands(
    http: impl AsRef<Http>,
    debug_guild_id: Option<GuildId>,
) -> Result<usize, AppError> {
    let commands = all_commands();

    let registered = match debug_guild_id {
        Some(guild_id) => guild_id.set_commands(http, commands).await?,
        None => Command::set_global_commands(http, commands).await?,
    };

    Ok(registered.len())
}

/// Runs the command named by the interaction.
pub async fn run_command(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        general::HELP_NAME => general::help(state, ctx, command).await,
        general::TEST_NAME => general::test(state, ctx, command).await,
        general::SYNC_NAME | general::UPDATE_NAME => general::update(state, ctx, command).await,
        general::SHUTDOWN_NAME => general::shutdown(state, ctx, command).await,
        select::NAME => select::run(state, ctx, command).await,
        imposter::NAME => imposter::run(state, ctx, command).await,
        pool::VIEW_NAME => pool::view(state, ctx, command).await,
        pool::RESET_NAME => pool::reset(state, ctx, command).await,
        factorio::NAME => factorio::run(state, ctx, command).await,
        unknown => {
            tracing::warn!("Received unknown command /{}", unknown);
            Ok(())
        }
    }
}

/// Looks up the voice channel of the member who invoked a command.
///
/// Commands used outside a guild have no voice channel to act on.
pub(crate) fn caller_voice(
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<VoiceContext, GameError> {
    let guild_id = command.guild_id.ok_or(GameError::NotInVoiceChannel)?;
    let voice = CacheVoiceMembership::new(&ctx.cache, guild_id);

    caller_voice_context(&voice, command.user.id)
}
