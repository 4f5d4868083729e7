//! `/view-candidate-pool` and `/reset-candidate-pool`.

use serenity::all::{ChannelId, CommandInteraction, Context, CreateCommand, Mentionable};

use crate::{
    bot::command::{caller_voice, reply::reply},
    error::AppError,
    model::member::CandidateMember,
    service::game::GameNightService,
    state::BotState,
};

pub const VIEW_NAME: &str = "view-candidate-pool";
pub const RESET_NAME: &str = "reset-candidate-pool";

pub fn register_view() -> CreateCommand {
    CreateCommand::new(VIEW_NAME)
        .description("View the pool of valid candidates for your voice channel.")
}

pub fn register_reset() -> CreateCommand {
    CreateCommand::new(RESET_NAME).description("Resets the candidate pool for your voice channel.")
}

/// Describes the candidate pool of a voice channel.
pub fn pool_listing(channel_id: ChannelId, pool: &[CandidateMember]) -> String {
    let channel = channel_id.mention();

    let mut msg = match pool.len() {
        0 => return format!("There are no valid candidates in the pool for {}", channel),
        1 => format!("There is 1 candidate in the pool for {}:\n", channel),
        count => format!("There are {} candidates in the pool for {}:\n", count, channel),
    };
    for member in pool {
        msg.push_str(&format!("- {}\n", member.mention));
    }
    msg
}

pub async fn view(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let voice = caller_voice(ctx, command)?;

    let pool = GameNightService::new(&state.pool_store)
        .view_pool(voice.channel_id, voice.members)
        .await;

    reply(ctx, command, pool_listing(voice.channel_id, &pool)).await
}

pub async fn reset(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let voice = caller_voice(ctx, command)?;

    GameNightService::new(&state.pool_store)
        .reset_pool(voice.channel_id)
        .await;

    reply(
        ctx,
        command,
        format!(
            "Successfully reset the candidate pool for {}!",
            voice.channel_id.mention()
        ),
    )
    .await
}
