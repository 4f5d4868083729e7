//! `/select`: publicly assign a role to random members of the caller's voice channel.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::command::{caller_voice, options::CommandOptions, reply::reply},
    error::AppError,
    model::selection::SelectParams,
    service::game::GameNightService,
    state::BotState,
};

pub const NAME: &str = "select";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Randomly selects n people to assign role-name to.")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "role-name",
            "The name of the role you are assigning to N people. Default = Superstar",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Integer,
            "n",
            "The number of people you are assigning `role-name` to. Default = 1",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "remove-from-candidate-pool",
            "Whether to remove selected people from future /select candidate pools. Default = False",
        ))
}

/// Reads the round parameters, falling back to the defaults for omitted options.
pub fn params(options: &CommandOptions) -> SelectParams {
    let defaults = SelectParams::default();

    SelectParams {
        role_name: options
            .string("role-name")
            .map(str::to_string)
            .unwrap_or(defaults.role_name),
        n: options.integer("n").unwrap_or(defaults.n),
        remove_from_pool: options
            .boolean("remove-from-candidate-pool")
            .unwrap_or(defaults.remove_from_pool),
    }
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let params = params(&CommandOptions::new(command.data.options()));
    let voice = caller_voice(ctx, command)?;

    let announcement = GameNightService::new(&state.pool_store)
        .select_publicly(voice.channel_id, voice.members, &params)
        .await?;

    reply(ctx, command, announcement).await
}
