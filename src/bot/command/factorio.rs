//! `/space_platform_max_speed_calc`: Factorio space platform speed calculator.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::command::{options::CommandOptions, reply::reply},
    error::{game::GameError, AppError},
    model::factorio::{Quality, SpacePlatformParams},
    service::factorio::{format_speeds, platform_speeds},
    state::BotState,
};

pub const NAME: &str = "space_platform_max_speed_calc";

pub fn register() -> CreateCommand {
    let quality = Quality::ALL.into_iter().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            "quality_of_thrusters",
            "Specify the quality of your thrusters here",
        )
        .required(true),
        |option, quality| option.add_string_choice(quality.as_str(), quality.as_str()),
    );

    CreateCommand::new(NAME)
        .description("Calculates the max speed of your space platform.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "max_width",
                "The max width of your platform in tiles.",
            )
            .min_int_value(1)
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "num_of_thrusters",
                "The number of thrusters on your platform.",
            )
            .min_int_value(1)
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Number,
                "mass",
                "The mass of your platform in tonnes.",
            )
            .min_number_value(0.1)
            .required(true),
        )
        .add_option(quality)
}

/// Reads the calculator inputs. Every option is required.
pub fn params(options: &CommandOptions) -> Result<SpacePlatformParams, GameError> {
    let missing = |name: &str| GameError::InvalidArgument(format!("`{}` is required", name));

    let quality = options
        .string("quality_of_thrusters")
        .ok_or_else(|| missing("quality_of_thrusters"))?
        .parse::<Quality>()
        .map_err(GameError::InvalidArgument)?;

    Ok(SpacePlatformParams {
        max_width: options
            .integer("max_width")
            .ok_or_else(|| missing("max_width"))?,
        num_of_thrusters: options
            .integer("num_of_thrusters")
            .ok_or_else(|| missing("num_of_thrusters"))?,
        mass: options.number("mass").ok_or_else(|| missing("mass"))?,
        quality,
    })
}

pub async fn run(
    _state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let params = params(&CommandOptions::new(command.data.options()))?;
    let speeds = platform_speeds(&params)?;

    reply(ctx, command, format_speeds(&speeds)).await
}
