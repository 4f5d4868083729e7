//! `/imposter`: secretly assign roles to the caller's voice channel by direct message.
//!
//! Delivering a DM to every member can take longer than Discord's three second
//! window for answering an interaction, so the command defers its response and
//! edits it once delivery has settled.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};
use std::sync::Arc;

use crate::{
    bot::{
        command::{
            caller_voice,
            options::CommandOptions,
            reply::{edit_reply, load_attachments},
        },
        transport::SerenityDirectMessageTransport,
    },
    error::AppError,
    model::{direct_message::DispatchOutcome, member::CandidateMember, selection::ImposterParams},
    service::{direct_message::DirectMessageDispatcher, game::GameNightService},
    state::BotState,
};

pub const NAME: &str = "imposter";

const DELIVERED_REPLY: &str = "All roles have been sent, check your DMs!";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description(
            "Randomly selects n people to assign and privately distribute the `imposter-name` role via DMs.",
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "imposter-name",
            "The name of the role you are assigning to N people. Default = Imposter",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "safe-role-name",
            "The name of the non-imposter role. Default = NOT Imposter",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Integer,
            "n",
            "The number of people you are assigning `imposter-name` to. Default = 1",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "remove-from-candidate-pool",
            "Whether to remove selected people from future candidate pools. Default = False",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "imposter-knowledge",
            "Whether to reveal all imposters to the imposter team. Default = True",
        ))
}

/// Reads the round parameters, falling back to the defaults for omitted options.
pub fn params(options: &CommandOptions) -> ImposterParams {
    let defaults = ImposterParams::default();

    ImposterParams {
        imposter_name: options
            .string("imposter-name")
            .map(str::to_string)
            .unwrap_or(defaults.imposter_name),
        safe_role_name: options
            .string("safe-role-name")
            .map(str::to_string)
            .unwrap_or(defaults.safe_role_name),
        n: options.integer("n").unwrap_or(defaults.n),
        remove_from_pool: options
            .boolean("remove-from-candidate-pool")
            .unwrap_or(defaults.remove_from_pool),
        reveal_imposters: options
            .boolean("imposter-knowledge")
            .unwrap_or(defaults.reveal_imposters),
    }
}

/// Builds the reply asking members who block DMs to change their settings.
pub fn blocked_reply(blocked: &[CandidateMember]) -> String {
    let mut msg = String::new();
    for member in blocked {
        msg.push_str(&member.mention);
        msg.push(' ');
    }
    msg.push_str(", please adjust your privacy settings for this server so that I can send you a DM.\n");
    msg.push_str(
        "All other DMs have been deleted, please call this command again after everyone allows DMs.\n\n",
    );
    msg.push_str("## Instructions:\n");
    msg
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let params = params(&CommandOptions::new(command.data.options()));
    let voice = caller_voice(ctx, command)?;

    command.defer(ctx).await?;

    let transport = SerenityDirectMessageTransport::new(Arc::clone(&ctx.http));
    let dispatcher = DirectMessageDispatcher::new(&transport, state.config.dm_timeout);

    let outcome = GameNightService::new(&state.pool_store)
        .select_privately(voice.channel_id, voice.members, &params, &dispatcher)
        .await?;

    match outcome {
        DispatchOutcome::Delivered => edit_reply(ctx, command, DELIVERED_REPLY, Vec::new()).await,
        DispatchOutcome::Blocked(blocked) => {
            let attachments = load_attachments(&state.config.allow_dms_instructions_paths).await;
            edit_reply(ctx, command, blocked_reply(&blocked), attachments).await
        }
    }
}
