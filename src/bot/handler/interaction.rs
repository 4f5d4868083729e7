//! Interaction event handler.
//!
//! Routes slash command interactions to their command and reports failures back to
//! the member who invoked them. Other interaction kinds are ignored since the bot
//! offers no components or autocomplete.

use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::{
    bot::command::{reply::reply_error, run_command},
    state::BotState,
};

/// Handles an interaction created by a member.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for replies and cache lookups
/// - `interaction` - The interaction Discord delivered
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "{} used /{} in guild {:?}",
        command.user.name,
        command.data.name,
        command.guild_id
    );

    if let Err(err) = run_command(state, &ctx, &command).await {
        tracing::debug!("/{} failed: {}", command.data.name, err);
        reply_error(&ctx, &command, &err).await;
    }
}
