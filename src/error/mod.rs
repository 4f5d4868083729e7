//! Error types and user-facing reply mapping.
//!
//! This module provides the bot's error hierarchy and the conversion logic for
//! transforming errors into replies for the member who invoked a command. The
//! `AppError` enum serves as the top-level error type that wraps domain-specific
//! errors, and `AppError::user_message` plays the role a response mapping would in a
//! web backend: expected failures get a precise explanation, internal failures are
//! logged and answered with a generic message.

pub mod config;
pub mod delivery;
pub mod game;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{config::ConfigError, delivery::DeliveryError, game::GameError};

/// Reply shown for failures whose details should stay in the logs.
const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while running that command.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion so command handlers can use `?` freely.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Candidate pool or selection precondition failure.
    ///
    /// Surfaced to the invoking member verbatim, since it describes something they
    /// can fix.
    #[error(transparent)]
    GameErr(#[from] GameError),

    /// Fatal direct message delivery failure.
    ///
    /// Recipients blocking DMs are not reported through this variant; they produce
    /// a `DispatchOutcome::Blocked` instead.
    #[error(transparent)]
    DeliveryErr(#[from] DeliveryError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failure reading a local file such as the help text or instruction images.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the reply shown to the invoking member.
    ///
    /// Maps each error variant to a message:
    /// - `NotInVoiceChannel` / `NotOwner` / `InvalidArgument` → the error text itself
    /// - `InsufficientCandidates` → explanation plus how to view or reset the pool
    /// - Everything else → logged at error level, generic message returned
    ///
    /// # Returns
    /// - `String` - Text to send back through the interaction
    pub fn user_message(&self) -> String {
        match self {
            Self::GameErr(GameError::InsufficientCandidates { .. }) => {
                let mut msg = String::from(
                    "ERROR: `n` must be less than or equal to the number of people currently in the candidate pool!\n",
                );
                msg.push_str("To view the candidate pool, use the following command:\n");
                msg.push_str("```/view-candidate-pool```\n");
                msg.push_str("To reset the candidate pool, use the following command:\n");
                msg.push_str("```/reset-candidate-pool```\n");
                msg
            }
            Self::GameErr(err) => format!("Error: {}", err),
            err => {
                tracing::error!("Command failed: {}", err);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
