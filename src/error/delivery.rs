use std::time::Duration;

use serenity::all::UserId;
use thiserror::Error;

/// Discord JSON error code for "Cannot send messages to this user".
///
/// Returned when the recipient has disabled direct messages from members of the
/// guild the bot shares with them.
pub const DM_BLOCKED_ERROR_CODE: isize = 50007;

/// Failure to deliver or retract a single direct message.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The recipient's privacy settings reject direct messages from this server.
    ///
    /// This is the only recoverable delivery failure: the dispatcher records the
    /// recipient and retracts the rest of the batch.
    #[error("User {0} does not accept direct messages from this server")]
    RecipientBlocked(UserId),

    /// Discord did not answer within the configured delivery timeout.
    #[error("Direct message to user {recipient} timed out after {after:?}")]
    TimedOut {
        /// Intended recipient of the message
        recipient: UserId,
        /// Timeout that elapsed
        after: Duration,
    },

    /// Any other Discord API failure.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl DeliveryError {
    /// Classifies a Serenity error raised while messaging `recipient`.
    ///
    /// Discord reports a blocked recipient as an unsuccessful HTTP request carrying
    /// JSON error code 50007. Everything else stays a fatal `Discord` error.
    ///
    /// # Arguments
    /// - `recipient` - User the failed request targeted
    /// - `err` - Error returned by Serenity
    ///
    /// # Returns
    /// - `DeliveryError::RecipientBlocked` - Recipient disallows DMs from this server
    /// - `DeliveryError::Discord` - Any other failure
    pub fn classify(recipient: UserId, err: serenity::Error) -> Self {
        if let serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(response)) =
            &err
        {
            if response.error.code == DM_BLOCKED_ERROR_CODE {
                return Self::RecipientBlocked(recipient);
            }
        }

        Self::Discord(Box::new(err))
    }

    /// Whether this failure leaves the batch recoverable by retraction.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RecipientBlocked(_))
    }
}
