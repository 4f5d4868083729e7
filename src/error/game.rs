use thiserror::Error;

/// Errors raised by the candidate pool and selection commands.
///
/// Every variant is detected before any pool state is mutated, so returning one of
/// these leaves the exclusion sets exactly as they were.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The invoking member is not connected to a voice channel.
    #[error("You need to be in a voice channel to use this command!")]
    NotInVoiceChannel,

    /// More members were requested than the candidate pool holds.
    #[error("Requested {requested} candidates but only {available} are in the pool")]
    InsufficientCandidates {
        /// Number of members the caller asked for
        requested: i64,
        /// Current size of the candidate pool
        available: usize,
    },

    /// Malformed command input, such as a non-positive member count.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Command is restricted to the bot's owner.
    #[error("Only the bot owner can use this command")]
    NotOwner,
}
