use std::collections::HashMap;

use serenity::all::{ChannelId, MessageId, UserId};

use super::member::CandidateMember;

/// A personalized direct message waiting to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessage {
    /// Recipient of the message.
    pub member: CandidateMember,
    /// Message content.
    pub text: String,
}

/// Batch of direct messages keyed by recipient, at most one per member.
pub type DirectMessageBatch = HashMap<UserId, DirectMessage>;

/// Handle to a delivered direct message, kept so it can be retracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveredMessage {
    pub recipient: UserId,
    /// Private channel the message was posted in.
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

/// Result of dispatching a batch of direct messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Every recipient received their message.
    Delivered,
    /// These recipients block DMs from this server. Every message that did get
    /// through has been retracted.
    Blocked(Vec<CandidateMember>),
}
