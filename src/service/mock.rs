//! Recording direct message transport for tests.

use serenity::{
    all::{ChannelId, MessageId, UserId},
    async_trait,
};
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
    time::Duration,
};

use crate::{
    error::delivery::DeliveryError,
    model::{direct_message::DeliveredMessage, member::CandidateMember},
    service::direct_message::DirectMessageTransport,
};

/// Something the transport observed, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A send to this user settled, successfully or not.
    SendFinished(UserId),
    /// A message to this user was deleted.
    Retracted(UserId),
}

#[derive(Default)]
struct MockState {
    next_message_id: u64,
    sent: Vec<(DeliveredMessage, String)>,
    retracted: Vec<DeliveredMessage>,
    events: Vec<TransportEvent>,
}

/// Transport that keeps messages in memory.
///
/// Recipients can be configured to block DMs, fail fatally, or answer slowly.
#[derive(Default)]
pub struct MockTransport {
    blocked: HashSet<UserId>,
    failing: HashSet<UserId>,
    delays: HashMap<UserId, Duration>,
    state: Mutex<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipient rejects DMs from the server.
    pub fn blocking(mut self, user_id: UserId) -> Self {
        self.blocked.insert(user_id);
        self
    }

    /// Sending to the recipient fails with a non-recoverable error.
    pub fn failing(mut self, user_id: UserId) -> Self {
        self.failing.insert(user_id);
        self
    }

    /// Sending to the recipient takes `delay` before settling.
    pub fn delaying(mut self, user_id: UserId, delay: Duration) -> Self {
        self.delays.insert(user_id, delay);
        self
    }

    /// Messages delivered and not retracted, keyed by recipient.
    pub fn visible_messages(&self) -> HashMap<UserId, String> {
        let state = self.state.lock().unwrap();
        state
            .sent
            .iter()
            .filter(|(message, _)| !state.retracted.contains(message))
            .map(|(message, text)| (message.recipient, text.clone()))
            .collect()
    }

    pub fn retracted(&self) -> Vec<DeliveredMessage> {
        self.state.lock().unwrap().retracted.clone()
    }

    pub fn events(&self) -> Vec<TransportEvent> {
        self.state.lock().unwrap().events.clone()
    }
}

#[async_trait]
impl DirectMessageTransport for MockTransport {
    async fn send(
        &self,
        recipient: &CandidateMember,
        text: &str,
    ) -> Result<DeliveredMessage, DeliveryError> {
        if let Some(delay) = self.delays.get(&recipient.id) {
            tokio::time::sleep(*delay).await;
        }

        let mut state = self.state.lock().unwrap();
        state.events.push(TransportEvent::SendFinished(recipient.id));

        if self.blocked.contains(&recipient.id) {
            return Err(DeliveryError::RecipientBlocked(recipient.id));
        }
        if self.failing.contains(&recipient.id) {
            return Err(DeliveryError::Discord(Box::new(serenity::Error::Other(
                "mock transport failure",
            ))));
        }

        state.next_message_id += 1;
        let delivered = DeliveredMessage {
            recipient: recipient.id,
            channel_id: ChannelId::new(recipient.id.get()),
            message_id: MessageId::new(state.next_message_id),
        };
        state.sent.push((delivered, text.to_string()));

        Ok(delivered)
    }

    async fn retract(&self, message: &DeliveredMessage) -> Result<(), DeliveryError> {
        let mut state = self.state.lock().unwrap();
        state.events.push(TransportEvent::Retracted(message.recipient));
        state.retracted.push(*message);
        Ok(())
    }
}
