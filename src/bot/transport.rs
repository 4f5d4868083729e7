//! Direct message transport backed by Discord's HTTP API.

use serenity::{all::CreateMessage, async_trait, http::Http};
use std::sync::Arc;

use crate::{
    error::delivery::DeliveryError,
    model::{direct_message::DeliveredMessage, member::CandidateMember},
    service::direct_message::DirectMessageTransport,
};

/// Sends direct messages through the bot's HTTP client.
pub struct SerenityDirectMessageTransport {
    http: Arc<Http>,
}

impl SerenityDirectMessageTransport {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DirectMessageTransport for SerenityDirectMessageTransport {
    async fn send(
        &self,
        recipient: &CandidateMember,
        text: &str,
    ) -> Result<DeliveredMessage, DeliveryError> {
        let channel = recipient
            .id
            .create_dm_channel(&*self.http)
            .await
            .map_err(|e| DeliveryError::classify(recipient.id, e))?;

        let message = channel
            .id
            .send_message(&*self.http, CreateMessage::new().content(text))
            .await
            .map_err(|e| DeliveryError::classify(recipient.id, e))?;

        Ok(DeliveredMessage {
            recipient: recipient.id,
            channel_id: channel.id,
            message_id: message.id,
        })
    }

    async fn retract(&self, message: &DeliveredMessage) -> Result<(), DeliveryError> {
        message
            .channel_id
            .delete_message(&*self.http, message.message_id)
            .await
            .map_err(|e| DeliveryError::Discord(Box::new(e)))
    }
}
