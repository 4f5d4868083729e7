//! All-or-nothing delivery of direct message batches.
//!
//! A private round only works if every participant learns their role, so a batch is
//! delivered in two phases. The attempt phase sends every message concurrently and
//! waits for all of them to settle. Then the batch is either committed (nobody was
//! unreachable) or compensated: every message that did get through is deleted again
//! and the unreachable members are reported to the caller.
//!
//! Only "recipient does not accept DMs from this server" is treated as recoverable.
//! Timeouts and other Discord failures abort the dispatch and propagate unchanged.

use dioxus_logger::tracing;
use serenity::{async_trait, futures::future::join_all};
use std::time::Duration;

use crate::{
    error::delivery::DeliveryError,
    model::{
        direct_message::{DeliveredMessage, DirectMessage, DirectMessageBatch, DispatchOutcome},
        member::CandidateMember,
    },
};

/// Channel used to send and delete direct messages.
#[async_trait]
pub trait DirectMessageTransport: Send + Sync {
    /// Opens a private channel to the recipient and posts the text.
    ///
    /// # Returns
    /// - `Ok(DeliveredMessage)` - Handle for later retraction
    /// - `Err(DeliveryError::RecipientBlocked)` - Recipient disallows DMs from this server
    /// - `Err(DeliveryError)` - Any other failure
    async fn send(
        &self,
        recipient: &CandidateMember,
        text: &str,
    ) -> Result<DeliveredMessage, DeliveryError>;

    /// Deletes a previously delivered message.
    async fn retract(&self, message: &DeliveredMessage) -> Result<(), DeliveryError>;
}

/// Outcome of the attempt phase, before commit or compensation.
#[derive(Debug, Default)]
struct BatchAttempt {
    delivered: Vec<DeliveredMessage>,
    blocked: Vec<CandidateMember>,
}

pub struct DirectMessageDispatcher<'a, T: DirectMessageTransport + ?Sized> {
    transport: &'a T,
    timeout: Duration,
}

impl<'a, T: DirectMessageTransport + ?Sized> DirectMessageDispatcher<'a, T> {
    /// Creates a dispatcher over the given transport.
    ///
    /// # Arguments
    /// - `transport` - Transport that delivers and retracts messages
    /// - `timeout` - Upper bound for each individual send or retraction
    pub fn new(transport: &'a T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Delivers every message in the batch, or none of them.
    ///
    /// # Arguments
    /// - `batch` - One message per recipient
    ///
    /// # Returns
    /// - `Ok(DispatchOutcome::Delivered)` - Every recipient received their message
    /// - `Ok(DispatchOutcome::Blocked)` - Some recipients block DMs; all delivered
    ///   messages were retracted
    /// - `Err(DeliveryError)` - A send timed out or failed for another reason, or a
    ///   retraction failed
    pub async fn dispatch(&self, batch: &DirectMessageBatch) -> Result<DispatchOutcome, DeliveryError> {
        let attempt = self.attempt_all(batch).await?;

        if attempt.blocked.is_empty() {
            tracing::debug!("Delivered {} direct messages", attempt.delivered.len());
            return Ok(DispatchOutcome::Delivered);
        }

        tracing::info!(
            "{} of {} recipients block direct messages, retracting {} delivered messages",
            attempt.blocked.len(),
            batch.len(),
            attempt.delivered.len()
        );

        self.compensate(&attempt.delivered).await?;

        Ok(DispatchOutcome::Blocked(attempt.blocked))
    }

    /// Sends every message concurrently and waits for all of them to settle.
    ///
    /// Blocked recipients are collected; the first fatal failure is returned only
    /// after every send has finished, so no send is still in flight afterwards.
    async fn attempt_all(&self, batch: &DirectMessageBatch) -> Result<BatchAttempt, DeliveryError> {
        let sends = batch.values().map(|message| async move {
            (message, self.deliver(message).await)
        });
        let results = join_all(sends).await;

        let mut attempt = BatchAttempt::default();
        let mut fatal = None;

        for (message, result) in results {
            match result {
                Ok(delivered) => attempt.delivered.push(delivered),
                Err(err) if err.is_recoverable() => attempt.blocked.push(message.member.clone()),
                Err(err) => {
                    tracing::error!(
                        "Failed to send direct message to {}: {}",
                        message.member.id,
                        err
                    );
                    fatal.get_or_insert(err);
                }
            }
        }

        match fatal {
            Some(err) => Err(err),
            None => Ok(attempt),
        }
    }

    /// Retracts every delivered message.
    ///
    /// Attempts all retractions even if some fail, then reports the first failure.
    async fn compensate(&self, delivered: &[DeliveredMessage]) -> Result<(), DeliveryError> {
        let retractions = delivered.iter().map(|message| self.retract(message));
        let results = join_all(retractions).await;

        let mut first_failure = None;
        for (message, result) in delivered.iter().zip(results) {
            if let Err(err) = result {
                tracing::error!(
                    "Failed to retract direct message {} sent to {}: {}",
                    message.message_id,
                    message.recipient,
                    err
                );
                first_failure.get_or_insert(err);
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn deliver(&self, message: &DirectMessage) -> Result<DeliveredMessage, DeliveryError> {
        tokio::time::timeout(
            self.timeout,
            self.transport.send(&message.member, &message.text),
        )
        .await
        .unwrap_or_else(|_| {
            Err(DeliveryError::TimedOut {
                recipient: message.member.id,
                after: self.timeout,
            })
        })
    }

    async fn retract(&self, message: &DeliveredMessage) -> Result<(), DeliveryError> {
        tokio::time::timeout(self.timeout, self.transport.retract(message))
            .await
            .unwrap_or_else(|_| {
                Err(DeliveryError::TimedOut {
                    recipient: message.recipient,
                    after: self.timeout,
                })
            })
    }
}
