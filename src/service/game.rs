//! Game night rounds over a voice channel's candidate pool.
//!
//! Each round runs in a fixed order: resolve the pool from the live voice members,
//! draw the selection, apply exclusions, then announce. Validation failures surface
//! before any exclusion is written.

use dioxus_logger::tracing;
use serenity::all::{ChannelId, UserId};

use crate::{
    data::CandidatePoolStore,
    error::AppError,
    model::{
        direct_message::DispatchOutcome,
        member::CandidateMember,
        selection::{ImposterParams, SelectParams},
    },
    service::{
        announcement::{announce_private, announce_public},
        direct_message::{DirectMessageDispatcher, DirectMessageTransport},
        pool::CandidatePoolService,
        selection::SelectionService,
    },
};

pub struct GameNightService<'a> {
    store: &'a CandidatePoolStore,
}

impl<'a> GameNightService<'a> {
    pub fn new(store: &'a CandidatePoolStore) -> Self {
        Self { store }
    }

    /// Returns the current candidate pool of a voice channel.
    pub async fn view_pool(
        &self,
        channel_id: ChannelId,
        live_members: Vec<CandidateMember>,
    ) -> Vec<CandidateMember> {
        CandidatePoolService::new(self.store)
            .resolve(channel_id, live_members)
            .await
    }

    /// Clears every exclusion of a voice channel.
    pub async fn reset_pool(&self, channel_id: ChannelId) {
        CandidatePoolService::new(self.store).reset(channel_id).await;
    }

    /// Restores a member's eligibility in the voice channel they left.
    pub async fn member_left(&self, channel_id: ChannelId, user_id: UserId) {
        CandidatePoolService::new(self.store)
            .member_left(channel_id, user_id)
            .await;
    }

    /// Runs a public round and returns the announcement.
    ///
    /// # Arguments
    /// - `channel_id` - Voice channel of the invoking member
    /// - `live_members` - Members currently connected to that channel
    /// - `params` - Role name, member count, and removal setting
    ///
    /// # Returns
    /// - `Ok(String)` - Announcement to post in the channel
    /// - `Err(AppError::GameErr)` - Invalid count or pool too small; nothing excluded
    pub async fn select_publicly(
        &self,
        channel_id: ChannelId,
        live_members: Vec<CandidateMember>,
        params: &SelectParams,
    ) -> Result<String, AppError> {
        let pool = CandidatePoolService::new(self.store)
            .resolve(channel_id, live_members)
            .await;

        let selection = SelectionService::new(self.store)
            .select(channel_id, &pool, params.n, params.remove_from_pool)
            .await?;

        tracing::info!(
            "Selected {} of {} candidates in channel {} as {}",
            selection.len(),
            pool.len(),
            channel_id,
            params.role_name
        );

        Ok(announce_public(&selection, &params.role_name))
    }

    /// Runs a private round and delivers every role by direct message.
    ///
    /// Every member of the pool, imposter or not, receives a message so nobody can
    /// tell the imposters apart by who got a DM. Exclusions are applied before
    /// delivery and stay in place even if delivery is blocked.
    ///
    /// # Arguments
    /// - `channel_id` - Voice channel of the invoking member
    /// - `live_members` - Members currently connected to that channel
    /// - `params` - Role names, imposter count, removal and reveal settings
    /// - `dispatcher` - Dispatcher used to deliver the messages
    ///
    /// # Returns
    /// - `Ok(DispatchOutcome::Delivered)` - Every member received their role
    /// - `Ok(DispatchOutcome::Blocked)` - Some members block DMs; all roles retracted
    /// - `Err(AppError::GameErr)` - Invalid count or pool too small; nothing sent
    /// - `Err(AppError::DeliveryErr)` - Delivery failed for another reason
    pub async fn select_privately<T: DirectMessageTransport + ?Sized>(
        &self,
        channel_id: ChannelId,
        live_members: Vec<CandidateMember>,
        params: &ImposterParams,
        dispatcher: &DirectMessageDispatcher<'_, T>,
    ) -> Result<DispatchOutcome, AppError> {
        let pool = CandidatePoolService::new(self.store)
            .resolve(channel_id, live_members)
            .await;

        let imposters = SelectionService::new(self.store)
            .select(channel_id, &pool, params.n, params.remove_from_pool)
            .await?;

        let batch = announce_private(&pool, &imposters, params)?;

        tracing::info!(
            "Sending {} role DMs for {} {}(s) in channel {}",
            batch.len(),
            imposters.len(),
            params.imposter_name,
            channel_id
        );

        Ok(dispatcher.dispatch(&batch).await?)
    }
}
