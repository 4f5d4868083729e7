//! Candidate pool resolution.
//!
//! Combines a voice channel's live member list with the channel's exclusion set to
//! produce the members currently eligible for selection. Pools are never cached: voice
//! membership changes outside the bot's control, so every command resolves afresh.

use dioxus_logger::tracing;
use serenity::all::{ChannelId, UserId};

use crate::{data::CandidatePoolStore, model::member::CandidateMember};

pub struct CandidatePoolService<'a> {
    store: &'a CandidatePoolStore,
}

impl<'a> CandidatePoolService<'a> {
    pub fn new(store: &'a CandidatePoolStore) -> Self {
        Self { store }
    }

    /// Computes the candidate pool for a voice channel.
    ///
    /// Filters the live voice members down to those not excluded from the channel's
    /// pool, keeping the order the members were given in.
    ///
    /// # Arguments
    /// - `channel_id` - Voice channel the members are connected to
    /// - `live_members` - Members currently connected, fetched fresh by the caller
    ///
    /// # Returns
    /// - `Vec<CandidateMember>` - Eligible members, empty if nobody is eligible
    pub async fn resolve(
        &self,
        channel_id: ChannelId,
        live_members: Vec<CandidateMember>,
    ) -> Vec<CandidateMember> {
        let excluded = self.store.excluded_ids(channel_id).await;

        live_members
            .into_iter()
            .filter(|member| !excluded.contains(&member.id))
            .collect()
    }

    /// Clears every exclusion for the voice channel.
    pub async fn reset(&self, channel_id: ChannelId) {
        self.store.reset(channel_id).await;

        tracing::info!("Reset candidate pool for channel {}", channel_id);
    }

    /// Returns a member to the pool of the voice channel they just left.
    ///
    /// Called for every voice channel departure, so the member is eligible again
    /// the next time they join.
    pub async fn member_left(&self, channel_id: ChannelId, user_id: UserId) {
        self.store.unexclude(channel_id, user_id).await;

        tracing::debug!(
            "User {} left channel {} and rejoined its candidate pool",
            user_id,
            channel_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture::voice_channel::create_voice_channel_members;

    const CHANNEL: ChannelId = ChannelId::new(300000000000000001);

    fn candidates(names: &[&str]) -> Vec<CandidateMember> {
        create_voice_channel_members(0, names)
            .iter()
            .map(CandidateMember::from)
            .collect()
    }

    /// Tests resolving with no exclusions.
    ///
    /// Expected: Live members returned unchanged
    #[tokio::test]
    async fn returns_live_members_without_exclusions() {
        let store = CandidatePoolStore::new();
        let live = candidates(&["Alice", "Bob", "Carol"]);

        let pool = CandidatePoolService::new(&store)
            .resolve(CHANNEL, live.clone())
            .await;

        assert_eq!(pool, live);
    }

    /// Tests resolving with some members excluded.
    ///
    /// Verifies that the result is the live list minus the excluded IDs and that
    /// the remaining members keep their relative order.
    ///
    /// Expected: Alice, Carol, Erin in that order
    #[tokio::test]
    async fn removes_excluded_and_keeps_order() {
        let store = CandidatePoolStore::new();
        let live = candidates(&["Alice", "Bob", "Carol", "Dave", "Erin"]);
        store.exclude(CHANNEL, &live[1]).await;
        store.exclude(CHANNEL, &live[3]).await;

        let pool = CandidatePoolService::new(&store)
            .resolve(CHANNEL, live.clone())
            .await;

        assert_eq!(pool, vec![live[0].clone(), live[2].clone(), live[4].clone()]);
    }

    /// Tests resolving an empty voice channel.
    ///
    /// Expected: Empty pool
    #[tokio::test]
    async fn empty_channel_resolves_empty() {
        let store = CandidatePoolStore::new();

        let pool = CandidatePoolService::new(&store)
            .resolve(CHANNEL, Vec::new())
            .await;

        assert!(pool.is_empty());
    }

    /// Tests that excluded members who already left do not matter.
    ///
    /// Expected: Pool equals live members
    #[tokio::test]
    async fn ignores_exclusions_for_absent_members() {
        let store = CandidatePoolStore::new();
        let everyone = candidates(&["Alice", "Bob", "Carol"]);
        store.exclude(CHANNEL, &everyone[2]).await;
        let live = everyone[..2].to_vec();

        let pool = CandidatePoolService::new(&store)
            .resolve(CHANNEL, live.clone())
            .await;

        assert_eq!(pool, live);
    }

    /// Tests that leaving the channel restores eligibility.
    ///
    /// Expected: Member back in the pool after `member_left`
    #[tokio::test]
    async fn member_left_restores_eligibility() {
        let store = CandidatePoolStore::new();
        let live = candidates(&["Alice", "Bob"]);
        store.exclude(CHANNEL, &live[0]).await;
        let service = CandidatePoolService::new(&store);

        service.member_left(CHANNEL, live[0].id).await;

        assert_eq!(service.resolve(CHANNEL, live.clone()).await, live);
    }
}
