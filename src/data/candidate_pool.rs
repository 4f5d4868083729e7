//! Candidate pool store for tracking members withheld from selection.
//!
//! This module provides the `CandidatePoolStore`, the process-wide record of which
//! members have been removed from each voice channel's candidate pool. Entries are
//! created the first time a member is excluded, shrink as excluded members leave the
//! channel, and disappear entirely when the pool is reset.

use serenity::all::{ChannelId, UserId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::member::CandidateMember;

/// Store of per-voice-channel exclusion sets.
///
/// Cheap to clone: every clone shares the same map behind one lock, so a single
/// writer at a time touches any channel's entry. A channel with no entry and a
/// channel with an empty entry read the same; `unexclude` prunes entries that
/// become empty.
#[derive(Clone, Default)]
pub struct CandidatePoolStore {
    excluded: Arc<RwLock<HashMap<ChannelId, HashSet<UserId>>>>,
}

impl CandidatePoolStore {
    /// Creates a store with no exclusions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a member from the channel's candidate pool.
    ///
    /// Creates the channel's exclusion set if it does not exist yet. Excluding a
    /// member twice has the same effect as excluding them once.
    ///
    /// # Arguments
    /// - `channel_id` - Voice channel whose pool the member leaves
    /// - `member` - Member to exclude
    pub async fn exclude(&self, channel_id: ChannelId, member: &CandidateMember) {
        self.excluded
            .write()
            .await
            .entry(channel_id)
            .or_default()
            .insert(member.id);
    }

    /// Returns a member to the channel's candidate pool.
    ///
    /// No-op if the member is not excluded or the channel has no entry. Drops the
    /// channel's entry once its last excluded member is returned.
    ///
    /// # Arguments
    /// - `channel_id` - Voice channel whose pool the member rejoins
    /// - `user_id` - Member to return
    pub async fn unexclude(&self, channel_id: ChannelId, user_id: UserId) {
        let mut excluded = self.excluded.write().await;

        if let Some(ids) = excluded.get_mut(&channel_id) {
            ids.remove(&user_id);
            if ids.is_empty() {
                excluded.remove(&channel_id);
            }
        }
    }

    /// Clears every exclusion for the channel.
    ///
    /// No-op if the channel has no entry.
    pub async fn reset(&self, channel_id: ChannelId) {
        self.excluded.write().await.remove(&channel_id);
    }

    /// Returns the IDs currently excluded from the channel's pool.
    ///
    /// # Returns
    /// - `HashSet<UserId>` - Excluded member IDs, empty if the channel has no entry
    pub async fn excluded_ids(&self, channel_id: ChannelId) -> HashSet<UserId> {
        self.excluded
            .read()
            .await
            .get(&channel_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Checks whether the channel currently has an exclusion entry.
    ///
    /// Used in tests to verify that resets and pruning remove the entry itself.
    #[cfg(test)]
    pub async fn has_entry(&self, channel_id: ChannelId) -> bool {
        self.excluded.read().await.contains_key(&channel_id)
    }
}
