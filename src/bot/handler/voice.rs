//! Voice state event handler.
//!
//! Discord sends a voice state update whenever a member joins, leaves, or moves
//! between voice channels. Leaving a channel (or moving out of it) makes the member
//! eligible again in that channel's candidate pool, so a member who steps out and
//! back in is no longer excluded.

use dioxus_logger::tracing;
use serenity::all::{ChannelId, VoiceState};

use crate::{data::CandidatePoolStore, service::game::GameNightService};

/// Returns the voice channel a member left, if the update is a leave or a move.
///
/// Mute, deafen, and stream changes keep the same channel and produce `None`, as
/// does a join from outside voice.
pub fn departed_channel(old: Option<&VoiceState>, new: &VoiceState) -> Option<ChannelId> {
    let previous = old?.channel_id?;

    (new.channel_id != Some(previous)).then_some(previous)
}

/// Handles a voice state update by restoring the member's eligibility in the
/// channel they left.
///
/// # Arguments
/// - `store` - Candidate pool store holding every channel's exclusions
/// - `old` - Cached voice state before the update, if the cache had one
/// - `new` - Voice state after the update
pub async fn handle_voice_state_update(
    store: &CandidatePoolStore,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(channel_id) = departed_channel(old.as_ref(), &new) else {
        return;
    };

    tracing::debug!("User {} left voice channel {}", new.user_id, channel_id);

    GameNightService::new(store)
        .member_left(channel_id, new.user_id)
        .await;
}
