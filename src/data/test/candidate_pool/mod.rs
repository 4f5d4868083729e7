use crate::{data::CandidatePoolStore, model::member::CandidateMember};
use serenity::all::{ChannelId, UserId};
use test_utils::fixture::voice_channel::create_voice_channel_members;

mod exclude;
mod excluded_ids;
mod reset;
mod unexclude;

/// Voice channel most tests run in.
const CHANNEL: ChannelId = ChannelId::new(300000000000000001);
/// A second voice channel for isolation checks.
const OTHER_CHANNEL: ChannelId = ChannelId::new(300000000000000002);

/// Builds candidates for the given display names.
fn candidates(names: &[&str]) -> Vec<CandidateMember> {
    create_voice_channel_members(0, names)
        .iter()
        .map(CandidateMember::from)
        .collect()
}
