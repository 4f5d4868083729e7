use crate::{
    data::CandidatePoolStore,
    error::{game::GameError, AppError},
    model::{
        direct_message::DispatchOutcome,
        member::CandidateMember,
        selection::{ImposterParams, SelectParams},
    },
    service::{
        direct_message::DirectMessageDispatcher, game::GameNightService, mock::MockTransport,
    },
};
use serenity::all::ChannelId;
use std::{collections::HashSet, time::Duration};
use test_utils::fixture::voice_channel::create_voice_channel_members;

mod select_privately;
mod select_publicly;
mod view_pool;

const CHANNEL: ChannelId = ChannelId::new(300000000000000001);
const TIMEOUT: Duration = Duration::from_secs(10);

fn candidates(names: &[&str]) -> Vec<CandidateMember> {
    create_voice_channel_members(0, names)
        .iter()
        .map(CandidateMember::from)
        .collect()
}
