//! Voice membership lookups.
//!
//! Commands act on the voice channel the invoking member is connected to. The
//! `VoiceMembership` trait answers which channel that is and who else is connected;
//! the Serenity implementation reads the gateway cache, which Discord keeps current
//! through voice state updates. Lookups are made fresh for every command.

use serenity::all::{Cache, ChannelId, GuildId, UserId};

use crate::{error::game::GameError, model::member::CandidateMember};

/// Source of live voice channel membership.
pub trait VoiceMembership {
    /// Voice channel the user is connected to, if any.
    fn connected_voice_channel(&self, user_id: UserId) -> Option<ChannelId>;

    /// Members currently connected to the voice channel.
    fn voice_channel_members(&self, channel_id: ChannelId) -> Vec<CandidateMember>;
}

/// The invoking member's voice channel and everyone connected to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceContext {
    pub channel_id: ChannelId,
    pub members: Vec<CandidateMember>,
}

/// Looks up the voice channel of the invoking member.
///
/// # Arguments
/// - `voice` - Voice membership source
/// - `user_id` - Member who invoked the command
///
/// # Returns
/// - `Ok(VoiceContext)` - The member's channel and its live members
/// - `Err(GameError::NotInVoiceChannel)` - The member is not connected to voice
pub fn caller_voice_context<V: VoiceMembership + ?Sized>(
    voice: &V,
    user_id: UserId,
) -> Result<VoiceContext, GameError> {
    let channel_id = voice
        .connected_voice_channel(user_id)
        .ok_or(GameError::NotInVoiceChannel)?;

    Ok(VoiceContext {
        channel_id,
        members: voice.voice_channel_members(channel_id),
    })
}

/// Voice membership of one guild, read from the Serenity cache.
pub struct CacheVoiceMembership<'a> {
    cache: &'a Cache,
    guild_id: GuildId,
}

impl<'a> CacheVoiceMembership<'a> {
    pub fn new(cache: &'a Cache, guild_id: GuildId) -> Self {
        Self { cache, guild_id }
    }
}

impl VoiceMembership for CacheVoiceMembership<'_> {
    fn connected_voice_channel(&self, user_id: UserId) -> Option<ChannelId> {
        let guild = self.cache.guild(self.guild_id)?;
        guild.voice_states.get(&user_id)?.channel_id
    }

    /// Bots are left out: they cannot take part in a game or receive DMs.
    fn voice_channel_members(&self, channel_id: ChannelId) -> Vec<CandidateMember> {
        let Some(guild) = self.cache.guild(self.guild_id) else {
            return Vec::new();
        };

        let mut members: Vec<CandidateMember> = guild
            .voice_states
            .values()
            .filter(|voice_state| voice_state.channel_id == Some(channel_id))
            .filter_map(|voice_state| {
                match guild
                    .members
                    .get(&voice_state.user_id)
                    .or(voice_state.member.as_ref())
                {
                    Some(member) if member.user.bot => None,
                    Some(member) => Some(CandidateMember::from(member)),
                    None => Some(CandidateMember::new(
                        voice_state.user_id,
                        voice_state.user_id.to_string(),
                    )),
                }
            })
            .collect();

        // Cache order is arbitrary; keep pool listings stable between commands.
        members.sort_by_key(|member| member.display_name.to_lowercase());
        members
    }
}
