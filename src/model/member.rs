use serenity::all::{Member, Mentionable, UserId};

/// A member eligible to take part in a selection.
///
/// This model is a borrowed snapshot of a Discord guild member, taken from the voice
/// membership provider at the moment a command runs. It carries only what the
/// selection and announcement logic needs and is never written back to Discord.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateMember {
    /// Discord user ID of the member.
    pub id: UserId,
    /// Mention string (`<@id>`) used in announcements.
    pub mention: String,
    /// Guild nickname, falling back to global display name and username.
    pub display_name: String,
}

impl CandidateMember {
    /// Builds a candidate from a user ID and display name.
    ///
    /// Used when the gateway cache knows a user is in voice but has no member data
    /// for them.
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            mention: id.mention().to_string(),
            display_name: display_name.into(),
        }
    }
}

impl From<&Member> for CandidateMember {
    fn from(member: &Member) -> Self {
        Self::new(member.user.id, member.display_name())
    }
}
