//! Fixture for a populated voice channel.

use serenity::all::Member;

use crate::serenity::{member::create_test_member, TEST_GUILD_ID};

/// First user ID handed out by the fixture; later members count up from here.
pub const FIRST_USER_ID: u64 = 200000000000000000;

/// Creates the members currently connected to a voice channel.
///
/// Each name becomes a member's username and nickname. User IDs are assigned
/// sequentially starting at `FIRST_USER_ID + offset`, so two fixtures with different
/// offsets never share a member.
///
/// # Arguments
/// - `offset` - Added to `FIRST_USER_ID` for the first member
/// - `names` - Display names of the connected members, in connection order
///
/// # Returns
/// - `Vec<Member>` - One member per name, in the same order
pub fn create_voice_channel_members(offset: u64, names: &[&str]) -> Vec<Member> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            create_test_member(
                TEST_GUILD_ID,
                FIRST_USER_ID + offset + index as u64,
                &name.to_lowercase(),
                Some(name),
            )
        })
        .collect()
}
