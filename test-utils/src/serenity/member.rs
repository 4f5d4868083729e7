//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use super::user::user_json;

/// Creates a test Serenity Member with customizable fields.
///
/// Creates a guild Member by deserializing JSON with the provided values. The member
/// has no roles, no avatar, and joined the guild at a fixed timestamp.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Discord username
/// - `nick` - Optional guild nickname, used as the display name when present
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(1, 200, "alice", Some("Alice"));
/// assert_eq!(member.display_name(), "Alice");
/// ```
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
) -> Member {
    serde_json::from_value(member_json(guild_id, user_id, username, nick))
        .expect("Failed to create test member - invalid JSON structure")
}

pub(crate) fn member_json(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user_json(user_id, username),
        "nick": nick,
        "avatar": null,
        "roles": [],
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    })
}
