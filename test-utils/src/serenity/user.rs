//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values. The user
/// is never a bot and has no avatar or global display name.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Discord username
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str) -> User {
    serde_json::from_value(user_json(user_id, username))
        .expect("Failed to create test user - invalid JSON structure")
}

/// Raw JSON payload for a user, shared with the member and voice state factories.
pub(crate) fn user_json(user_id: u64, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "global_name": null,
        "avatar": null,
        "bot": false,
        "system": false,
        "public_flags": 0,
    })
}
