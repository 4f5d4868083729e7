//! Test factory for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

use super::member::member_json;

/// Creates a test Serenity VoiceState for a user.
///
/// A `channel_id` of `None` represents a user who has just disconnected from voice,
/// which is how Discord reports a voice channel leave. The embedded member uses the
/// user ID as its username.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the voice state belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `channel_id` - Voice channel the user is connected to, if any
///
/// # Returns
/// - `VoiceState` - A valid Serenity VoiceState struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(guild_id: u64, user_id: u64, channel_id: Option<u64>) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": member_json(guild_id, user_id, &user_id.to_string(), None),
        "session_id": format!("session-{}", user_id),
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
