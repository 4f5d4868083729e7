use std::{str::FromStr, time::Duration};

use dioxus_logger::tracing::Level;
use serenity::all::GuildId;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_HELP_FILE_PATH: &str = "data/help.md";
const DEFAULT_DELETE_AFTER_SECS: u64 = 5;
const DEFAULT_DM_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub discord_bot_token: String,

    /// Text file whose contents `/help` replies with.
    pub help_file_path: String,
    /// Images attached to the "please allow DMs" reply.
    pub allow_dms_instructions_paths: Vec<String>,

    /// Lifetime of throwaway acknowledgements such as `/test`.
    pub delete_after: Duration,
    /// Upper bound on delivering a single direct message.
    pub dm_timeout: Duration,

    /// Registers commands to this guild only, so changes show up immediately.
    pub debug_guild_id: Option<GuildId>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            help_file_path: std::env::var("HELP_FILE_PATH")
                .unwrap_or_else(|_| DEFAULT_HELP_FILE_PATH.to_string()),
            allow_dms_instructions_paths: std::env::var("ALLOW_DMS_INSTRUCTIONS_PATHS")
                .map(|paths| split_paths(&paths))
                .unwrap_or_default(),
            delete_after: Duration::from_secs(
                parse_optional("DELETE_AFTER_SECS")?.unwrap_or(DEFAULT_DELETE_AFTER_SECS),
            ),
            dm_timeout: Duration::from_secs(
                parse_optional("DM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_DM_TIMEOUT_SECS),
            ),
            debug_guild_id: parse_optional::<u64>("DEBUG_GUILD_ID")?.map(GuildId::new),
            log_level: parse_optional("LOG_LEVEL")?.unwrap_or(Level::INFO),
        })
    }
}

/// Reads an optional environment variable and parses it.
///
/// # Returns
/// - `Ok(None)` - Variable is not set
/// - `Ok(Some(T))` - Variable parsed successfully
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but fails to parse
fn parse_optional<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

/// Splits a comma-separated path list, dropping empty entries.
fn split_paths(paths: &str) -> Vec<String> {
    paths
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}
