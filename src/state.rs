//! Bot state shared across all event handlers.
//!
//! This module defines the `BotState` struct which holds all shared resources the
//! event handlers need. The state is initialized once during startup, handed to the
//! Serenity event handler, and cloned cheaply wherever a handler needs to keep it.
//!
//! The state includes:
//! - Candidate pool store holding every voice channel's exclusions
//! - Application configuration
//! - Shard manager handle for the owner-only shutdown command

use serenity::all::ShardManager;
use std::sync::{Arc, OnceLock};

use crate::{config::Config, data::CandidatePoolStore};

/// Bot state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `CandidatePoolStore` shares its map through an `Arc`
/// - `Arc<Config>` and `Arc<OnceLock<..>>` are reference-counted pointers
#[derive(Clone)]
pub struct BotState {
    /// Per-voice-channel exclusion sets.
    ///
    /// The only mutable game state; lives as long as the process.
    pub pool_store: CandidatePoolStore,

    /// Application configuration loaded from the environment.
    pub config: Arc<Config>,

    /// Shard manager of the running client.
    ///
    /// Set once the client has been built, which happens after the event handler
    /// that holds this state is created.
    pub shard_manager: Arc<OnceLock<Arc<ShardManager>>>,
}

impl BotState {
    /// Creates a new bot state with an empty candidate pool store.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `BotState` - Initialized state ready for the event handler
    pub fn new(config: Config) -> Self {
        Self {
            pool_store: CandidatePoolStore::new(),
            config: Arc::new(config),
            shard_manager: Arc::new(OnceLock::new()),
        }
    }
}
