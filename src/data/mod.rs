//! In-memory data layer.
//!
//! The bot keeps no persistent storage; the only state that outlives a single
//! command is the per-voice-channel exclusion map held by `CandidatePoolStore`.
//! All reads and writes of that map go through the store's operations.

pub mod candidate_pool;

pub use candidate_pool::CandidatePoolStore;

#[cfg(test)]
mod test;
