//! Random selection from a candidate pool.
//!
//! Draws members uniformly at random without replacement. The draw is a partial
//! Fisher-Yates shuffle over pool indices, so every member is equally likely to land
//! in every output position regardless of the order the pool was resolved in.

use dioxus_logger::tracing;
use rand::Rng;
use serenity::all::ChannelId;

use crate::{
    data::CandidatePoolStore,
    error::game::GameError,
    model::{member::CandidateMember, selection::SelectionResult},
};

pub struct SelectionService<'a> {
    store: &'a CandidatePoolStore,
}

impl<'a> SelectionService<'a> {
    pub fn new(store: &'a CandidatePoolStore) -> Self {
        Self { store }
    }

    /// Selects `n` members from the pool, optionally removing them from future rounds.
    ///
    /// The sample is drawn from the pool as given; exclusions are applied only after
    /// the draw completes, once per selected member.
    ///
    /// # Arguments
    /// - `channel_id` - Voice channel the pool belongs to
    /// - `pool` - Resolved candidate pool
    /// - `n` - Number of members to select
    /// - `remove_from_pool` - Exclude the selected members from this channel's pool
    ///
    /// # Returns
    /// - `Ok(SelectionResult)` - Exactly `n` distinct members from the pool
    /// - `Err(GameError::InvalidArgument)` - `n` is less than 1
    /// - `Err(GameError::InsufficientCandidates)` - `n` exceeds the pool size
    pub async fn select(
        &self,
        channel_id: ChannelId,
        pool: &[CandidateMember],
        n: i64,
        remove_from_pool: bool,
    ) -> Result<SelectionResult, GameError> {
        let result = sample_with_thread_rng(pool, n)?;

        if remove_from_pool {
            for member in &result.selected {
                self.store.exclude(channel_id, member).await;
            }

            tracing::debug!(
                "Removed {} selected members from the pool of channel {}",
                result.len(),
                channel_id
            );
        }

        Ok(result)
    }
}

/// Samples with the thread-local generator.
///
/// Kept synchronous so the non-`Send` generator never lives across an await point.
fn sample_with_thread_rng(pool: &[CandidateMember], n: i64) -> Result<SelectionResult, GameError> {
    let mut rng = rand::rng();
    sample(pool, n, &mut rng)
}

/// Draws `n` distinct members from the pool uniformly at random.
///
/// # Arguments
/// - `pool` - Members to draw from
/// - `n` - Number of members to draw
/// - `rng` - Random number generator driving the shuffle
///
/// # Returns
/// - `Ok(SelectionResult)` - Drawn members in draw order
/// - `Err(GameError::InvalidArgument)` - `n` is less than 1
/// - `Err(GameError::InsufficientCandidates)` - `n` exceeds the pool size
pub fn sample<R: Rng + ?Sized>(
    pool: &[CandidateMember],
    n: i64,
    rng: &mut R,
) -> Result<SelectionResult, GameError> {
    if n < 1 {
        return Err(GameError::InvalidArgument(format!(
            "`n` must be at least 1, got {}",
            n
        )));
    }

    let count = usize::try_from(n)
        .ok()
        .filter(|&count| count <= pool.len())
        .ok_or(GameError::InsufficientCandidates {
            requested: n,
            available: pool.len(),
        })?;

    let mut indices: Vec<usize> = (0..pool.len()).collect();
    for i in 0..count {
        let j = rng.random_range(i..pool.len());
        indices.swap(i, j);
    }

    Ok(SelectionResult {
        selected: indices[..count]
            .iter()
            .map(|&index| pool[index].clone())
            .collect(),
    })
}
