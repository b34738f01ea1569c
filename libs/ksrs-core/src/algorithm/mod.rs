//! Spaced repetition scheduling.

pub mod interval;
pub mod sm2;

use crate::types::{CardSchedulingState, Rating};
use chrono::{DateTime, Utc};

pub use interval::{format_interval, preview_intervals, IntervalPreview};
pub use sm2::Sm2;

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the next scheduling state after a review at `now`.
    fn schedule(
        &self,
        state: &CardSchedulingState,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> CardSchedulingState;

    /// Initial state for a card reviewed for the first time at `now`.
    fn initial_state(&self, now: DateTime<Utc>) -> CardSchedulingState;
}

/// Next scheduling state using the default SM-2 parameters.
pub fn compute_next_state(
    state: &CardSchedulingState,
    rating: Rating,
    now: DateTime<Utc>,
) -> CardSchedulingState {
    Sm2::default().schedule(state, rating, now)
}
