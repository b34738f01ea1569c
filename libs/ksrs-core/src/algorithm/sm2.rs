//! SM-2 spaced repetition algorithm.
//!
//! Based on SuperMemo 2 with a one-minute relearning step for lapses and
//! configurable growth parameters.

use super::SpacedRepetitionAlgorithm;
use crate::types::{CardSchedulingState, Rating, DEFAULT_EASE_FACTOR, MIN_EASE_FACTOR};
use chrono::{DateTime, Duration, Utc};

const MINUTES_PER_DAY: f64 = 1440.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// SM-2 algorithm with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub easy_bonus: f64,
    pub hard_multiplier: f64,
    pub graduating_interval: f64,
    pub easy_interval: f64,
    pub second_interval: f64,
    pub relearning_interval: f64,
    /// Upper bound on any scheduled interval, in days.
    pub maximum_interval: f64,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: DEFAULT_EASE_FACTOR,
            minimum_ease: MIN_EASE_FACTOR,
            easy_bonus: 1.3,
            hard_multiplier: 1.2,
            graduating_interval: 1.0,
            easy_interval: 4.0,
            second_interval: 6.0,
            relearning_interval: 1.0 / MINUTES_PER_DAY,
            maximum_interval: 36500.0,
        }
    }
}

impl SpacedRepetitionAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_state(&self, now: DateTime<Utc>) -> CardSchedulingState {
        CardSchedulingState {
            ease_factor: self.initial_ease,
            interval_days: 0.0,
            repetitions: 0,
            due_at: now,
        }
    }

    fn schedule(
        &self,
        state: &CardSchedulingState,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> CardSchedulingState {
        let ease_factor = self.next_ease(state.ease_factor, rating);
        let (interval_days, repetitions) = match rating {
            Rating::Again => (self.relearning_interval, 0),
            _ => (
                self.next_interval(state, rating).min(self.maximum_interval),
                state.repetitions + 1,
            ),
        };

        CardSchedulingState {
            ease_factor,
            interval_days,
            repetitions,
            due_at: due_after(now, interval_days),
        }
    }
}

impl Sm2 {
    fn next_ease(&self, current: f64, rating: Rating) -> f64 {
        let delta = match rating {
            Rating::Again => -0.20,
            Rating::Hard => -0.15,
            Rating::Good => 0.0,
            Rating::Easy => 0.15,
        };
        // Two decimals keeps repeated adjustments from drifting (2.35, not 2.3499999).
        let ease = ((current + delta) * 100.0).round() / 100.0;
        ease.max(self.minimum_ease)
    }

    /// Interval for a non-Again rating. Growth uses the ease the card entered
    /// the review with.
    fn next_interval(&self, state: &CardSchedulingState, rating: Rating) -> f64 {
        match state.repetitions {
            0 => match rating {
                Rating::Easy => self.easy_interval,
                _ => self.graduating_interval,
            },
            1 => match rating {
                Rating::Easy => self.second_interval * self.easy_bonus,
                Rating::Hard => self.second_interval * self.hard_multiplier,
                _ => self.second_interval,
            },
            _ => {
                let current = state.interval_days.max(0.0);
                match rating {
                    Rating::Hard => current * self.hard_multiplier,
                    Rating::Easy => current * state.ease_factor * self.easy_bonus,
                    _ => current * state.ease_factor,
                }
            }
        }
    }
}

fn due_after(now: DateTime<Utc>, interval_days: f64) -> DateTime<Utc> {
    let millis = (interval_days * MILLIS_PER_DAY).round() as i64;
    now.checked_add_signed(Duration::milliseconds(millis))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
