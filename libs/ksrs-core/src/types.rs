//! Core types shared by the scheduler and its callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Ease factor assigned to a card on its first review.
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Lower bound for the ease factor. There is no upper bound.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Self-reported recall quality for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// All ratings in ascending order.
    pub const ALL: [Rating; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    /// Convert to 4-point numeric value (1-4).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Again => 1,
            Self::Hard => 2,
            Self::Good => 3,
            Self::Easy => 4,
        }
    }

    /// Create from 4-point numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Again),
            2 => Some(Self::Hard),
            3 => Some(Self::Good),
            4 => Some(Self::Easy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(CoreError::InvalidRating(value))
    }
}

/// Per (user, card) scheduling memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSchedulingState {
    pub ease_factor: f64,
    /// Days until the next review; fractional values encode sub-day steps.
    pub interval_days: f64,
    /// Consecutive non-Again reviews since the last reset.
    pub repetitions: u32,
    pub due_at: DateTime<Utc>,
}

impl CardSchedulingState {
    /// State for a card reviewed for the first time at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            ease_factor: DEFAULT_EASE_FACTOR,
            interval_days: 0.0,
            repetitions: 0,
            due_at: now,
        }
    }

    /// Whether the card's scheduled review instant has been reached.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_at <= now
    }
}
