//! Core study library for KSRS, the Korean spaced-repetition trainer.
//!
//! Provides:
//! - SM-2 scheduling with sub-day relearning steps
//! - Answer matching for typed mode (normalization, Levenshtein distance, diffs)
//! - Hints for commonly confused Korean vowels
//! - Usefulness scoring to order new cards
//!
//! Everything here is pure and synchronous; callers own persistence.

pub mod algorithm;
pub mod error;
pub mod matching;
pub mod scoring;
pub mod types;

pub use algorithm::{
    compute_next_state, format_interval, preview_intervals, IntervalPreview, Sm2,
    SpacedRepetitionAlgorithm,
};
pub use error::{CoreError, Result};
pub use matching::{
    confusion_hint, levenshtein_distance, match_answer, normalize, normalized_similarity,
    render_diff, ConfusionHint, DiffSegment, DiffType, Difference, MatchResult, MATCH_THRESHOLD,
};
pub use scoring::{
    score, CardMetadata, ProficiencyLevel, RankedCard, ScoreResult, ScoringConfig,
    ScoringConfigOverride, UsefulnessScorer,
};
pub use types::{CardSchedulingState, Rating, DEFAULT_EASE_FACTOR, MIN_EASE_FACTOR};
