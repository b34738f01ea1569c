//! `review` and `preview`: drive the scheduler for one card.

use clap::Args;
use ksrs_core::{
    format_interval, preview_intervals, CardSchedulingState, IntervalPreview, Rating, Sm2,
    SpacedRepetitionAlgorithm,
};
use serde::Serialize;

use super::{parse_now, parse_state};
use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct ReviewArgs {
    /// Rating from 1 (again) to 4 (easy).
    #[arg(long, short)]
    pub rating: u8,
    /// Current scheduling state as JSON; omit for a card's first review.
    #[arg(long)]
    pub state: Option<String>,
    /// Review instant in RFC 3339; defaults to now.
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewOutput {
    pub rating: Rating,
    pub previous: CardSchedulingState,
    pub next: CardSchedulingState,
    pub interval_label: String,
}

pub fn review(args: &ReviewArgs) -> Result<ReviewOutput> {
    let rating = Rating::try_from(args.rating)?;
    let now = parse_now(args.now.as_deref())?;
    let previous = parse_state(args.state.as_deref(), now)?;

    let algorithm = Sm2::default();
    let next = algorithm.schedule(&previous, rating, now);

    tracing::info!(
        algorithm = algorithm.name(),
        rating = rating.as_str(),
        interval_days = next.interval_days,
        ease_factor = next.ease_factor,
        "scheduled review"
    );

    Ok(ReviewOutput {
        rating,
        interval_label: format_interval(next.interval_days),
        previous,
        next,
    })
}

#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    /// Current scheduling state as JSON; omit for a new card.
    #[arg(long)]
    pub state: Option<String>,
    /// Instant to preview from in RFC 3339; defaults to now.
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewOutput {
    pub is_due: bool,
    pub options: Vec<IntervalPreview>,
}

pub fn preview(args: &PreviewArgs) -> Result<PreviewOutput> {
    let now = parse_now(args.now.as_deref())?;
    let state = parse_state(args.state.as_deref(), now)?;
    let options = preview_intervals(&Sm2::default(), &state, now);

    tracing::debug!(repetitions = state.repetitions, "previewed intervals");

    Ok(PreviewOutput {
        is_due: state.is_due(now),
        options,
    })
}
