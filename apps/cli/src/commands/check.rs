//! `check`: grade a typed answer.

use clap::Args;
use ksrs_core::{confusion_hint, match_answer, render_diff, ConfusionHint, DiffSegment, MatchResult};
use serde::Serialize;

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// The card's answer.
    #[arg(long)]
    pub expected: String,
    /// What the learner typed.
    #[arg(long)]
    pub actual: String,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    #[serde(flatten)]
    pub result: MatchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<ConfusionHint>,
    pub diff: Vec<DiffSegment>,
}

pub fn check(args: &CheckArgs) -> CheckOutput {
    let result = match_answer(&args.expected, &args.actual);
    let hint = confusion_hint(&result.normalized_expected, &result.normalized_actual);
    let diff = render_diff(&result.normalized_expected, &result.normalized_actual);

    tracing::info!(
        similarity = result.similarity,
        is_match = result.is_match,
        differences = result.differences.len(),
        "checked answer"
    );

    CheckOutput { result, hint, diff }
}
