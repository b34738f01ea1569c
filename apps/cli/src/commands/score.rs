//! `score` and `rank`: usefulness scoring for new cards.

use std::path::PathBuf;

use clap::Args;
use ksrs_core::{CardMetadata, ScoreResult, UsefulnessScorer};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Args)]
pub struct ScoreArgs {
    /// Card tag; repeat for several.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// The card teaches a grammar pattern.
    #[arg(long)]
    pub pattern: bool,
    /// Corpus frequency rank (1 = most frequent).
    #[arg(long)]
    pub rank: Option<u32>,
    /// Fixed score replacing the computed one.
    #[arg(long)]
    pub manual: Option<f64>,
}

pub fn score(args: &ScoreArgs, config: &AppConfig) -> Result<ScoreResult> {
    let scorer = UsefulnessScorer::new(config.scoring_config()?);
    let card = CardMetadata {
        tags: args.tags.clone(),
        is_pattern: args.pattern,
        manual_score: args.manual,
        frequency_rank: args.rank,
    };

    let result = scorer.score(&card);
    tracing::info!(score = result.score, tags = card.tags.len(), "scored card");
    Ok(result)
}

#[derive(Debug, Clone, Args)]
pub struct RankArgs {
    /// JSON file with an array of cards: `{"id": ..., "tags": [...], ...}`.
    /// Ids may be any JSON value and are echoed back unchanged.
    #[arg(long)]
    pub cards: PathBuf,
    /// Only print the first N cards.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct CardInput {
    id: serde_json::Value,
    #[serde(flatten)]
    metadata: CardMetadata,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RankedOutput {
    pub id: serde_json::Value,
    pub score: u8,
    pub reasons: Vec<String>,
}

pub fn rank(args: &RankArgs, config: &AppConfig) -> Result<Vec<RankedOutput>> {
    let content = std::fs::read_to_string(&args.cards).map_err(|source| CliError::Io {
        path: args.cards.clone(),
        source,
    })?;
    let inputs: Vec<CardInput> =
        serde_json::from_str(&content).map_err(|source| CliError::InvalidJson {
            path: args.cards.clone(),
            source,
        })?;

    let scorer = UsefulnessScorer::new(config.scoring_config()?);
    let metadata: Vec<CardMetadata> = inputs.iter().map(|c| c.metadata.clone()).collect();
    let limit = args.limit.unwrap_or(inputs.len());

    let ranked: Vec<RankedOutput> = scorer
        .rank(&metadata)
        .into_iter()
        .take(limit)
        .map(|r| RankedOutput {
            id: inputs[r.index].id.clone(),
            score: r.result.score,
            reasons: r.result.reasons,
        })
        .collect();

    tracing::info!(cards = inputs.len(), returned = ranked.len(), "ranked new cards");
    Ok(ranked)
}
