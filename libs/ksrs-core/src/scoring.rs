//! Usefulness scoring for ordering never-studied cards.
//!
//! A card starts at 50 and gains or loses points for its tags, for being a
//! grammar pattern and for how frequent the word is. The result is clamped to
//! 0-100 and comes with one reason line per contribution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const BASE_SCORE: i64 = 50;
pub const MAX_SCORE: u8 = 100;

/// Bound on the combined tag contribution, in either direction.
pub const TAG_CAP: i64 = 30;

pub const DEFAULT_PATTERN_BONUS: i32 = 15;

const HIGH_FREQUENCY_RANK: u32 = 1000;
const MEDIUM_FREQUENCY_RANK: u32 = 5000;
const HIGH_FREQUENCY_BONUS: i64 = 20;
const MEDIUM_FREQUENCY_BONUS: i64 = 10;

const DEFAULT_TAG_WEIGHTS: &[(&str, i32)] = &[
    ("beginner", 10),
    ("essential", 12),
    ("greeting", 8),
    ("travel", 8),
    ("food", 6),
    ("pattern", 8),
    ("business", 6),
    ("formal", 4),
    ("daily", 6),
    ("advanced", -5),
    ("slang", -5),
    ("rare", -10),
    ("archaic", -15),
];

/// Learner proficiency, carried for callers that tune weights per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Card metadata the scorer reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardMetadata {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pattern: bool,
    /// Replaces the computed score when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_score: Option<f64>,
    /// Corpus frequency rank, 1 = most frequent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_rank: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Weights used by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub tag_weights: BTreeMap<String, i32>,
    pub pattern_bonus: i32,
    /// Reserved; frequency bands are fixed.
    pub frequency_weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_level: Option<ProficiencyLevel>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tag_weights: DEFAULT_TAG_WEIGHTS
                .iter()
                .map(|&(tag, weight)| (tag.to_string(), weight))
                .collect(),
            pattern_bonus: DEFAULT_PATTERN_BONUS,
            frequency_weight: 1.0,
            user_level: None,
        }
    }
}

/// Partial configuration (all fields optional for overrides).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfigOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_weights: Option<BTreeMap<String, i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_level: Option<ProficiencyLevel>,
}

impl ScoringConfig {
    /// Apply an override: scalars replace, tag weights merge with the override
    /// winning per tag.
    pub fn merge(&self, overrides: &ScoringConfigOverride) -> Self {
        let mut tag_weights = self.tag_weights.clone();
        if let Some(extra) = &overrides.tag_weights {
            tag_weights.extend(extra.iter().map(|(tag, weight)| (tag.clone(), *weight)));
        }

        Self {
            tag_weights,
            pattern_bonus: overrides.pattern_bonus.unwrap_or(self.pattern_bonus),
            frequency_weight: overrides.frequency_weight.unwrap_or(self.frequency_weight),
            user_level: overrides.user_level.or(self.user_level),
        }
    }

    fn weight(&self, tag: &str) -> i32 {
        self.tag_weights.get(tag).copied().unwrap_or(0)
    }
}

/// A card's position in the introduction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCard {
    /// Index into the slice passed to [`UsefulnessScorer::rank`].
    pub index: usize,
    pub result: ScoreResult,
}

/// Scorer bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct UsefulnessScorer {
    config: ScoringConfig,
}

impl UsefulnessScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, card: &CardMetadata) -> ScoreResult {
        score_with(card, &self.config)
    }

    /// Score a batch of cards and order them for introduction, highest first.
    /// Ties keep their input order.
    pub fn rank(&self, cards: &[CardMetadata]) -> Vec<RankedCard> {
        let mut ranked: Vec<RankedCard> = cards
            .iter()
            .enumerate()
            .map(|(index, card)| RankedCard {
                index,
                result: self.score(card),
            })
            .collect();
        ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        ranked
    }
}

/// Score a card with the given configuration, or the default one.
pub fn score(card: &CardMetadata, config: Option<&ScoringConfig>) -> ScoreResult {
    match config {
        Some(config) => score_with(card, config),
        None => score_with(card, &ScoringConfig::default()),
    }
}

fn score_with(card: &CardMetadata, config: &ScoringConfig) -> ScoreResult {
    if let Some(manual) = card.manual_score {
        return ScoreResult {
            score: clamp_manual(manual),
            reasons: vec!["manual override".to_string()],
        };
    }

    let mut reasons = vec![format!("base score {BASE_SCORE}")];

    let mut tag_sum: i64 = 0;
    for tag in &card.tags {
        let weight = config.weight(tag);
        if weight != 0 {
            tag_sum += i64::from(weight);
            reasons.push(format!("tag '{tag}': {weight:+}"));
        }
    }
    let tag_total = tag_sum.clamp(-TAG_CAP, TAG_CAP);
    if tag_total != tag_sum {
        reasons.push(format!("tag total {tag_sum:+} capped to {tag_total:+}"));
    }

    let mut pattern_total: i64 = 0;
    if card.is_pattern {
        pattern_total = i64::from(config.pattern_bonus);
        reasons.push(format!("grammar pattern: {pattern_total:+}"));
    }

    let mut frequency_total: i64 = 0;
    if let Some(rank) = card.frequency_rank {
        let (band, bonus) = if rank <= HIGH_FREQUENCY_RANK {
            ("high-frequency", HIGH_FREQUENCY_BONUS)
        } else if rank <= MEDIUM_FREQUENCY_RANK {
            ("medium-frequency", MEDIUM_FREQUENCY_BONUS)
        } else {
            ("low-frequency", 0)
        };
        frequency_total = bonus;
        reasons.push(format!("{band} (rank {rank}): {bonus:+}"));
    }

    let total = BASE_SCORE + tag_total + pattern_total + frequency_total;

    ScoreResult {
        score: total.clamp(0, i64::from(MAX_SCORE)) as u8,
        reasons,
    }
}

fn clamp_manual(manual: f64) -> u8 {
    if manual.is_nan() {
        return 0;
    }
    manual.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}
