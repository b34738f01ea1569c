//! Command tests.
//!
//! These drive the command functions the binary dispatches to, with explicit
//! timestamps and temporary files so the results are deterministic.

use std::io::Write;
use std::path::PathBuf;

use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;

use ksrs_cli::commands::check::{check, CheckArgs};
use ksrs_cli::commands::review::{preview, review, PreviewArgs, ReviewArgs};
use ksrs_cli::commands::score::{rank, score, RankArgs, ScoreArgs};
use ksrs_cli::config::AppConfig;
use ksrs_cli::error::CliError;
use ksrs_core::{CardSchedulingState, CoreError, DiffType, Rating};

const NOW: &str = "2024-05-10T12:00:00Z";

fn json_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// First review rated Good schedules the card one day out.
#[test]
fn test_review_first_good() {
    let output = review(&ReviewArgs {
        rating: 3,
        state: None,
        now: Some(NOW.to_string()),
    })
    .unwrap();

    let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
    assert_eq!(output.rating, Rating::Good);
    assert_eq!(output.previous, CardSchedulingState::new(now));
    assert_eq!(output.next.interval_days, 1.0);
    assert_eq!(output.next.repetitions, 1);
    assert_eq!(output.next.due_at, now + Duration::days(1));
    assert_eq!(output.interval_label, "1d");
}

/// An established card can be fed back in as JSON.
#[test]
fn test_review_established_card_from_json() {
    let state = r#"{"ease_factor": 2.5, "interval_days": 15.0, "repetitions": 4, "due_at": "2024-05-10T08:00:00Z"}"#;
    let output = review(&ReviewArgs {
        rating: 2,
        state: Some(state.to_string()),
        now: Some(NOW.to_string()),
    })
    .unwrap();

    assert!((output.next.interval_days - 18.0).abs() < 1e-9);
    assert!((output.next.ease_factor - 2.35).abs() < 1e-9);
    assert_eq!(output.next.repetitions, 5);
    assert_eq!(output.interval_label, "3w");
}

/// A stored interval far past the calendar range is capped, not a crash.
#[test]
fn test_review_caps_oversized_interval() {
    let state = r#"{"ease_factor": 2.5, "interval_days": 1.0e8, "repetitions": 5, "due_at": "2024-05-10T08:00:00Z"}"#;
    let output = review(&ReviewArgs {
        rating: 4,
        state: Some(state.to_string()),
        now: Some(NOW.to_string()),
    })
    .unwrap();

    let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
    assert_eq!(output.next.interval_days, 36500.0);
    assert_eq!(output.next.due_at, now + Duration::days(36500));
    assert_eq!(output.interval_label, "1217mo");
}

/// Ratings outside 1-4 are rejected before scheduling.
#[test]
fn test_review_rejects_invalid_rating() {
    let err = review(&ReviewArgs {
        rating: 5,
        state: None,
        now: Some(NOW.to_string()),
    })
    .unwrap_err();

    assert!(matches!(err, CliError::Core(CoreError::InvalidRating(5))));
}

/// Malformed state JSON surfaces as an invalid state error.
#[test]
fn test_review_rejects_bad_state() {
    let err = review(&ReviewArgs {
        rating: 3,
        state: Some("{\"ease_factor\": \"high\"}".to_string()),
        now: Some(NOW.to_string()),
    })
    .unwrap_err();

    assert!(matches!(err, CliError::InvalidState(_)));
}

/// Preview lists all four ratings with labels from the same scheduler.
#[test]
fn test_preview_second_review() {
    let state = r#"{"ease_factor": 2.5, "interval_days": 1.0, "repetitions": 1, "due_at": "2024-05-11T12:00:00Z"}"#;
    let output = preview(&PreviewArgs {
        state: Some(state.to_string()),
        now: Some(NOW.to_string()),
    })
    .unwrap();

    assert!(!output.is_due);
    let labels: Vec<&str> = output.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["1m", "7d", "6d", "8d"]);
}

/// A vowel slip in a short word fails the match but produces a hint.
#[test]
fn test_check_reports_hint_and_diff() {
    let output = check(&CheckArgs {
        expected: "게".to_string(),
        actual: "개".to_string(),
    });

    assert!(!output.result.is_match);
    assert_eq!(output.result.similarity, 0.0);
    assert!(output.hint.is_some());
    assert_eq!(output.diff.len(), 1);
    assert_eq!(output.diff[0].diff_type, DiffType::Wrong);
}

/// Spacing and punctuation differences still match.
#[test]
fn test_check_ignores_spacing_and_punctuation() {
    let output = check(&CheckArgs {
        expected: "만나서 반갑습니다.".to_string(),
        actual: "만나서반갑습니다".to_string(),
    });

    assert!(output.result.is_match);
    assert!(output.hint.is_none());

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["is_match"], true);
    assert_eq!(json["normalized_expected"], "만나서반갑습니다");
}

/// Score with the default weights.
#[test]
fn test_score_defaults() {
    let result = score(
        &ScoreArgs {
            tags: vec!["beginner".to_string(), "travel".to_string()],
            pattern: false,
            rank: None,
            manual: None,
        },
        &AppConfig::default(),
    )
    .unwrap();

    assert_eq!(result.score, 68);
}

/// The configured override file changes the result.
#[test]
fn test_score_with_override_file() {
    let weights = json_file(r#"{"tag_weights": {"travel": -8}}"#);
    let config = AppConfig {
        scoring_config_path: Some(weights.path().to_path_buf()),
        ..Default::default()
    };

    let result = score(
        &ScoreArgs {
            tags: vec!["beginner".to_string(), "travel".to_string()],
            pattern: true,
            rank: Some(40),
            manual: None,
        },
        &config,
    )
    .unwrap();

    // 50 + (10 - 8) + 15 + 20
    assert_eq!(result.score, 87);
}

/// Rank orders cards by score and honors the limit.
#[test]
fn test_rank_orders_by_score() {
    let cards = json_file(
        r#"[
            {"id": "annyeong", "tags": ["greeting", "beginner"], "frequency_rank": 120},
            {"id": "gojeon", "tags": ["archaic"]},
            {"id": "eoseo", "tags": ["pattern"], "is_pattern": true},
            {"id": "pinned", "manual_score": 99}
        ]"#,
    );

    let ranked = rank(
        &RankArgs {
            cards: cards.path().to_path_buf(),
            limit: Some(3),
        },
        &AppConfig::default(),
    )
    .unwrap();

    let ids: Vec<(&str, u8)> = ranked
        .iter()
        .map(|r| (r.id.as_str().unwrap(), r.score))
        .collect();
    assert_eq!(ids, vec![("pinned", 99), ("annyeong", 88), ("eoseo", 73)]);
}

/// Numeric ids from a database export are accepted and echoed back.
#[test]
fn test_rank_accepts_numeric_ids() {
    let cards = json_file(
        r#"[
            {"id": 7, "tags": ["rare"]},
            {"id": 12, "tags": ["essential"]}
        ]"#,
    );

    let ranked = rank(
        &RankArgs {
            cards: cards.path().to_path_buf(),
            limit: None,
        },
        &AppConfig::default(),
    )
    .unwrap();

    let ids: Vec<serde_json::Value> = ranked.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![serde_json::json!(12), serde_json::json!(7)]);
}

/// A missing cards file is reported with its path.
#[test]
fn test_rank_missing_file() {
    let err = rank(
        &RankArgs {
            cards: PathBuf::from("/nonexistent/cards.json"),
            limit: None,
        },
        &AppConfig::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("/nonexistent/cards.json"));
}
