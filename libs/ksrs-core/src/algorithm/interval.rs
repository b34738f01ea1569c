//! Human-readable interval labels and per-rating previews.

use super::SpacedRepetitionAlgorithm;
use crate::types::{CardSchedulingState, Rating};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Short label for an interval: `"10m"`, `"3h"`, `"5d"`, `"2w"`, `"4mo"`.
pub fn format_interval(days: f64) -> String {
    let days = days.max(0.0);

    if days < 1.0 {
        let minutes = days * 1440.0;
        if minutes < 60.0 {
            format!("{}m", minutes.round() as u64)
        } else {
            format!("{}h", (days * 24.0).round() as u64)
        }
    } else if days < 14.0 {
        format!("{}d", days.round() as u64)
    } else if days < 60.0 {
        format!("{}w", (days / 7.0).round() as u64)
    } else {
        format!("{}mo", (days / 30.0).round() as u64)
    }
}

/// Projected outcome of answering a card with one rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalPreview {
    pub rating: Rating,
    pub interval_days: f64,
    pub label: String,
}

/// Project the next interval for every rating.
///
/// Uses the same scheduler that records the review, so the labels shown on
/// rating buttons always agree with the stored outcome.
pub fn preview_intervals(
    algorithm: &dyn SpacedRepetitionAlgorithm,
    state: &CardSchedulingState,
    now: DateTime<Utc>,
) -> Vec<IntervalPreview> {
    Rating::ALL
        .iter()
        .map(|&rating| {
            let next = algorithm.schedule(state, rating, now);
            IntervalPreview {
                rating,
                interval_days: next.interval_days,
                label: format_interval(next.interval_days),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Sm2;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sub_day_labels() {
        assert_eq!(format_interval(0.0), "0m");
        assert_eq!(format_interval(1.0 / 1440.0), "1m");
        assert_eq!(format_interval(10.0 / 1440.0), "10m");
        assert_eq!(format_interval(0.5), "12h");
    }

    #[test]
    fn test_day_week_month_labels() {
        assert_eq!(format_interval(1.0), "1d");
        assert_eq!(format_interval(7.8), "8d");
        assert_eq!(format_interval(15.0), "2w");
        assert_eq!(format_interval(37.5), "5w");
        assert_eq!(format_interval(60.0), "2mo");
        assert_eq!(format_interval(365.0), "12mo");
    }

    #[test]
    fn test_preview_covers_every_rating() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let sm2 = Sm2::default();
        let state = sm2.initial_state(now);

        let labels: Vec<(Rating, String)> = preview_intervals(&sm2, &state, now)
            .into_iter()
            .map(|p| (p.rating, p.label))
            .collect();

        assert_eq!(
            labels,
            vec![
                (Rating::Again, "1m".to_string()),
                (Rating::Hard, "1d".to_string()),
                (Rating::Good, "1d".to_string()),
                (Rating::Easy, "4d".to_string()),
            ]
        );
    }
}
