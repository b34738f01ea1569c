//! Character diff for highlighting a typed answer.
//!
//! This is a positional comparison: character `k` of the typed answer is
//! checked against character `k` of the expected answer. After a missing or
//! extra character everything that follows is reported as wrong. Use
//! [`super::MatchResult::differences`] when alignment matters.

use serde::{Deserialize, Serialize};

/// How a run of characters should be highlighted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiffType {
    /// Typed character equals the expected one.
    Correct,
    /// Typed character differs from the expected one.
    Wrong,
    /// Expected character with nothing typed at that position.
    Missing,
    /// Typed character past the end of the expected answer.
    Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSegment {
    /// Typed text, or the expected text for `Missing` runs.
    pub text: String,
    pub diff_type: DiffType,
}

/// Render normalized expected/typed strings as highlight segments.
pub fn render_diff(expected: &str, actual: &str) -> Vec<DiffSegment> {
    let expected: Vec<char> = expected.chars().collect();
    let actual: Vec<char> = actual.chars().collect();
    let len = expected.len().max(actual.len());

    let mut segments: Vec<DiffSegment> = Vec::new();

    for k in 0..len {
        let (ch, diff_type) = match (expected.get(k), actual.get(k)) {
            (Some(&e), Some(&a)) if e == a => (a, DiffType::Correct),
            (Some(_), Some(&a)) => (a, DiffType::Wrong),
            (Some(&e), None) => (e, DiffType::Missing),
            (None, Some(&a)) => (a, DiffType::Extra),
            (None, None) => break,
        };

        match segments.last_mut() {
            Some(last) if last.diff_type == diff_type => last.text.push(ch),
            _ => segments.push(DiffSegment {
                text: ch.to_string(),
                diff_type,
            }),
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seg(text: &str, diff_type: DiffType) -> DiffSegment {
        DiffSegment {
            text: text.to_string(),
            diff_type,
        }
    }

    #[test]
    fn test_identical_is_single_correct_run() {
        assert_eq!(
            render_diff("안녕하세요", "안녕하세요"),
            vec![seg("안녕하세요", DiffType::Correct)]
        );
    }

    #[test]
    fn test_wrong_and_missing() {
        assert_eq!(
            render_diff("학교에", "학꾜"),
            vec![
                seg("학", DiffType::Correct),
                seg("꾜", DiffType::Wrong),
                seg("에", DiffType::Missing),
            ]
        );
    }

    #[test]
    fn test_extra_characters() {
        assert_eq!(
            render_diff("물", "물을"),
            vec![seg("물", DiffType::Correct), seg("을", DiffType::Extra)]
        );
    }

    #[test]
    fn test_insertion_misaligns_the_tail() {
        // Positional comparison does not realign after the extra 'x'.
        assert_eq!(
            render_diff("abc", "axbc"),
            vec![
                seg("a", DiffType::Correct),
                seg("xb", DiffType::Wrong),
                seg("c", DiffType::Extra),
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(render_diff("", "").is_empty());
        assert_eq!(render_diff("가", ""), vec![seg("가", DiffType::Missing)]);
    }
}
