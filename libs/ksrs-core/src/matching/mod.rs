//! Answer matching for typed mode study sessions.
//!
//! Both strings are normalized (whitespace and punctuation dropped, lower-cased)
//! and compared by Levenshtein distance over Unicode scalar values, so a
//! Hangul syllable counts as one character.

pub mod diff;
pub mod hints;

use serde::{Deserialize, Serialize};

pub use diff::{render_diff, DiffSegment, DiffType};
pub use hints::{confusion_hint, ConfusionHint};

/// Minimum similarity for a typed answer to count as correct.
pub const MATCH_THRESHOLD: f64 = 0.95;

/// Characters removed during normalization, in addition to all whitespace.
const IGNORED_PUNCTUATION: &[char] = &[
    // ASCII
    '.', ',', '!', '?', ';', ':', '\'', '"', '`', '(', ')', '[', ']', '{', '}', '<', '>', '-',
    '_', '~', '/', '\\',
    // CJK and typographic
    '。', '、', '，', '．', '！', '？', '；', '：', '「', '」', '『', '』', '【', '】', '《', '》',
    '〈', '〉', '（', '）', '［', '］', '｛', '｝', '〔', '〕', '・', '·', '‘', '’', '“', '”', '～',
    '〜', '…', '—', '–',
];

/// Result of comparing a typed answer to the expected answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_match: bool,
    /// Similarity score between 0.0 and 1.0.
    pub similarity: f64,
    pub normalized_expected: String,
    pub normalized_actual: String,
    /// Edit operations turning the expected answer into the typed one.
    pub differences: Vec<Difference>,
}

/// One edit operation. `position` indexes into the normalized expected string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Difference {
    /// The typed answer has a character the expected one lacks.
    Insert { position: usize, actual: char },
    /// The typed answer is missing an expected character.
    Delete { position: usize, expected: char },
    Replace {
        position: usize,
        expected: char,
        actual: char,
    },
}

/// Strip whitespace and punctuation, then lower-case.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && !IGNORED_PUNCTUATION.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare a typed answer to the expected answer.
pub fn match_answer(expected: &str, actual: &str) -> MatchResult {
    let normalized_expected = normalize(expected);
    let normalized_actual = normalize(actual);

    if normalized_expected == normalized_actual {
        return MatchResult {
            is_match: true,
            similarity: 1.0,
            normalized_expected,
            normalized_actual,
            differences: Vec::new(),
        };
    }

    let similarity = normalized_similarity(&normalized_expected, &normalized_actual);
    let differences = differences(&normalized_expected, &normalized_actual);

    MatchResult {
        is_match: similarity >= MATCH_THRESHOLD,
        similarity,
        normalized_expected,
        normalized_actual,
        differences,
    }
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows of the (m+1) x (n+1) table are enough.
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            curr[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j] // deletion
                    .min(curr[j - 1]) // insertion
                    .min(prev[j - 1]) // substitution
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate normalized similarity (0.0 to 1.0) based on Levenshtein distance.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0; // Both empty strings are identical
    }

    let distance = levenshtein_distance(a, b);
    debug_assert!(distance <= max_len, "distance {distance} exceeds length {max_len}");
    1.0 - (distance as f64 / max_len as f64)
}

/// Walk both strings with one cursor each and classify divergences.
///
/// A mismatch is an insert when the typed string's next character realigns
/// with the expected one, a delete when the expected string's next character
/// realigns with the typed one, and a replace otherwise.
pub fn differences(expected: &str, actual: &str) -> Vec<Difference> {
    let expected: Vec<char> = expected.chars().collect();
    let actual: Vec<char> = actual.chars().collect();
    let limit = 2 * expected.len().max(actual.len());

    let mut result = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while result.len() <= limit {
        match (expected.get(i), actual.get(j)) {
            (None, None) => break,
            (None, Some(&a)) => {
                result.push(Difference::Insert { position: i, actual: a });
                j += 1;
            }
            (Some(&e), None) => {
                result.push(Difference::Delete { position: i, expected: e });
                i += 1;
            }
            (Some(&e), Some(&a)) if e == a => {
                i += 1;
                j += 1;
            }
            (Some(&e), Some(&a)) => {
                if actual.get(j + 1) == Some(&e) {
                    result.push(Difference::Insert { position: i, actual: a });
                    j += 1;
                } else if expected.get(i + 1) == Some(&a) {
                    result.push(Difference::Delete { position: i, expected: e });
                    i += 1;
                } else {
                    result.push(Difference::Replace {
                        position: i,
                        expected: e,
                        actual: a,
                    });
                    i += 1;
                    j += 1;
                }
            }
        }
    }

    result
}
