//! Advisory hints for commonly confused Korean vowels.

use serde::Serialize;

const AE_E: &str = "ㅐ and ㅔ sound almost the same; check which one the word is spelled with.";
const YAE_YE: &str = "ㅒ and ㅖ sound almost the same; check which one the word is spelled with.";
const WAE_WE_OE: &str = "ㅙ, ㅞ and ㅚ are pronounced alike; check the spelling.";
const EO_O: &str = "ㅓ and ㅗ are easy to mix up; check which way the short stroke points.";
const YEO_YO: &str = "ㅕ and ㅛ are easy to mix up; check which way the short strokes point.";
const U_EU: &str = "ㅜ has a short stroke below the line; ㅡ is a single flat line.";
const UI_I: &str = "ㅢ is often pronounced like ㅣ; check the spelling.";

/// Closed set of confusable vowel pairs. Lookup is symmetric.
const VOWEL_CONFUSIONS: &[(char, char, &str)] = &[
    ('ㅐ', 'ㅔ', AE_E),
    ('ㅒ', 'ㅖ', YAE_YE),
    ('ㅙ', 'ㅞ', WAE_WE_OE),
    ('ㅙ', 'ㅚ', WAE_WE_OE),
    ('ㅞ', 'ㅚ', WAE_WE_OE),
    ('ㅓ', 'ㅗ', EO_O),
    ('ㅕ', 'ㅛ', YEO_YO),
    ('ㅜ', 'ㅡ', U_EU),
    ('ㅢ', 'ㅣ', UI_I),
];

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const FIRST_VOWEL_JAMO: u32 = 0x314F;
const MEDIALS: u32 = 21;
const FINALS: u32 = 28;

/// A same-position vowel confusion between the expected and typed answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusionHint {
    /// Character index into the compared strings.
    pub position: usize,
    pub expected: char,
    pub actual: char,
    pub message: &'static str,
}

/// Find the first position where the typed character is a known confusable
/// of the expected one.
///
/// Bare vowel jamo are compared directly. Precomposed syllables are compared
/// by their vowel when the surrounding consonants agree, so 개 typed for 게 is
/// reported. Callers pass normalized strings.
pub fn confusion_hint(expected: &str, actual: &str) -> Option<ConfusionHint> {
    expected
        .chars()
        .zip(actual.chars())
        .enumerate()
        .find_map(|(position, (e, a))| {
            hint_for(e, a).map(|message| ConfusionHint {
                position,
                expected: e,
                actual: a,
                message,
            })
        })
}

fn hint_for(expected: char, actual: char) -> Option<&'static str> {
    if expected == actual {
        return None;
    }
    if let Some(message) = confusable(expected, actual) {
        return Some(message);
    }

    let (e, a) = (Syllable::decompose(expected)?, Syllable::decompose(actual)?);
    if e.initial == a.initial && e.final_index == a.final_index {
        confusable(e.vowel, a.vowel)
    } else {
        None
    }
}

fn confusable(expected: char, actual: char) -> Option<&'static str> {
    VOWEL_CONFUSIONS
        .iter()
        .find(|(x, y, _)| (*x == expected && *y == actual) || (*x == actual && *y == expected))
        .map(|(_, _, message)| *message)
}

struct Syllable {
    initial: u32,
    vowel: char,
    final_index: u32,
}

impl Syllable {
    fn decompose(c: char) -> Option<Self> {
        let code = c as u32;
        if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
            return None;
        }
        let index = code - SYLLABLE_BASE;
        let medial = (index / FINALS) % MEDIALS;
        Some(Self {
            initial: index / (MEDIALS * FINALS),
            vowel: char::from_u32(FIRST_VOWEL_JAMO + medial)?,
            final_index: index % FINALS,
        })
    }
}
