//! Heuristic headline quality score.
//!
//! The score adds up five components and is capped at 100:
//!
//! | Component | Points |
//! |---|---|
//! | Length in characters | 30 for 40–60, 20 for 30–70, 10 for 20–80 |
//! | Word count | 30 for 6–10, 20 for 4–12, 10 for 3–15 |
//! | Power words | 5 per distinct word, at most 20 |
//! | Contains a decimal digit | 10 |
//! | Emotional words | 3 per distinct word, at most 10 |

use crate::Count;
use hashbrown::HashSet;
use regex::Regex;
use std::sync::OnceLock;

/// A headline score, from 0 to 100.
pub type Score = u8;

/// Words that tend to make a headline more compelling.
pub const POWER_WORDS: [&str; 10] = [
    "how", "why", "what", "when", "top", "best", "new", "ultimate", "complete", "guide",
];

/// Words with an emotional pull.
pub const EMOTIONAL_WORDS: [&str; 6] = [
    "amazing",
    "incredible",
    "shocking",
    "unbelievable",
    "secret",
    "proven",
];

const MAX_SCORE: Score = 100;

/// Scores `text` as a headline. `word_count` is taken from the original input.
///
/// Words match case-insensitively against whole whitespace-delimited tokens, so
/// `guide:` does not count as `guide`.
///
/// # Examples
///
/// ```
/// use title_fix::headline_score;
///
/// assert_eq!(headline_score("", 0), 0);
/// assert_eq!(headline_score("   ", 0), 0);
/// // 43 characters (30), 8 words (30), "how" (5), a digit (10), "amazing" (3)
/// assert_eq!(headline_score("How to Write 10 Amazing Headlines That Sell", 8), 78);
/// ```
#[must_use]
pub fn headline_score(text: &str, word_count: Count) -> Score {
    if text.trim().is_empty() {
        return 0;
    }

    let lowered = text.to_lowercase();
    let tokens: HashSet<&str> = lowered.split_whitespace().collect();

    let score = length_points(text.chars().count())
        + word_count_points(word_count)
        + word_points(&tokens, &POWER_WORDS, 5, 20)
        + digit_points(text)
        + word_points(&tokens, &EMOTIONAL_WORDS, 3, 10);

    score.min(MAX_SCORE)
}

const fn length_points(length: usize) -> Score {
    match length {
        40..=60 => 30,
        30..=70 => 20,
        20..=80 => 10,
        _ => 0,
    }
}

const fn word_count_points(word_count: Count) -> Score {
    match word_count {
        6..=10 => 30,
        4..=12 => 20,
        3..=15 => 10,
        _ => 0,
    }
}

fn word_points(tokens: &HashSet<&str>, words: &[&str], each: Score, cap: Score) -> Score {
    let matches = words.iter().filter(|word| tokens.contains(*word)).count();
    Score::try_from(matches).map_or(cap, |matches| matches.saturating_mul(each).min(cap))
}

/// Decimal digits in any script. Fractions and letterlike numerals don't count.
fn digit_points(text: &str) -> Score {
    let has_digit = decimal_digit().map_or_else(
        || text.chars().any(|c| c.is_ascii_digit()),
        |digit| digit.is_match(text),
    );

    if has_digit { 10 } else { 0 }
}

fn decimal_digit() -> Option<&'static Regex> {
    static DIGIT: OnceLock<Option<Regex>> = OnceLock::new();
    DIGIT.get_or_init(|| Regex::new(r"\p{Nd}").ok()).as_ref()
}
