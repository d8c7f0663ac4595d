//! Capitalization rule tables for the supported citation styles.
//!
//! The tables are built once, on first use, and are never mutated afterwards, so
//! they can be shared freely between threads.

use crate::options::style::Style;
use core::fmt::{self, Display, Formatter};
use hashbrown::HashSet;
use std::sync::OnceLock;

/// A set of lowercase words.
pub type WordSet = HashSet<&'static str>;

/// Roman numerals one through ten.
pub const ROMAN_NUMERALS: [&str; 10] = ["i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x"];

/// Acronyms recognized without any custom additions.
pub const BASE_ACRONYMS: [&str; 9] = ["nasa", "fbi", "cia", "un", "nato", "us", "uk", "uae", "eu"];

/// Words every style capitalizes regardless of length.
pub const ALWAYS_CAPITALIZE: [&str; 19] = [
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "us", "uk", "uae", "eu", "un",
    "nato", "nasa", "fbi", "cia",
];

/// Articles, conjunctions and prepositions that most styles keep lowercase.
pub const LOWERCASE_WORDS: [&str; 36] = [
    "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "nor", "of", "on", "or", "so",
    "the", "to", "up", "yet", "into", "with", "within", "between", "through", "after", "before",
    "under", "over", "from", "until", "unless", "upon", "while", "via", "toward", "towards",
];

const APA_EXCEPTIONS: [&str; 18] = [
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "so", "the",
    "to", "up", "yet",
];

const APA_VERBS: [&str; 13] = [
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
];

const AP_EXTRA: [&str; 3] = ["us", "uk", "ap"];

const MLA_VERBS: [&str; 4] = ["is", "are", "was", "were"];

const NYT_EXCEPTIONS: [&str; 6] = ["that", "than", "who", "whom", "this", "when"];

const NYT_EXTRA: [&str; 3] = ["new", "york", "times"];

/// The capitalization policy of one citation style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRules {
    /// Display name, e.g. `"APA"`.
    pub name: &'static str,

    /// Human readable summary of the policy.
    pub description: &'static str,

    /// Words at least this many characters long are capitalized.
    /// Zero capitalizes every word that is not an exception.
    pub min_length: usize,

    /// Words kept lowercase unless their position forces a capital.
    pub exceptions: WordSet,

    /// Words capitalized regardless of length.
    pub always_capitalize: WordSet,
}

impl StyleRules {
    /// Returns true if a word of `length` characters passes the length rule.
    #[must_use]
    pub const fn meets_length(&self, length: usize) -> bool {
        self.min_length == 0 || length >= self.min_length
    }

    /// Returns true if the lowercase `word` stays lowercase unless forced.
    #[must_use]
    pub fn is_exception(&self, word: &str) -> bool {
        self.exceptions.contains(word)
    }

    /// Returns true if the lowercase `word` is always capitalized.
    #[must_use]
    pub fn is_always_capitalized(&self, word: &str) -> bool {
        self.always_capitalize.contains(word)
    }
}

impl Display for StyleRules {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (min length {})", self.name, self.min_length)
    }
}

/// Returns the rules for `style`.
pub fn rules_for(style: Style) -> &'static StyleRules {
    static RULES: OnceLock<[StyleRules; 5]> = OnceLock::new();

    let rules = RULES.get_or_init(|| {
        let lowercase = || set_of(&LOWERCASE_WORDS);
        let always = || set_of(&ALWAYS_CAPITALIZE);

        [
            StyleRules {
                name: "APA",
                description: "APA Style - Capitalize first word, all major words, and words with 4+ letters",
                min_length: 4,
                exceptions: set_of(&APA_EXCEPTIONS),
                always_capitalize: always().union(&set_of(&APA_VERBS)).copied().collect(),
            },
            StyleRules {
                name: "Chicago",
                description: "Chicago Manual of Style - Capitalize first word and all major words",
                min_length: 0,
                exceptions: lowercase(),
                always_capitalize: always(),
            },
            StyleRules {
                name: "AP",
                description: "Associated Press - Capitalize words with 4+ letters",
                min_length: 4,
                exceptions: lowercase(),
                always_capitalize: always().union(&set_of(&AP_EXTRA)).copied().collect(),
            },
            StyleRules {
                name: "MLA",
                description: "MLA Style - Capitalize first word and all principal words",
                min_length: 0,
                exceptions: lowercase()
                    .difference(&set_of(&MLA_VERBS))
                    .copied()
                    .collect(),
                always_capitalize: always(),
            },
            StyleRules {
                name: "NYT",
                description: "New York Times - Capitalize words with 5+ letters",
                min_length: 5,
                exceptions: lowercase()
                    .union(&set_of(&NYT_EXCEPTIONS))
                    .copied()
                    .collect(),
                always_capitalize: always().union(&set_of(&NYT_EXTRA)).copied().collect(),
            },
        ]
    });

    &rules[style.index()]
}

/// Returns true if the lowercase, letters-only `word` is a Roman numeral.
#[must_use]
pub fn is_roman_numeral(word: &str) -> bool {
    ROMAN_NUMERALS.contains(&word)
}

fn set_of(words: &[&'static str]) -> WordSet {
    words.iter().copied().collect()
}
