//! Case transforms other than title case, and the dispatch between all of them.

use crate::options::Options;
use crate::options::case::CaseType;
use crate::title::TitleCaser;
use regex::Regex;
use std::sync::OnceLock;

/// Applies the case type, and quote replacement if enabled, from `options` to `text`.
///
/// # Examples
///
/// ```
/// use title_fix::{CaseType, Options, transform};
///
/// let options = Options::default().with_case_type(CaseType::Alt);
/// assert_eq!(transform::convert("test text", &options), "TeSt TeXt");
/// ```
#[must_use]
pub fn convert(text: &str, options: &Options) -> String {
    let converted = match options.case_type() {
        CaseType::Title => TitleCaser::new(options).case(text),
        CaseType::Sentence => sentence_case(text),
        CaseType::Upper => text.to_uppercase(),
        CaseType::Lower => text.to_lowercase(),
        CaseType::First => first_letter_case(text),
        CaseType::Alt => alternating_case(text),
        CaseType::Toggle => toggle_case(text),
    };

    if options.straight_quotes() {
        straighten_quotes(&converted)
    } else {
        converted
    }
}

/// Uppercases the first character and lowercases the rest.
///
/// ```
/// use title_fix::transform::capitalize;
///
/// assert_eq!(capitalize("hELLO"), "Hello");
/// assert_eq!(capitalize("'quoted'"), "'quoted'");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

/// Capitalizes the first character of every sentence and lowercases everything else.
///
/// Sentences end at runs of `.`, `!` or `?`. The separators, including any whitespace
/// that follows them, are kept exactly as they were.
///
/// ```
/// use title_fix::transform::sentence_case;
///
/// assert_eq!(sentence_case("WHAT IS THIS?! HOW AMAZING..."), "What is this?! How amazing...");
/// ```
#[must_use]
pub fn sentence_case(text: &str) -> String {
    let mut cased = String::with_capacity(text.len());
    let mut start = 0;

    if let Some(separators) = sentence_separator() {
        for separator in separators.find_iter(text) {
            cased.push_str(&capitalize(&text[start..separator.start()]));
            cased.push_str(separator.as_str());
            start = separator.end();
        }
    }

    cased.push_str(&capitalize(&text[start..]));
    cased
}

/// Capitalizes every whitespace-delimited word. Runs of whitespace collapse to single spaces.
#[must_use]
pub fn first_letter_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Alternates letters between uppercase and lowercase, starting with uppercase.
///
/// Only letters advance the alternation; everything else passes through unchanged.
///
/// ```
/// use title_fix::transform::alternating_case;
///
/// assert_eq!(alternating_case("what's up"), "WhAt'S uP");
/// ```
#[must_use]
pub fn alternating_case(text: &str) -> String {
    let mut upper = true;
    let mut cased = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_alphabetic() {
            if upper {
                cased.extend(c.to_uppercase());
            } else {
                cased.extend(c.to_lowercase());
            }
            upper = !upper;
        } else {
            cased.push(c);
        }
    }

    cased
}

/// Inverts the case of every letter.
///
/// Titlecase letters, which are neither upper nor lower, are uppercased.
///
/// ```
/// use title_fix::transform::toggle_case;
///
/// assert_eq!(toggle_case("Hello World"), "hELLO wORLD");
/// assert_eq!(toggle_case("\u{1c5}"), "\u{1c4}");
/// ```
#[must_use]
pub fn toggle_case(text: &str) -> String {
    let mut toggled = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_uppercase() {
            toggled.extend(c.to_lowercase());
        } else if c.is_alphabetic() {
            toggled.extend(c.to_uppercase());
        } else {
            toggled.push(c);
        }
    }

    toggled
}

/// Replaces curly double and single quotes with straight ones.
///
/// ```
/// use title_fix::transform::straighten_quotes;
///
/// assert_eq!(straighten_quotes("\u{201c}hi\u{201d} \u{2018}there\u{2019}"), "\"hi\" 'there'");
/// ```
#[must_use]
pub fn straighten_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201c}' | '\u{201d}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect()
}

/// A run of sentence-ending punctuation and the whitespace after it.
fn sentence_separator() -> Option<&'static Regex> {
    static SEPARATOR: OnceLock<Option<Regex>> = OnceLock::new();
    SEPARATOR
        .get_or_init(|| Regex::new(r"[.!?]+\s*").ok())
        .as_ref()
}
