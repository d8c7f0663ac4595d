//! Title case under a citation style.
//!
//! Each whitespace-delimited word is capitalized or lowercased by a fixed chain of rules:
//!
//! 1. The first word, the last word and any word following a word ending in `:` are
//!    always capitalized. So is the first part of a hyphenated word.
//! 2. With `preserve_uppercase`, words that were fully uppercase in the input are
//!    capitalized and stay fully uppercase.
//! 3. Words in the style's always-capitalize set are capitalized.
//! 4. Words whose letters spell a known acronym are capitalized.
//! 5. Exception words (articles, conjunctions, short prepositions) stay lowercase.
//! 6. Remaining words are capitalized if long enough for the style.
//!
//! Roman numerals and acronyms that are capitalized have every letter uppercased,
//! leaving punctuation in place, so `u.s.` becomes `U.S.`.

use crate::options::Options;
use crate::rules::{BASE_ACRONYMS, StyleRules, is_roman_numeral};
use crate::transform::capitalize;
use hashbrown::HashSet;

/// Per-call title casing context.
///
/// A `TitleCaser` only borrows the static rule tables, so independent instances can run
/// on any number of threads. The custom acronym set belongs to the instance.
#[derive(Clone, Debug)]
pub struct TitleCaser {
    rules: &'static StyleRules,
    acronyms: HashSet<String>,
    preserve_uppercase: bool,
}

impl TitleCaser {
    /// Creates a title caser for the style, custom acronyms and uppercase setting in `options`.
    ///
    /// # Examples
    ///
    /// ```
    /// use title_fix::{Options, Style, TitleCaser};
    ///
    /// let caser = TitleCaser::new(&Options::default().with_style(Style::Chicago));
    /// assert_eq!(caser.case("world war ii and chapter iv"), "World War II and Chapter IV");
    /// ```
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            rules: options.style().rules(),
            acronyms: options
                .acronyms()
                .map(|acronyms| acronyms.normalized().collect())
                .unwrap_or_default(),
            preserve_uppercase: options.preserve_uppercase(),
        }
    }

    /// Converts `text` to title case. Runs of whitespace collapse to single spaces.
    #[must_use]
    pub fn case(&self, text: &str) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        let preserved = if self.preserve_uppercase {
            uppercase_words(&words)
        } else {
            HashSet::new()
        };

        let last = words.len().saturating_sub(1);
        let mut after_colon = false;
        let mut cased = Vec::with_capacity(words.len());

        for (index, word) in words.iter().enumerate() {
            let forced = index == 0 || index == last || after_colon;

            let cased_word = if word.contains('-') {
                word.split('-')
                    .enumerate()
                    .map(|(part_index, part)| {
                        self.case_word(part, forced || part_index == 0, &preserved)
                    })
                    .collect::<Vec<_>>()
                    .join("-")
            } else {
                self.case_word(word, forced, &preserved)
            };

            after_colon = cased_word.ends_with(':');
            cased.push(cased_word);
        }

        cased.join(" ")
    }

    /// Cases one word, or one part of a hyphenated word.
    fn case_word(&self, word: &str, forced: bool, preserved: &HashSet<String>) -> String {
        let lower = word.to_lowercase();
        let is_preserved = preserved.contains(&lower);

        if !self.should_capitalize(&lower, forced, is_preserved) {
            return lower;
        }

        if is_preserved {
            return word.to_uppercase();
        }

        let letters = letters_of(&lower);
        if is_roman_numeral(&letters) || self.is_acronym(&letters) {
            uppercase_letters(word)
        } else {
            capitalize(word)
        }
    }

    /// Decides whether the lowercased `word` is capitalized. Order matters: the
    /// always-capitalize and acronym checks win over the exception list.
    fn should_capitalize(&self, word: &str, forced: bool, preserved: bool) -> bool {
        if forced || preserved || self.rules.is_always_capitalized(word) {
            return true;
        }

        if self.is_acronym(&letters_of(word)) {
            return true;
        }

        if self.rules.is_exception(word) {
            return false;
        }

        self.rules.meets_length(word.chars().count())
    }

    /// Returns true if the lowercase `letters` match a built-in or custom acronym.
    fn is_acronym(&self, letters: &str) -> bool {
        BASE_ACRONYMS.contains(&letters) || self.acronyms.contains(letters)
    }
}

/// Lowercased words, or hyphen-separated parts, that are fully uppercase.
fn uppercase_words(words: &[&str]) -> HashSet<String> {
    words
        .iter()
        .flat_map(|word| word.split('-'))
        .filter(|part| is_fully_uppercase(part))
        .map(str::to_lowercase)
        .collect()
}

/// At least one letter, and every letter uppercase. Punctuation and digits don't count.
fn is_fully_uppercase(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

fn letters_of(word: &str) -> String {
    word.chars().filter(|c| c.is_alphabetic()).collect()
}

fn uppercase_letters(word: &str) -> String {
    let mut upper = String::with_capacity(word.len());
    for c in word.chars() {
        if c.is_alphabetic() {
            upper.extend(c.to_uppercase());
        } else {
            upper.push(c);
        }
    }
    upper
}
