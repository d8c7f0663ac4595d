//! Letter-casing transforms that can be applied to text.

use crate::error::Error;
use clap::ValueEnum;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Which casing transform to apply.
///
/// # Examples
///
/// ```
/// use title_fix::CaseType;
///
/// assert_eq!(CaseType::default(), CaseType::Title);
/// assert_eq!(CaseType::Alt.to_string(), "alt");
/// assert_eq!(CaseType::Toggle.label(), "TOGGLE");
/// assert_eq!(CaseType::resolve("UPPER"), Some(CaseType::Upper));
/// assert!("Upper".parse::<CaseType>().is_err());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    PartialOrd,
    Ord,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    /// Title case under a citation style.
    #[default]
    Title,
    /// First letter of each sentence capitalized, the rest lowercase.
    Sentence,
    /// Every letter uppercase.
    Upper,
    /// Every letter lowercase.
    Lower,
    /// First letter of each word capitalized.
    First,
    /// Letters alternate upper and lower, starting upper.
    Alt,
    /// Every letter has its case inverted.
    Toggle,
}

impl CaseType {
    /// Every case type, in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::Sentence,
        Self::Upper,
        Self::Lower,
        Self::First,
        Self::Alt,
        Self::Toggle,
    ];

    /// The canonical lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Sentence => "sentence",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::First => "first",
            Self::Alt => "alt",
            Self::Toggle => "toggle",
        }
    }

    /// The uppercased identifier echoed in results.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Sentence => "SENTENCE",
            Self::Upper => "UPPER",
            Self::Lower => "LOWER",
            Self::First => "FIRST",
            Self::Alt => "ALT",
            Self::Toggle => "TOGGLE",
        }
    }

    /// Matches a case type name case-insensitively, returning `None` if unrecognized.
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|case_type| case_type.as_str() == name)
    }

    /// Returns true if this case type consults a citation style.
    #[must_use]
    pub const fn uses_style(&self) -> bool {
        matches!(self, Self::Title)
    }
}

impl Display for CaseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing: only the exact canonical identifiers are accepted.
impl FromStr for CaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|case_type| case_type.as_str() == s)
            .ok_or_else(|| {
                Error::invalid(format!(
                    "invalid case_type. Must be one of: {}",
                    Self::ALL.map(|case_type| case_type.as_str()).join(", ")
                ))
            })
    }
}
