//! Citation styles for title case.

use crate::error::Error;
use crate::rules::{StyleRules, rules_for};
use clap::ValueEnum;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Citation style consulted by title case.
///
/// # Examples
///
/// ```
/// use title_fix::Style;
///
/// assert_eq!(Style::default(), Style::Apa);
/// assert_eq!(Style::Chicago.to_string(), "chicago");
/// assert_eq!(Style::Nyt.label(), "NYT");
/// assert_eq!(Style::resolve("ChIcAgO"), Some(Style::Chicago));
/// assert_eq!(Style::resolve("harvard"), None);
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
pub enum Style {
    /// American Psychological Association.
    #[default]
    Apa,
    /// Chicago Manual of Style.
    Chicago,
    /// Associated Press.
    Ap,
    /// Modern Language Association.
    Mla,
    /// New York Times.
    Nyt,
}

impl Style {
    /// Every style, in canonical order.
    pub const ALL: [Self; 5] = [Self::Apa, Self::Chicago, Self::Ap, Self::Mla, Self::Nyt];

    /// The canonical lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Apa => "apa",
            Self::Chicago => "chicago",
            Self::Ap => "ap",
            Self::Mla => "mla",
            Self::Nyt => "nyt",
        }
    }

    /// The uppercased identifier echoed in results.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Apa => "APA",
            Self::Chicago => "CHICAGO",
            Self::Ap => "AP",
            Self::Mla => "MLA",
            Self::Nyt => "NYT",
        }
    }

    /// Matches a style name case-insensitively, returning `None` if unrecognized.
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|style| style.as_str() == name)
    }

    /// The capitalization rules of this style.
    #[must_use]
    pub fn rules(&self) -> &'static StyleRules {
        rules_for(*self)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing: only the exact canonical identifiers are accepted.
impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                Error::invalid(format!(
                    "invalid style. Must be one of: {}",
                    Self::ALL.map(|style| style.as_str()).join(", ")
                ))
            })
    }
}
