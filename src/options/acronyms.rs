//! Caller-supplied acronyms merged into the built-in acronym set.

use core::fmt::{self, Display, Formatter};
use core::ops::Deref;
use serde::{Deserialize, Serialize};

/// Collection of raw acronym strings as supplied by the caller.
pub type AcronymList = Vec<String>;

/// Extra acronyms to render fully uppercase for a single conversion.
///
/// Entries match case-insensitively. Blank entries never match anything.
///
/// # Examples
///
/// ```
/// use title_fix::Acronyms;
///
/// let acronyms = Acronyms::from(vec!["API".to_string(), " sdk ".to_string(), String::new()]);
/// assert_eq!(acronyms.to_string(), "API, sdk ,");
/// assert_eq!(acronyms.normalized().collect::<Vec<_>>(), ["api", "sdk"]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Acronyms(pub AcronymList);

impl Acronyms {
    /// Trimmed, lowercased entries with blanks dropped.
    pub fn normalized(&self) -> impl Iterator<Item = String> + '_ {
        self.0
            .iter()
            .map(|acronym| acronym.trim().to_lowercase())
            .filter(|acronym| !acronym.is_empty())
    }
}

impl Display for Acronyms {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

impl From<AcronymList> for Acronyms {
    fn from(raw: AcronymList) -> Self {
        Self(raw)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Acronyms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl AsRef<AcronymList> for Acronyms {
    fn as_ref(&self) -> &AcronymList {
        &self.0
    }
}

impl Deref for Acronyms {
    type Target = AcronymList;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
