//! Output format options.

use clap::ValueEnum;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// Output format for conversion results.
///
/// # Examples
///
/// ```
/// use title_fix::Format;
///
/// assert_eq!(Format::default(), Format::Text);
/// assert_eq!(Format::Json.to_string(), "json");
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Converted text only, one result per line.
    #[default]
    Text,
    /// Full results as JSON.
    Json,
    /// Full results as CSV with a header row.
    Csv,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
