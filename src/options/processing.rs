//! Configuration for batch conversion strategies.

use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// Determines how the lines of a batch are converted.
///
/// Performance characteristics:
/// - **Sequential**: Lines are converted one after another on the calling thread.
///   Less overhead, and usually faster for a handful of lines.
///
/// - **Parallel**: Lines are converted on the rayon work-stealing pool.
///   Results keep input order.
///
/// # Examples
///
/// ```
/// use title_fix::Processing;
///
/// assert_eq!(Processing::default(), Processing::Sequential);
/// assert_eq!(Processing::Parallel.to_string(), "parallel");
/// assert_eq!(Processing::from(true), Processing::Parallel);
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Processing {
    /// Convert lines sequentially (single-threaded).
    #[default]
    Sequential,

    /// Convert lines in parallel (multi-threaded).
    Parallel,
}

impl Display for Processing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

impl From<bool> for Processing {
    fn from(parallel: bool) -> Self {
        if parallel {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }
}
