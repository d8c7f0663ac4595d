//! Title case and other letter casings for headlines and free-form text.
//!
//! `title-fix` converts text into one of seven casings and reports metadata about it:
//! word and character counts of the input, and a heuristic headline quality score of
//! the output.
//!
//! Title case follows one of five citation styles (APA, Chicago, AP, MLA, NYT). Each
//! style decides which words stay lowercase, which are always capitalized, and how long
//! a word must be to be capitalized. Roman numerals and acronyms are written fully
//! uppercase, hyphenated words are cased part by part, and words after a colon are
//! capitalized.
//!
//! Every conversion is a pure function of its input and the static rule tables, so
//! conversions can run concurrently without synchronization.
//!
//! ## Module structure
//!
//! - `args.rs`: Command-line argument parsing
//! - `case_result.rs`: The result of a conversion and its metadata
//! - `error.rs`: Error types
//! - `exit_code.rs`: Exit code definitions and handling
//! - `headline.rs`: Heuristic headline quality score
//! - `input.rs`: Reading text from files, stdin or bytes
//! - `lib.rs`: Core library functionality and API
//! - `main.rs`: CLI entry point and execution
//! - `options/`: Configuration options
//!   - `options/acronyms.rs`: Custom acronyms
//!   - `options/case.rs`: Case types
//!   - `options/mod.rs`: Common options functionality
//!   - `options/processing.rs`: Batch processing strategies
//!   - `options/serialization.rs`: Output formats
//!   - `options/style.rs`: Citation styles
//! - `output.rs`: Output formatting and display
//! - `request.rs`: Type-checked convert requests from JSON
//! - `rules.rs`: Capitalization rule tables
//! - `title.rs`: The title case algorithm
//! - `transform.rs`: The other case transforms
//! - `verbose.rs`: Verbose diagnostics for the CLI
//!
//! # Examples
//!
//! ```
//! use title_fix::{CaseType, Options, Style, process};
//!
//! let result = process("the art of war: a guide to strategy", &Options::default());
//! assert_eq!(result.text(), "The art of War: A Guide to Strategy");
//! assert_eq!(result.word_count(), 8);
//! assert_eq!(result.style_label(), Some("APA"));
//!
//! let options = Options::default()
//!     .with_style(Style::Chicago)
//!     .with_acronyms(["api", "sdk"]);
//! assert_eq!(
//!     process("the api and sdk documentation", &options).text(),
//!     "The API and SDK Documentation"
//! );
//!
//! let options = Options::default().with_case_type(CaseType::Sentence);
//! let result = process("THIS IS A TEST. ANOTHER TEST.", &options);
//! assert_eq!(result.text(), "This is a test. Another test.");
//! assert_eq!(result.style(), None);
//! ```

use rayon::prelude::*;

pub mod case_result;
pub mod error;
pub mod exit_code;
pub mod headline;
pub mod input;
pub mod options;
pub mod output;
pub mod request;
pub mod rules;
pub mod title;
pub mod transform;

pub use case_result::CaseResult;
pub use error::Error;
pub use exit_code::ExitCode;
pub use headline::{Score, headline_score};
pub use input::Input;
pub use options::{
    Options, acronyms::Acronyms, case::CaseType, processing::Processing,
    serialization::Format, style::Style,
};
pub use output::Output;
pub use request::Request;
pub use rules::StyleRules;
pub use title::TitleCaser;

pub type Count = usize;

/// Converts `text` according to `options`.
///
/// Never fails: unrecognized case type or style names are resolved before this point
/// by [`Options::resolve`], which falls back to title case and APA.
///
/// # Examples
///
/// ```
/// use title_fix::{Options, process};
///
/// let result = process("   ", &Options::default());
/// assert_eq!(result.text(), "");
/// assert_eq!((result.word_count(), result.char_count()), (0, 3));
/// assert_eq!(result.headline_score(), 0);
/// ```
#[must_use]
pub fn process(text: &str, options: &Options) -> CaseResult {
    CaseResult::new(text, options)
}

/// Converts every line of `text` independently, keeping line order.
///
/// Lines are converted on the rayon thread pool with [`Processing::Parallel`].
///
/// # Examples
///
/// ```
/// use title_fix::{Options, Processing, process_lines};
///
/// let options = Options::default().with_processing(Processing::Parallel);
/// let results = process_lines("first test\nsecond test", &options);
/// let texts: Vec<_> = results.iter().map(|result| result.text()).collect();
/// assert_eq!(texts, ["First Test", "Second Test"]);
/// ```
#[must_use]
pub fn process_lines(text: &str, options: &Options) -> Vec<CaseResult> {
    let lines: Vec<&str> = text.lines().collect();

    match options.processing() {
        Processing::Sequential => lines.iter().map(|line| process(line, options)).collect(),
        Processing::Parallel => lines
            .par_iter()
            .map(|line| process(line, options))
            .collect(),
    }
}

/// Strictly validates conversion arguments.
///
/// `text` is `None` when the caller's text value was absent or not a string. Case type
/// and style names must match the canonical lowercase identifiers exactly, and the style
/// is only checked for title case.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `text` is `None`, `case_type` is not one of
/// [`supported_case_types`], or `case_type` is `"title"` and `style` is not one of
/// [`supported_styles`].
///
/// # Examples
///
/// ```
/// use title_fix::validate;
///
/// assert!(validate(Some("x"), "upper", "anything").is_ok());
/// assert!(validate(None, "title", "apa").is_err());
/// assert!(validate(Some("x"), "bogus", "apa").is_err());
/// assert!(validate(Some("x"), "title", "bogus").is_err());
/// ```
pub fn validate(text: Option<&str>, case_type: &str, style: &str) -> Result<(), Error> {
    if text.is_none() {
        return Err(Error::invalid("text must be a string"));
    }

    let case_type: CaseType = case_type.parse()?;
    if case_type.uses_style() {
        style.parse::<Style>()?;
    }

    Ok(())
}

/// The citation style identifiers, in canonical order.
///
/// ```
/// assert_eq!(title_fix::supported_styles(), ["apa", "chicago", "ap", "mla", "nyt"]);
/// ```
#[must_use]
pub fn supported_styles() -> Vec<&'static str> {
    Style::ALL.iter().map(Style::as_str).collect()
}

/// The case type identifiers, in canonical order.
///
/// ```
/// assert_eq!(
///     title_fix::supported_case_types(),
///     ["title", "sentence", "upper", "lower", "first", "alt", "toggle"]
/// );
/// ```
#[must_use]
pub fn supported_case_types() -> Vec<&'static str> {
    CaseType::ALL.iter().map(CaseType::as_str).collect()
}
