//! Configuration options for text conversion.
//!
//! This module provides the [`Options`] struct, a unified container for all
//! title-fix configuration settings.
//!
//! # Structure
//!
//! - **Case type** ([`CaseType`]): Which casing transform to apply
//! - **Style** ([`Style`]): Citation style consulted by title case
//! - **Acronyms** ([`Acronyms`]): Extra acronyms rendered fully uppercase
//! - **Format** ([`Format`]): Output format (text, JSON, CSV)
//! - **Processing** ([`Processing`]): Batch strategy (sequential, parallel)
//!
//! # Usage
//!
//! ```
//! use title_fix::{CaseType, Options, Style};
//!
//! let options = Options::default();
//! assert_eq!(options.case_type(), CaseType::Title);
//! assert_eq!(options.style(), Style::Apa);
//! assert!(options.quick_copy());
//!
//! // Unknown names fall back instead of failing
//! let options = Options::resolve("shouting", "chicago");
//! assert_eq!(options.case_type(), CaseType::Title);
//! assert_eq!(options.style(), Style::Apa);
//! ```
//!
//! # Environment Variables
//!
//! Defaults for the command line can be controlled via environment variables:
//!
//! - `TITLE_FIX_CASE_TYPE`: Case type (default: title)
//! - `TITLE_FIX_STYLE`: Citation style (default: apa)
//! - `TITLE_FIX_ACRONYMS`: Comma-delimited custom acronyms (default: none)
//! - `TITLE_FIX_PRESERVE_UPPERCASE`: Keep fully uppercase words (default: false)
//! - `TITLE_FIX_STRAIGHT_QUOTES`: Replace curly quotes (default: false)

pub mod acronyms;
pub mod case;
pub mod processing;
pub mod serialization;
pub mod style;

use self::acronyms::Acronyms;
use self::case::CaseType;
use self::processing::Processing;
use self::serialization::Format;
use self::style::Style;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

/// Unified configuration for a conversion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Casing transform to apply.
    case_type: CaseType,

    /// Citation style, consulted only by title case.
    style: Style,

    /// Replace curly quotes with straight quotes.
    straight_quotes: bool,

    /// Echoed unchanged into every result.
    quick_copy: bool,

    /// Custom acronyms merged into the built-in set for this conversion.
    acronyms: Option<Acronyms>,

    /// Keep words that were fully uppercase in the input uppercase.
    preserve_uppercase: bool,

    /// Output format for results.
    format: Format,

    /// Batch conversion strategy.
    processing: Processing,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            case_type: CaseType::default(),
            style: Style::default(),
            straight_quotes: false,
            quick_copy: true,
            acronyms: None,
            preserve_uppercase: false,
            format: Format::default(),
            processing: Processing::default(),
        }
    }
}

impl Options {
    const ENV_CASE_TYPE: &str = "TITLE_FIX_CASE_TYPE";
    const ENV_STYLE: &str = "TITLE_FIX_STYLE";
    const ENV_ACRONYMS: &str = "TITLE_FIX_ACRONYMS";
    const ENV_PRESERVE_UPPERCASE: &str = "TITLE_FIX_PRESERVE_UPPERCASE";
    const ENV_STRAIGHT_QUOTES: &str = "TITLE_FIX_STRAIGHT_QUOTES";

    /// Creates `Options` from case type and style names, falling back rather than failing.
    ///
    /// Names match case-insensitively. An unrecognized case type selects title case with
    /// the APA style, whatever style was given. An unrecognized style selects APA.
    ///
    /// # Examples
    ///
    /// ```
    /// use title_fix::{CaseType, Options, Style};
    ///
    /// let options = Options::resolve("TITLE", "Nyt");
    /// assert_eq!((options.case_type(), options.style()), (CaseType::Title, Style::Nyt));
    ///
    /// let options = Options::resolve("title", "harvard");
    /// assert_eq!(options.style(), Style::Apa);
    /// ```
    #[must_use]
    pub fn resolve(case_type: &str, style: &str) -> Self {
        let (case_type, style) = CaseType::resolve(case_type).map_or(
            (CaseType::Title, Style::Apa),
            |case_type| (case_type, Style::resolve(style).unwrap_or_default()),
        );

        Self::default().with_case_type(case_type).with_style(style)
    }

    /// Create options from environment variables if present.
    ///
    /// Variables are read once per process and cached.
    pub fn from_env() -> Self {
        static CONFIG: OnceLock<Options> = OnceLock::new();

        CONFIG
            .get_or_init(|| {
                let case_type = env::var(Self::ENV_CASE_TYPE).unwrap_or_default();
                let style = env::var(Self::ENV_STYLE).unwrap_or_default();
                let mut options = if case_type.is_empty() {
                    Self::default().with_style(Style::resolve(&style).unwrap_or_default())
                } else {
                    Self::resolve(&case_type, &style)
                };

                if let Ok(acronyms) = env::var(Self::ENV_ACRONYMS) {
                    options = options.with_acronyms(acronyms.split(','));
                }

                options
                    .with_preserve_uppercase(Self::parse_env_flag(Self::ENV_PRESERVE_UPPERCASE))
                    .with_straight_quotes(Self::parse_env_flag(Self::ENV_STRAIGHT_QUOTES))
            })
            .clone()
    }

    /// Parse a boolean environment variable, treating anything unrecognized as false.
    fn parse_env_flag(name: &str) -> bool {
        env::var(name).is_ok_and(|value| {
            matches!(
                value.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
    }

    /// Set the case type.
    #[must_use]
    pub const fn with_case_type(mut self, case_type: CaseType) -> Self {
        self.case_type = case_type;
        self
    }

    /// Set the citation style.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set curly quote replacement.
    #[must_use]
    pub const fn with_straight_quotes(mut self, straight_quotes: bool) -> Self {
        self.straight_quotes = straight_quotes;
        self
    }

    /// Set the quick copy flag echoed into results.
    #[must_use]
    pub const fn with_quick_copy(mut self, quick_copy: bool) -> Self {
        self.quick_copy = quick_copy;
        self
    }

    /// Set custom acronyms, replacing any set previously.
    #[must_use]
    pub fn with_acronyms<I, S>(mut self, acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.acronyms = Some(acronyms.into_iter().collect());
        self
    }

    /// Set uppercase preservation.
    #[must_use]
    pub const fn with_preserve_uppercase(mut self, preserve_uppercase: bool) -> Self {
        self.preserve_uppercase = preserve_uppercase;
        self
    }

    /// Set the output format.
    #[must_use]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set the batch processing strategy.
    #[must_use]
    pub const fn with_processing(mut self, processing: Processing) -> Self {
        self.processing = processing;
        self
    }

    /// Get the case type.
    #[must_use]
    pub const fn case_type(&self) -> CaseType {
        self.case_type
    }

    /// Get the citation style.
    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Get the style echoed in results: present only for title case.
    #[must_use]
    pub const fn effective_style(&self) -> Option<Style> {
        if self.case_type.uses_style() {
            Some(self.style)
        } else {
            None
        }
    }

    /// Get the curly quote replacement setting.
    #[must_use]
    pub const fn straight_quotes(&self) -> bool {
        self.straight_quotes
    }

    /// Get the quick copy flag.
    #[must_use]
    pub const fn quick_copy(&self) -> bool {
        self.quick_copy
    }

    /// Get a reference to the custom acronyms.
    #[must_use]
    pub const fn acronyms(&self) -> Option<&Acronyms> {
        self.acronyms.as_ref()
    }

    /// Get the uppercase preservation setting.
    #[must_use]
    pub const fn preserve_uppercase(&self) -> bool {
        self.preserve_uppercase
    }

    /// Get the output format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Get the batch processing strategy.
    #[must_use]
    pub const fn processing(&self) -> Processing {
        self.processing
    }
}

impl Display for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Options {{ case_type: {}, style: {}, straight_quotes: {}, quick_copy: {}, acronyms: {}, preserve_uppercase: {}, format: {}, processing: {} }}",
            self.case_type,
            self.style,
            self.straight_quotes,
            self.quick_copy,
            self.acronyms
                .as_ref()
                .map_or_else(|| "none".to_string(), ToString::to_string),
            self.preserve_uppercase,
            self.format,
            self.processing
        )
    }
}
