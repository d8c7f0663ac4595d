//! The result of converting one text.

use crate::headline::{Score, headline_score};
use crate::options::Options;
use crate::options::case::CaseType;
use crate::options::style::Style;
use crate::transform::convert;
use crate::Count;
use serde::{Serialize, Serializer};

/// Converted text along with metadata about the original input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct CaseResult {
    /// The converted text.
    text: String,

    /// Whitespace-delimited words in the original input.
    word_count: Count,

    /// Characters in the original, untrimmed input.
    char_count: Count,

    /// Headline quality of the converted text.
    headline_score: Score,

    /// Echo of the quick copy option.
    quick_copy: bool,

    /// The case type that was applied.
    case_type: CaseType,

    /// The citation style that was applied, for title case only.
    style: Option<Style>,
}

/// `CaseResult` fields are eagerly populated upon construction and exposed by getter methods.
impl CaseResult {
    /// Converts `text` according to `options`.
    ///
    /// # Examples
    ///
    /// ```
    /// use title_fix::{CaseResult, Options};
    ///
    /// let result = CaseResult::new("  this is a test title", &Options::default());
    /// assert_eq!(result.text(), "This Is a Test Title");
    /// assert_eq!(result.word_count(), 5);
    /// assert_eq!(result.char_count(), 22);
    /// assert_eq!(result.case_type_label(), "TITLE");
    /// assert_eq!(result.style_label(), Some("APA"));
    /// ```
    #[must_use]
    pub fn new(text: &str, options: &Options) -> Self {
        let word_count = text.split_whitespace().count();
        let char_count = text.chars().count();
        let converted = convert(text, options);
        let headline_score = headline_score(&converted, word_count);

        Self {
            text: converted,
            word_count,
            char_count,
            headline_score,
            quick_copy: options.quick_copy(),
            case_type: options.case_type(),
            style: options.effective_style(),
        }
    }

    /// Gets the converted text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gets the `word_count` field.
    pub const fn word_count(&self) -> Count {
        self.word_count
    }

    /// Gets the `char_count` field.
    pub const fn char_count(&self) -> Count {
        self.char_count
    }

    /// Gets the `headline_score` field.
    pub const fn headline_score(&self) -> Score {
        self.headline_score
    }

    /// Gets the `quick_copy` field.
    pub const fn quick_copy(&self) -> bool {
        self.quick_copy
    }

    /// Gets the applied case type.
    pub const fn case_type(&self) -> CaseType {
        self.case_type
    }

    /// Gets the applied style, if any.
    pub const fn style(&self) -> Option<Style> {
        self.style
    }

    /// The case type as echoed in serialized output, e.g. `"TITLE"`.
    pub const fn case_type_label(&self) -> &'static str {
        self.case_type.label()
    }

    /// The style as echoed in serialized output, e.g. `"APA"`.
    pub fn style_label(&self) -> Option<&'static str> {
        self.style.as_ref().map(Style::label)
    }

    /// Consumes the result, returning the converted text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Serializes with camelCase keys and uppercased case type and style.
impl Serialize for CaseResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CaseResult", 7)?;
        state.serialize_field("text", &self.text)?;
        state.serialize_field("wordCount", &self.word_count)?;
        state.serialize_field("charCount", &self.char_count)?;
        state.serialize_field("headlineScore", &self.headline_score)?;
        state.serialize_field("quickCopy", &self.quick_copy)?;
        state.serialize_field("caseType", self.case_type_label())?;
        state.serialize_field("style", &self.style_label())?;
        state.end()
    }
}
