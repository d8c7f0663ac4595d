//! Convert requests arriving as loosely-typed JSON.
//!
//! A request is a JSON object shaped like
//! `{"text": "...", "case_type": "title", "style": "apa", "straight_quotes": false, "quick_copy": true}`,
//! optionally with `"acronyms": [...]` and `"preserve_uppercase": true`. Every value is
//! type-checked at runtime: a `text` that is missing or not a string is rejected with
//! [`Error::InvalidArgument`], as are `case_type` or `style` values that are not strings.

use crate::error::Error;
use crate::options::Options;
use crate::{CaseResult, validate};
use serde_json::{Map, Value};

/// A type-checked convert request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    text: String,
    case_type: String,
    style: String,
    options: Options,
}

impl Request {
    const DEFAULT_CASE_TYPE: &str = "title";
    const DEFAULT_STYLE: &str = "apa";

    /// Parses and type-checks a request from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if `json` is not valid JSON, or `Error::InvalidArgument` if
    /// it is not an object or any field has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use title_fix::Request;
    ///
    /// let request = Request::from_json(r#"{"text": "nasa and the fbi", "style": "ap"}"#)?;
    /// assert_eq!(request.process().text(), "NASA and the FBI");
    ///
    /// let error = Request::from_json(r#"{"text": 123}"#).unwrap_err();
    /// assert!(error.is_invalid_argument());
    /// # Ok::<(), title_fix::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Type-checks a request from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `value` is not an object or any field has
    /// the wrong type.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        let Value::Object(mut fields) = value else {
            return Err(Error::invalid("request must be a JSON object"));
        };

        let text = match fields.remove("text") {
            Some(Value::String(text)) => text,
            _ => return Err(Error::invalid("text must be a string")),
        };
        let case_type = string_field(&mut fields, "case_type", "case type", Self::DEFAULT_CASE_TYPE)?;
        let style = string_field(&mut fields, "style", "style", Self::DEFAULT_STYLE)?;
        let defaults = Options::default();

        let mut options = Options::resolve(&case_type, &style)
            .with_straight_quotes(flag_field(
                &fields,
                "straight_quotes",
                defaults.straight_quotes(),
            ))
            .with_quick_copy(flag_field(&fields, "quick_copy", defaults.quick_copy()))
            .with_preserve_uppercase(flag_field(
                &fields,
                "preserve_uppercase",
                defaults.preserve_uppercase(),
            ));

        match fields.remove("acronyms") {
            None | Some(Value::Null) => {}
            // Non-string entries are discarded.
            Some(Value::Array(entries)) => {
                options = options.with_acronyms(entries.iter().filter_map(Value::as_str));
            }
            Some(_) => return Err(Error::invalid("acronyms must be a list of strings")),
        }

        Ok(Self {
            text,
            case_type,
            style,
            options,
        })
    }

    /// Strictly validates the request's case type and style names.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the case type is not a canonical name, or if
    /// it is `title` and the style is not a canonical name.
    pub fn validate(&self) -> Result<(), Error> {
        validate(Some(self.text.as_str()), &self.case_type, &self.style)
    }

    /// Converts the request's text. Unrecognized names fall back rather than fail.
    #[must_use]
    pub fn process(&self) -> CaseResult {
        CaseResult::new(&self.text, &self.options)
    }

    /// Gets the text to convert.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gets the resolved options.
    pub const fn options(&self) -> &Options {
        &self.options
    }
}

/// Reads an optional string field, rejecting any other type.
fn string_field(
    fields: &mut Map<String, Value>,
    key: &str,
    name: &str,
    default: &str,
) -> Result<String, Error> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(Error::invalid(format!("{name} must be a string"))),
    }
}

/// Reads an optional boolean field. Anything but a boolean keeps the default.
fn flag_field(fields: &Map<String, Value>, key: &str, default: bool) -> bool {
    fields.get(key).and_then(Value::as_bool).unwrap_or(default)
}
