//! Verbose logging of conversion settings and totals.

use anyhow::{Context, Result};
use serde::Serialize;
use title_fix::{Acronyms, CaseResult, Error, Format, Input, Options, Output};

/// Handles verbose output formatting and display of conversion details.
#[derive(Debug)]
pub(crate) struct Verbose {
    output: Output,
}

impl Default for Verbose {
    /// Default verbose logger writes to stderr.
    fn default() -> Self {
        Self {
            output: Output::stderr(),
        }
    }
}

/// Verbose data that can be serialized to both JSON and CSV.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerboseData<'a> {
    source: &'a str,
    size: Option<u64>,
    inputs: usize,
    total_words: usize,
    total_chars: usize,
    case_type: String,
    style: Option<String>,
    straight_quotes: bool,
    quick_copy: bool,
    preserve_uppercase: bool,
    acronyms: Option<&'a Acronyms>,
    processing: String,
    format: String,
}

impl<'a> VerboseData<'a> {
    /// Create from conversion results, their options and input.
    fn from_results(
        results: &[CaseResult],
        options: &'a Options,
        source: &'a str,
        size: Option<u64>,
    ) -> Self {
        Self {
            source,
            size,
            inputs: results.len(),
            total_words: results.iter().map(CaseResult::word_count).sum(),
            total_chars: results.iter().map(CaseResult::char_count).sum(),
            case_type: options.case_type().to_string(),
            style: options.effective_style().map(|style| style.to_string()),
            straight_quotes: options.straight_quotes(),
            quick_copy: options.quick_copy(),
            preserve_uppercase: options.preserve_uppercase(),
            acronyms: options.acronyms(),
            processing: options.processing().to_string(),
            format: options.format().to_string(),
        }
    }

    /// Get all fields as name-value pairs.
    fn field_pairs(&self) -> Vec<(&str, String)> {
        vec![
            ("source", self.source.to_string()),
            (
                "size",
                self.size
                    .map_or_else(|| "none".to_string(), |size| size.to_string()),
            ),
            ("inputs", self.inputs.to_string()),
            ("total-words", self.total_words.to_string()),
            ("total-chars", self.total_chars.to_string()),
            ("case-type", self.case_type.clone()),
            (
                "style",
                self.style.clone().unwrap_or_else(|| "none".to_string()),
            ),
            ("straight-quotes", self.straight_quotes.to_string()),
            ("quick-copy", self.quick_copy.to_string()),
            ("preserve-uppercase", self.preserve_uppercase.to_string()),
            (
                "acronyms",
                self.acronyms
                    .map_or_else(|| "none".to_string(), ToString::to_string),
            ),
            ("processing", self.processing.clone()),
            ("format", self.format.clone()),
        ]
    }
}

impl Verbose {
    /// Writes verbose information for a conversion.
    pub(crate) fn write_verbose_info(
        &mut self,
        results: &[CaseResult],
        options: &Options,
        input: &Input,
    ) -> Result<()> {
        let source = input.source();
        let data = VerboseData::from_results(results, options, &source, input.size());

        match options.format() {
            Format::Json => self.write_json(&data),
            Format::Csv => self.write_csv(&data),
            Format::Text => self.write_text(&data),
        }
    }

    /// Write verbose info in JSON format.
    fn write_json(&mut self, data: &VerboseData<'_>) -> Result<()> {
        let json = serde_json::to_string(data).map_err(Error::Json)?;

        self.output
            .write_chunk(&format!("{json}\n\n"))
            .context("failed to write JSON output")
    }

    /// Write verbose info in CSV format.
    fn write_csv(&mut self, data: &VerboseData<'_>) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let field_pairs = data.field_pairs();

        writer.write_record(field_pairs.iter().map(|(name, _)| *name))?;
        writer.write_record(field_pairs.iter().map(|(_, value)| value))?;

        let output =
            String::from_utf8(writer.into_inner()?).context("failed to convert output to UTF-8")?;

        self.output
            .write_chunk(&output)
            .context("failed to write output")?;
        self.output
            .write_chunk("\n")
            .context("failed to write trailing newline")
    }

    /// Write verbose info as space-delimited key-value lines.
    fn write_text(&mut self, data: &VerboseData<'_>) -> Result<()> {
        data.field_pairs()
            .into_iter()
            .try_for_each(|(field_name, value)| {
                self.output.write_chunk(&format!("{field_name} {value}\n"))
            })?;

        // Separate the details from any results that follow
        if data.total_words > 0 {
            self.output.write_chunk("\n")?;
        }

        Ok(())
    }
}
