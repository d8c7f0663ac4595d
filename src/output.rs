//! Write trait abstractions for stdout and file serialization.

use crate::CaseResult;
use crate::error::Error;
use crate::options::serialization::Format;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::{self, ErrorKind::BrokenPipe, LineWriter, Write};
use std::path::Path;

/// `Writer` dynamic dispatches the `Write` trait.
pub type Writer = Box<dyn Write>;

/// `Output` writes to either a file or stream like stdout or stderr.
pub struct Output {
    writer: Writer,
}

impl Debug for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("writer", &"<dyn Write>")
            .finish()
    }
}

impl Default for Output {
    /// Default output is stdout
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// The supported style and case type identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedOptions {
    /// Citation style identifiers.
    pub supported_styles: Vec<&'static str>,
    /// Case type identifiers.
    pub supported_case_types: Vec<&'static str>,
}

impl Default for SupportedOptions {
    fn default() -> Self {
        Self {
            supported_styles: crate::supported_styles(),
            supported_case_types: crate::supported_case_types(),
        }
    }
}

impl Output {
    /// Creates an `Output` from an optional path, choosing between file or stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file can't be created.
    pub fn new(output: Option<&Path>) -> Result<Self> {
        match output {
            Some(path) if path == Path::new("-") => Ok(Self::stdout()),
            Some(path) => Self::file(path),
            None => Ok(Self::stdout()),
        }
    }

    /// Creates an `Output` that writes to a file with error context.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be created.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create output file: {}", path.display()))?;
        let writer: Writer = Box::new(LineWriter::new(file));

        Ok(Self { writer })
    }

    /// Creates an `Output` that writes to stdout.
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout().lock()),
        }
    }

    /// Creates an `Output` that writes to stderr.
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr().lock()),
        }
    }

    /// Creates an `Output` from a writer.
    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Writes a chunk of text, handling `BrokenPipe` errors gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error for any write failure other than a broken pipe.
    pub fn write_chunk(&mut self, chunk: &str) -> Result<()> {
        Self::handle_broken_pipe(self.writer.write_all(chunk.as_bytes()))
    }

    /// Flushes the writer, ensuring all output is written.
    ///
    /// # Errors
    ///
    /// Returns an error for any flush failure other than a broken pipe.
    pub fn flush(&mut self) -> Result<()> {
        Self::handle_broken_pipe(self.writer.flush())
    }

    /// Writes conversion results in the given format.
    ///
    /// Text output is the converted text of each result on its own line. JSON output
    /// is a single object for one result and an array otherwise. CSV output has a
    /// header row followed by one row per result, with an empty `style` outside title case.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_results(&mut self, results: &[CaseResult], format: Format) -> Result<()> {
        match format {
            Format::Text => {
                for result in results {
                    self.write_chunk(&format!("{}\n", result.text()))?;
                }
            }
            Format::Json => {
                let json = match results {
                    [result] => serde_json::to_string(result),
                    _ => serde_json::to_string(results),
                }
                .map_err(Error::Json)
                .context("failed to serialize results to JSON")?;
                self.write_chunk(&format!("{json}\n"))?;
            }
            Format::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                for result in results {
                    writer.serialize(result)?;
                }
                let csv_data = String::from_utf8(writer.into_inner()?)
                    .context("failed to convert CSV output to UTF-8 string")?;
                self.write_chunk(&csv_data)?;
            }
        }

        self.flush()
    }

    /// Writes the supported style and case type identifiers in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_supported_options(&mut self, format: Format) -> Result<()> {
        let supported = SupportedOptions::default();

        match format {
            Format::Text => {
                self.write_chunk(&format!(
                    "styles {}\ncase-types {}\n",
                    supported.supported_styles.join(","),
                    supported.supported_case_types.join(",")
                ))?;
            }
            Format::Json => {
                let json = serde_json::to_string(&supported)
                    .map_err(Error::Json)
                    .context("failed to serialize supported options to JSON")?;
                self.write_chunk(&format!("{json}\n"))?;
            }
            Format::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                writer.write_record(["kind", "name"])?;
                for style in &supported.supported_styles {
                    writer.write_record(["style", *style])?;
                }
                for case_type in &supported.supported_case_types {
                    writer.write_record(["caseType", *case_type])?;
                }
                let csv_data = String::from_utf8(writer.into_inner()?)
                    .context("failed to convert CSV output to UTF-8 string")?;
                self.write_chunk(&csv_data)?;
            }
        }

        self.flush()
    }

    /// Processes the result of a write, handling `BrokenPipe` errors gracefully.
    fn handle_broken_pipe(result: io::Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(err) => match err.kind() {
                BrokenPipe => Ok(()),
                _ => Err(err.into()),
            },
        }
    }
}
