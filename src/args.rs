//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;
use title_fix::{CaseType, Format, Options, Processing, Style};

#[derive(Debug, Parser)]
#[command(about, version)]
pub(crate) struct Args {
    /// File path to use as input rather than stdin ("-").
    #[arg(default_value = "-", value_name = "PATH")]
    pub(crate) input: String,

    /// Case type.
    #[arg(short = 't', long, value_enum, value_name = "CASE")]
    pub(crate) case_type: Option<CaseType>,

    /// Citation style for title case.
    #[arg(short, long, value_enum, value_name = "STYLE")]
    pub(crate) style: Option<Style>,

    /// Replace curly quotes with straight quotes.
    #[arg(short = 'q', long)]
    pub(crate) straight_quotes: bool,

    /// Report the quick copy flag as false.
    #[arg(long)]
    pub(crate) no_quick_copy: bool,

    /// Extra acronyms from a comma-delimited list.
    #[arg(short, long, value_delimiter = ',', value_name = "WORDS")]
    pub(crate) acronyms: Option<Vec<String>>,

    /// Keep words that are fully uppercase in the input uppercase.
    #[arg(short, long)]
    pub(crate) preserve_uppercase: bool,

    /// Convert each line of input separately.
    #[arg(short, long)]
    pub(crate) lines: bool,

    /// Convert lines in parallel.
    #[arg(short = 'P', long, requires = "lines")]
    pub(crate) parallel: bool,

    /// Read input as a JSON convert request.
    #[arg(short, long, conflicts_with = "lines")]
    pub(crate) request: bool,

    /// Output format.
    #[arg(short, long, default_value_t, value_enum, value_name = "FORMAT")]
    pub(crate) format: Format,

    /// Write output to file rather than stdout.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// List supported styles and case types.
    #[arg(long)]
    pub(crate) list_options: bool,

    /// Print verbose details.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,
}

impl Args {
    /// Builds `Options` from environment defaults overridden by the given arguments.
    pub(crate) fn get_options(&self) -> Options {
        let mut options = Options::from_env();

        if let Some(case_type) = self.case_type {
            options = options.with_case_type(case_type);
        }

        if let Some(style) = self.style {
            options = options.with_style(style);
        }

        if let Some(acronyms) = &self.acronyms {
            options = options.with_acronyms(acronyms);
        }

        let straight_quotes = self.straight_quotes || options.straight_quotes();
        let preserve_uppercase = self.preserve_uppercase || options.preserve_uppercase();

        options
            .with_straight_quotes(straight_quotes)
            .with_preserve_uppercase(preserve_uppercase)
            .with_quick_copy(!self.no_quick_copy)
            .with_processing(Processing::from(self.parallel))
            .with_format(self.format)
    }
}
