//! `title-fix` converts text into title case and other letter casings.

pub(crate) mod args;
pub(crate) mod verbose;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use title_fix::{CaseResult, Error, ExitCode, Input, Output, Request, process, process_lines};
use verbose::Verbose;

fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                if let Err(print_err) = clap_err.print() {
                    eprintln!("Error: {print_err}");
                }
            } else {
                eprintln!("Error: {err:#}");
            }

            ExitCode::from(&err).into()
        }
    }
}

fn run() -> Result<()> {
    let args = Args::try_parse()?;
    let mut options = args.get_options();
    let mut output = Output::new(args.output.as_deref())?;

    if args.list_options {
        return output.write_supported_options(options.format());
    }

    let input = Input::new(&args.input);
    let text = input
        .read_to_string()
        .with_context(|| format!("failed to read input: {input}"))?;

    let results: Vec<CaseResult> = if args.request {
        if text.trim().is_empty() {
            return Err(Error::Usage(format!(
                "--request expects a JSON convert request, but {input} was empty"
            ))
            .into());
        }

        let request = Request::from_json(&text)?;
        request.validate()?;
        options = request.options().clone().with_format(options.format());
        vec![request.process()]
    } else if args.lines {
        process_lines(&text, &options)
    } else {
        vec![process(strip_newline(&text), &options)]
    };

    if args.verbose {
        Verbose::default().write_verbose_info(&results, &options, &input)?;
    }

    output.write_results(&results, options.format())
}

/// Drops one trailing line ending, as left by `echo` or a final newline in a file.
fn strip_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
