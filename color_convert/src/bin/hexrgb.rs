// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::{io::{IsTerminal, stdin},
          process::ExitCode};

use clap::{CommandFactory, Parser};
use miette::IntoDiagnostic;
use r3bl_color_convert::{ColorConvertError, CommonResult, ConversionResult, SystemClipboard,
                         convert, copy_results_to_clipboard,
                         log::{DisplayPreference, TracingConfig,
                               try_initialize_logging_global}};

#[derive(Debug, Parser)]
#[command(bin_name = "hexrgb")]
#[command(
    about = "Convert colors between hex (#1AF, #1a2b3c) and RGB (rgb(26, 43, 60), 21 31 41) 🎨",
    long_about = None
)]
#[command(version)]
#[command(next_line_help = true)]
struct CliArgs {
    /// Colors to convert. When none are given, each line of stdin is converted
    #[arg(value_name = "color")]
    inputs: Vec<String>,

    /// Copy the converted color to the system clipboard 📋
    #[arg(long, short = 'c')]
    copy: bool,

    /// Print the results as JSON
    #[arg(long, short = 'j', conflicts_with = "quiet")]
    json: bool,

    /// Only print the converted color, w/out the description
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Log debug output to stderr
    #[arg(long, short = 'l')]
    enable_logging: bool,

    /// Log debug output to this file (implies logging)
    #[arg(value_name = "path", long)]
    log_file: Option<String>,
}

impl CliArgs {
    fn tracing_config(&self) -> Option<TracingConfig> {
        match (&self.log_file, self.enable_logging) {
            (Some(path), true) => Some(TracingConfig::new_file_and_display(
                Some(path.clone()),
                DisplayPreference::Stderr,
            )),
            (Some(path), false) => Some(TracingConfig::new_file(Some(path.clone()))),
            (None, true) => Some(TracingConfig::new_display(DisplayPreference::Stderr)),
            (None, false) => None,
        }
    }
}

fn main() -> CommonResult<ExitCode> {
    let cli_args = CliArgs::parse();

    let tracing_config = cli_args.tracing_config();
    let should_log = tracing_config.is_some();
    if let Some(tracing_config) = tracing_config {
        try_initialize_logging_global(tracing_config)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_args = ?cli_args);
    }

    let inputs = if cli_args.inputs.is_empty() {
        if stdin().is_terminal() {
            // Nothing to convert, and nothing piped in.
            CliArgs::command().print_help().into_diagnostic()?;
            return Ok(ExitCode::FAILURE);
        }
        read_stdin_lines()?
    } else {
        cli_args.inputs.clone()
    };

    let results: Vec<Option<ConversionResult>> =
        inputs.iter().map(|input| convert(input)).collect();

    if cli_args.json {
        print_json(&results)?;
    } else {
        print_human(&inputs, &results, cli_args.quiet);
    }

    if cli_args.copy {
        copy_to_system_clipboard(&results)?;
    }

    let all_converted = results.iter().all(Option::is_some);

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...", all_converted = %all_converted);
    });

    Ok(if all_converted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Blank lines are skipped.
fn read_stdin_lines() -> CommonResult<Vec<String>> {
    let mut acc = vec![];
    for line in stdin().lines() {
        let line = line.into_diagnostic()?;
        if !line.trim().is_empty() {
            acc.push(line);
        }
    }
    Ok(acc)
}

fn print_human(inputs: &[String], results: &[Option<ConversionResult>], quiet: bool) {
    for (input, maybe_result) in inputs.iter().zip(results) {
        match maybe_result {
            Some(result) if quiet => println!("{}", result.output),
            Some(result) => println!("{}  ({})", result.output, result.label),
            None => {
                let error = ColorConvertError::NoMatch {
                    input: input.trim().to_string(),
                };
                eprintln!("{error}");
            }
        }
    }
}

fn print_json(results: &[Option<ConversionResult>]) -> CommonResult<()> {
    let json = serde_json::to_string_pretty(results).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

/// When there are multiple results, they are copied as one string, one per line.
fn copy_to_system_clipboard(results: &[Option<ConversionResult>]) -> CommonResult<()> {
    let converted: Vec<&ConversionResult> = results.iter().flatten().collect();
    copy_results_to_clipboard(&converted, &mut SystemClipboard)
}
