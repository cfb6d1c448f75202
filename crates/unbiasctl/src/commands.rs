//! One-shot commands: analyze, rewrite, config

use crate::errors::{exit_code_for, EXIT_EMPTY_INPUT, EXIT_SUCCESS};
use crate::output;
use crate::spinner::Spinner;
use crate::tui_state::{ANALYZER_ERROR, REWRITER_ERROR};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{IsTerminal, Read, Write};
use std::path::Path;
use unbias_common::{run_analysis, run_rewrite, BiasApi, InputMode, UnbiasConfig};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub json: bool,
    pub color: bool,
    pub width: usize,
    /// Show a spinner on stderr while waiting
    pub spinner: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            json: false,
            color: false,
            width: output::DEFAULT_WIDTH,
            spinner: false,
        }
    }
}

#[derive(Serialize)]
struct RewriteJson<'a> {
    unbiased_text: &'a str,
}

/// Use the argument if given, else read all of stdin (unless it is a TTY)
pub fn read_input(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("Failed to read input from stdin")?;
    Ok(buffer)
}

/// Analyze text or an article link; returns the exit code
pub async fn analyze<O: Write, E: Write>(
    api: &dyn BiasApi,
    mode: InputMode,
    input: &str,
    opts: OutputOptions,
    out: &mut O,
    err: &mut E,
) -> Result<i32> {
    if input.trim().is_empty() {
        writeln!(err, "Nothing to analyze: input is empty")?;
        return Ok(EXIT_EMPTY_INPUT);
    }
    // Links are sent as typed, minus surrounding whitespace from pipes
    let input = match mode {
        InputMode::Url => input.trim(),
        InputMode::Text => input,
    };

    let mut spinner = Spinner::new("Analyzing...", opts.spinner && !opts.json);
    let result = run_analysis(api, mode, input).await;
    spinner.stop();

    match result {
        Ok(report) => {
            if opts.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(out, "{}", output::render_analysis(&report, opts.width, opts.color))?;
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            tracing::warn!(error = %e, %mode, "analysis failed");
            writeln!(err, "{}", ANALYZER_ERROR)?;
            writeln!(err, "  {}", e)?;
            Ok(exit_code_for(&e))
        }
    }
}

/// Neutralize a text; returns the exit code
pub async fn rewrite<O: Write, E: Write>(
    api: &dyn BiasApi,
    input: &str,
    opts: OutputOptions,
    out: &mut O,
    err: &mut E,
) -> Result<i32> {
    if input.trim().is_empty() {
        writeln!(err, "Nothing to rewrite: input is empty")?;
        return Ok(EXIT_EMPTY_INPUT);
    }

    let mut spinner = Spinner::new("Rewriting...", opts.spinner && !opts.json);
    let result = run_rewrite(api, input).await;
    spinner.stop();

    match result {
        Ok(text) => {
            if opts.json {
                let body = RewriteJson {
                    unbiased_text: &text,
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                write!(out, "{}", output::render_rewrite(&text, opts.width, opts.color))?;
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            tracing::warn!(error = %e, "rewrite failed");
            writeln!(err, "{}", REWRITER_ERROR)?;
            writeln!(err, "  {}", e)?;
            Ok(exit_code_for(&e))
        }
    }
}

/// Print the effective configuration, the config file location, or write the
/// defaults to that location
pub fn config<W: Write>(
    config: &UnbiasConfig,
    path: &Path,
    show_path: bool,
    init: bool,
    out: &mut W,
) -> Result<i32> {
    if init {
        if path.exists() {
            writeln!(out, "Config already exists at {}", path.display())?;
            return Ok(EXIT_SUCCESS);
        }
        UnbiasConfig::default().save_to(path)?;
        writeln!(out, "Wrote default config to {}", path.display())?;
        return Ok(EXIT_SUCCESS);
    }

    if show_path {
        writeln!(out, "{}", path.display())?;
        return Ok(EXIT_SUCCESS);
    }

    write!(out, "{}", config.to_toml()?)?;
    Ok(EXIT_SUCCESS)
}
