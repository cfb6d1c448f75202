//! Plain-terminal rendering of results for the one-shot commands

use owo_colors::OwoColorize;
use std::fmt::Write;
use unbias_common::AnalysisReport;

/// Fallback wrap width when the terminal size is unknown
pub const DEFAULT_WIDTH: usize = 80;

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().bright_blue().to_string()
    } else {
        text.to_string()
    }
}

fn label(text: &str, color: bool) -> String {
    if color {
        text.dimmed().bold().to_string()
    } else {
        text.to_string()
    }
}

fn wrap(text: &str, width: usize, indent: &str) -> String {
    let options = textwrap::Options::new(width.max(20))
        .initial_indent(indent)
        .subsequent_indent(indent);
    text.split('\n')
        .map(|paragraph| textwrap::fill(paragraph, &options))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full analysis report, section by section
pub fn render_analysis(report: &AnalysisReport, width: usize, color: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", heading("Overall Angle Summary", color));
    let _ = writeln!(out, "{}", wrap(&report.angle_summary, width, "  "));
    let _ = writeln!(out);

    let confidence = format!("Confidence: {}%", report.confidence_percent());
    let confidence = if color {
        confidence.green().bold().to_string()
    } else {
        confidence
    };
    let _ = writeln!(out, "{}  {}", heading("Angle Breakdown", color), confidence);
    for group in report.tag_groups() {
        let _ = writeln!(out, "  {}", label(&group.title.to_uppercase(), color));
        let _ = writeln!(out, "{}", wrap(&group.items.join(" · "), width, "    "));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", heading("Political Spectrum", color));
    let _ = writeln!(out, "  {}", report.political_score_label());
    let _ = writeln!(out, "{}", wrap(&report.political_summary, width, "  "));

    if report.has_reflection() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", heading("LLM Reflection", color));
        let reflection = wrap(&report.reflection, width, "  | ");
        if color {
            let _ = writeln!(out, "{}", reflection.green());
        } else {
            let _ = writeln!(out, "{}", reflection);
        }
    }

    out
}

/// Rewritten text under its heading
pub fn render_rewrite(text: &str, width: usize, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading("Unbiased Result", color));
    let _ = writeln!(out, "{}", wrap(text, width, "  "));
    out
}
