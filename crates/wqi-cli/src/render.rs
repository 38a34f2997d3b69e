//! Renderers for analysis and improvement results
//!
//! Every renderer builds a display string from a result object; printing
//! happens at the binary edge. That keeps them testable without a terminal.

use colored::Colorize;

use wqi_core::{AnalysisReport, HealthStatus, Improvement};

use crate::score::Band;

/// Shown in place of an empty or absent list.
pub const EMPTY_LIST_PLACEHOLDER: &str = "None detected";

/// A score value painted with its band color.
pub fn paint_score(value: f64) -> String {
    let (r, g, b) = Band::classify(value).rgb();
    format_value(value).truecolor(r, g, b).bold().to_string()
}

/// Render a titled bullet list, one entry per item in input order, or a
/// single placeholder entry when there are no items.
pub fn render_list(title: &str, items: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", title.bold()));
    if items.is_empty() {
        out.push_str(&format!("  • {}\n", EMPTY_LIST_PLACEHOLDER.dimmed()));
    } else {
        for item in items {
            out.push_str(&format!("  • {}\n", item));
        }
    }
    out
}

pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n\n",
        "Overall score:".bold(),
        paint_score(report.overall_score)
    ));

    out.push_str(&score_line("Clarity", report.scores.clarity));
    out.push_str(&score_line("Coherence", report.scores.coherence));
    out.push_str(&score_line("Grammar", report.scores.grammar));
    out.push_str(&score_line("Tone consistency", report.scores.tone_consistency));
    if let Some(value) = report.scores.originality {
        out.push_str(&score_line("Originality", value));
    }
    if let Some(value) = report.scores.verbosity {
        out.push_str(&score_line("Verbosity", value));
    }
    if let Some(value) = report.ai_likeness {
        // Not a rubric score, so no band color: high means "reads like AI".
        out.push_str(&format!(
            "  {:<17} {}\n",
            "AI likeness:",
            format_value(value).dimmed()
        ));
    }

    out.push_str(&format!("\n{}\n  {}\n\n", "Summary".bold(), report.summary));

    out.push_str(&render_list("Strengths", &report.strengths));
    out.push_str(&render_list("Weaknesses", &report.weaknesses));
    if !report.suggestions.is_empty() {
        out.push_str(&render_list("Suggestions", &report.suggestions));
    }

    out
}

pub fn render_improvement(improvement: &Improvement) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Improved text".bold()));
    out.push_str(&indented(&improvement.improved_text));
    out.push('\n');

    out.push_str(&format!("{}\n", "Explanation".bold()));
    out.push_str(&indented(&improvement.explanation));
    out.push('\n');

    out.push_str(&render_list("Changes made", &improvement.changes_made));

    out
}

pub fn render_health(health: &HealthStatus) -> String {
    let service = health.service.as_deref().unwrap_or("writing quality service");
    if health.is_ok() {
        format!("{} {} is up", "✅".green(), service)
    } else {
        format!(
            "{} {} answered with status '{}'",
            "⚠️".yellow(),
            service,
            health.status
        )
    }
}

fn score_line(label: &str, value: f64) -> String {
    format!("  {:<17} {}\n", format!("{}:", label), paint_score(value))
}

fn indented(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
