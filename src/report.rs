//! Output formatting for timecheck results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::analysis::{
    explain, observations, space_complexity, ComplexityLabel, ComplexityResult, Language,
    Observation, Rating, Signals, SpaceEstimate,
};

/// Everything shown for one analyzed snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub version: String,
    /// File path, or `<stdin>`.
    pub source: String,
    pub language: Language,
    /// Whether the language was auto-detected.
    pub detected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    pub signals: Signals,
    pub inferred_time_complexity: ComplexityLabel,
    pub rating: Rating,
    pub explanation: String,
    pub space_complexity: SpaceEstimate,
    pub observations: Vec<Observation>,
}

impl Report {
    /// Build the report for an engine result.
    pub fn new(
        source: &str,
        language: Language,
        detected: bool,
        function_name: &str,
        result: ComplexityResult,
    ) -> Self {
        let label = result.inferred_time_complexity;
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.to_string(),
            language,
            detected,
            function_name: Some(function_name.to_string()).filter(|n| !n.is_empty()),
            explanation: explain(label, &result.signals),
            space_complexity: space_complexity(&result.signals),
            observations: observations(&result.signals),
            rating: label.rating(),
            inferred_time_complexity: label,
            signals: result.signals,
        }
    }
}

// =============================================================================
// JSON Format
// =============================================================================

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &Report) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write a report in JSON format to stdout.
pub fn write_json(report: &Report) -> anyhow::Result<()> {
    println!("{}", render_json(report)?);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write a report in pretty format to stdout.
pub fn write_pretty(report: &Report) {
    print!("{}", render_pretty(report));
}

/// Render a report for the terminal.
pub fn render_pretty(report: &Report) -> String {
    let mut out = String::new();

    // Header
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {} v{}",
        "timecheck".cyan().bold(),
        report.version
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "  {}{}", "Source:   ".dimmed(), report.source);
    let detected = if report.detected { " (detected)" } else { "" };
    let _ = writeln!(out, "  {}{}{}", "Language: ".dimmed(), report.language, detected);
    if let Some(ref name) = report.function_name {
        let _ = writeln!(out, "  {}{}", "Function: ".dimmed(), name);
    }
    let _ = writeln!(out);

    // Summary
    let label = report.inferred_time_complexity.to_string();
    let _ = writeln!(
        out,
        "  {}  {}",
        "TIME COMPLEXITY ".bold(),
        colored_label(&label, report.rating)
    );
    let _ = writeln!(out, "  {}", report.explanation);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}  {}",
        "SPACE COMPLEXITY".bold(),
        report.space_complexity.label.green()
    );
    let _ = writeln!(out, "  {}", report.space_complexity.reason.dimmed());
    let _ = writeln!(out);

    // Observations
    if !report.observations.is_empty() {
        let _ = writeln!(out, "  {}", "Key Observations".bold());
        for obs in &report.observations {
            let _ = writeln!(out, "    {} {}", obs.icon, obs.text);
        }
        let _ = writeln!(out);
    }

    // Breakdown
    let signals = &report.signals;
    let _ = writeln!(out, "  {}", "Breakdown".bold());
    write_metric(&mut out, "Loops Detected", signals.loop_count.to_string());
    write_metric(&mut out, "Max Nesting Depth", signals.max_nesting.to_string());
    write_metric(&mut out, "Recursive Calls", yes_no(signals.recursion_calls > 0));
    write_metric(&mut out, "Sorting Operations", yes_no(signals.sort_calls > 0));
    write_metric(&mut out, "Hash-based Structures", yes_no(signals.hash_usage));
    let _ = writeln!(out);

    out
}

fn write_metric(out: &mut String, label: &str, value: String) {
    let _ = writeln!(out, "    {:<24} {}", format!("{}:", label).dimmed(), value);
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

fn colored_label(label: &str, rating: Rating) -> ColoredString {
    match rating {
        Rating::Excellent => label.green().bold(),
        Rating::Good => label.green(),
        Rating::Moderate => label.yellow(),
        Rating::Poor => label.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        let signals = Signals {
            loop_count: 2,
            max_nesting: 2,
            sort_calls: 0,
            recursion_calls: 0,
            hash_usage: false,
        };
        Report::new(
            "snippet.py",
            Language::Python,
            true,
            "f",
            ComplexityResult::from_signals(signals),
        )
    }

    #[test]
    fn test_report_fields() {
        let report = sample_report();
        assert_eq!(report.inferred_time_complexity.to_string(), "O(n^2)");
        assert_eq!(report.rating, Rating::Poor);
        assert!(report.explanation.contains("quadratic"));
        assert_eq!(report.space_complexity.label, "O(1)");
        assert_eq!(report.function_name.as_deref(), Some("f"));
    }

    #[test]
    fn test_empty_function_name_is_omitted() {
        let report = Report::new(
            "<stdin>",
            Language::Java,
            false,
            "",
            ComplexityResult::from_signals(Signals::new()),
        );
        assert!(report.function_name.is_none());

        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert!(json.get("functionName").is_none());
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&sample_report()).unwrap()).unwrap();

        assert_eq!(json["language"], "python");
        assert_eq!(json["detected"], true);
        assert_eq!(json["inferredTimeComplexity"], "O(n^2)");
        assert_eq!(json["rating"], "poor");
        assert_eq!(json["signals"]["loopCount"], 2);
        assert_eq!(json["spaceComplexity"]["label"], "O(1)");
        assert!(json["observations"].is_array());
    }

    #[test]
    fn test_pretty_contains_breakdown() {
        colored::control::set_override(false);
        let text = render_pretty(&sample_report());

        assert!(text.contains("Language: python (detected)"));
        assert!(text.contains("O(n^2)"));
        assert!(text.contains("Loops Detected:"));
        assert!(text.contains("Hash-based Structures:"));
    }
}
