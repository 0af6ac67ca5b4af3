//! # eta-format
//!
//! **Tier 4 (Formatting)**
//!
//! Renders estimates and risk reports for humans (plain text) and for
//! machines (pretty JSON). Every renderer returns a `String`; printing is
//! left to the CLI.
//!
//! ## What belongs here
//! * Text report layout
//! * JSON serialization of receipts
//!
//! ## What does NOT belong here
//! * Business logic (calculating estimates)
//! * CLI arg parsing

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use anyhow::Result;
use eta_math::minutes_to_hours;
use eta_types::{EstimateReceipt, RiskFinding, RiskReport, ScopeMetrics, TaskEstimate};

/// Above this many high-estimate minutes the report suggests phased commits.
const PHASED_ABOVE_MINUTES: f64 = 30.0;
/// Above this many high-estimate minutes the report suggests a midpoint checkpoint.
const CHECKPOINT_ABOVE_MINUTES: f64 = 15.0;
/// Estimates at or beyond this many minutes are shown in hours.
const HOURS_FROM_MINUTES: f64 = 60.0;

// -----------------------
// Estimate output
// -----------------------

/// Plain-text estimate report.
pub fn render_estimate_text(task: &str, metrics: &ScopeMetrics, estimate: &TaskEstimate) -> String {
    let mut s = String::new();

    s.push_str("Task Estimate\n\n");
    s.push_str(&format!("Task: {task}\n"));
    s.push_str(&format!("Category: {}\n\n", estimate.category.title()));

    s.push_str("Scope Analysis:\n");
    s.push_str(&format!("  Files in codebase: {}\n", metrics.total_files));
    s.push_str(&format!(
        "  Total lines: {}\n",
        thousands(metrics.total_lines)
    ));
    s.push_str(&format!("  Test files: {}\n", metrics.test_files));
    if metrics.complexity_markers > 0 {
        s.push_str(&format!(
            "  Tech debt markers: {}\n",
            metrics.complexity_markers
        ));
    }
    s.push('\n');

    s.push_str(&format!(
        "Expected iterations: {}-{}\n\n",
        estimate.iterations_low, estimate.iterations_high
    ));

    s.push_str(&format!("Estimated time: {}\n\n", time_range(estimate)));

    s.push_str("Breakdown:\n");
    for (phase, minutes) in estimate.breakdown.phases() {
        s.push_str(&format!("  {}: ~{minutes:.0} min\n", capitalize(phase)));
    }

    if !estimate.warnings.is_empty() {
        s.push_str("\nRisk factors (buffer added):\n");
        for tag in &estimate.warnings {
            s.push_str(&format!("  - {}\n", tag.label()));
        }
    }
    s.push('\n');

    if estimate.high_estimate > PHASED_ABOVE_MINUTES {
        s.push_str("Recommendation: Break into phases with commits between each.\n");
        s.push_str("   Checkpoint every 15 minutes.\n");
    } else if estimate.high_estimate > CHECKPOINT_ABOVE_MINUTES {
        s.push_str("Checkpoint at the halfway point.\n");
    }

    s
}

/// `estimate --json` output.
pub fn render_estimate_json(task: &str, metrics: &ScopeMetrics, estimate: &TaskEstimate) -> Result<String> {
    let receipt = EstimateReceipt::new(task, metrics, estimate);
    Ok(serde_json::to_string_pretty(&receipt)?)
}

fn time_range(estimate: &TaskEstimate) -> String {
    if estimate.high_estimate < HOURS_FROM_MINUTES {
        format!(
            "{:.0}-{:.0} minutes",
            estimate.low_estimate, estimate.high_estimate
        )
    } else {
        format!(
            "{:.1}-{:.1} hours",
            minutes_to_hours(estimate.low_estimate),
            minutes_to_hours(estimate.high_estimate)
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decimal with `,` every three digits.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// -----------------------
// Risk output
// -----------------------

/// Plain-text pre-mortem report.
///
/// Findings are grouped by category (sorted). Each group lists up to
/// `max_samples` of its first findings, one per file.
pub fn render_risk_text(report: &RiskReport, max_samples: usize) -> String {
    let mut s = String::new();
    s.push_str(&format!("Risk Analysis: {}\n\n", report.task));

    if !report.task_risks.is_empty() {
        let mut risks: Vec<_> = report.task_risks.iter().collect();
        risks.sort_by_key(|r| r.level);
        s.push_str("Task Risk Indicators:\n");
        for risk in risks {
            s.push_str(&format!("  [{}] {}\n", risk.level, risk.keyword));
        }
        s.push('\n');
    }

    if !report.findings.is_empty() {
        let mut by_category: BTreeMap<&str, Vec<&RiskFinding>> = BTreeMap::new();
        for f in &report.findings {
            by_category.entry(f.category.as_str()).or_default().push(f);
        }

        s.push_str("Codebase Risk Areas:\n");
        for (category, findings) in &by_category {
            s.push_str(&format!(
                "  [{}] {category}: {} occurrences\n",
                findings[0].level,
                findings.len()
            ));
            let mut seen: BTreeSet<&str> = BTreeSet::new();
            for f in findings.iter().take(max_samples) {
                if seen.insert(f.path.as_str()) {
                    s.push_str(&format!("    - {}:{}\n", f.path, f.line));
                }
            }
        }
        s.push('\n');
    }

    if report.is_clean() {
        s.push_str("No obvious risk indicators found.\n");
        s.push_str("Consider manual review for edge cases.\n");
    }

    s
}

/// `risk --json` output.
pub fn render_risk_json(report: &RiskReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
        assert_eq!(thousands(100000), "100,000");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("implementation"), "Implementation");
        assert_eq!(capitalize(""), "");
    }
}
