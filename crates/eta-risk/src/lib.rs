//! # eta-risk
//!
//! **Tier 3 (Analysis)**
//!
//! Pre-mortem checks run before starting a task. The task description is
//! checked against HIGH and MEDIUM keyword lists, and the codebase is
//! scanned line by line for patterns that mark sensitive areas (database,
//! auth, payment, external calls, file writes, environment config).
//!
//! ## What belongs here
//! * Task keyword assessment
//! * Regex compilation and the per-line codebase scan
//!
//! ## What does NOT belong here
//! * Pattern tables (use eta-settings)
//! * Rendering (use eta-format)

use std::path::Path;

use eta_content::read_text_lossy;
use eta_settings::{RiskRules, ScopeSettings};
use eta_types::{RiskFinding, RiskLevel, RiskReport, TaskRisk};
use eta_walk::{SourceFile, list_source_files};
use regex::{Regex, RegexBuilder};

/// Risk keywords found in a task description.
///
/// HIGH keywords come first, then MEDIUM keywords not already recorded,
/// each in table order.
pub fn assess_task(description: &str, rules: &RiskRules) -> Vec<TaskRisk> {
    let lower = description.to_lowercase();
    let mut risks: Vec<TaskRisk> = Vec::new();
    let levels = [
        (RiskLevel::High, &rules.high_keywords),
        (RiskLevel::Medium, &rules.medium_keywords),
    ];
    for (level, keywords) in levels {
        for keyword in keywords {
            let keyword = keyword.to_lowercase();
            if keyword.is_empty()
                || !lower.contains(keyword.as_str())
                || risks.iter().any(|r| r.keyword == keyword)
            {
                continue;
            }
            risks.push(TaskRisk { keyword, level });
        }
    }
    risks
}

struct CompiledGroup {
    category: String,
    level: RiskLevel,
    patterns: Vec<(String, Regex)>,
}

/// Case-insensitive pattern table, compiled once per scan.
pub struct RiskMatcher {
    groups: Vec<CompiledGroup>,
}

impl RiskMatcher {
    pub fn compile(rules: &RiskRules) -> Result<Self, regex::Error> {
        let groups = rules
            .patterns
            .iter()
            .map(|group| {
                let patterns = group
                    .patterns
                    .iter()
                    .map(|p| {
                        let re = RegexBuilder::new(p).case_insensitive(true).build()?;
                        Ok((p.clone(), re))
                    })
                    .collect::<Result<Vec<_>, regex::Error>>()?;
                Ok(CompiledGroup {
                    category: group.category.clone(),
                    level: group.level,
                    patterns,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { groups })
    }

    /// Findings for one file's text, ordered by category, pattern, line.
    pub fn scan_text(&self, path: &str, text: &str) -> Vec<RiskFinding> {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut findings = Vec::new();
        for group in &self.groups {
            for (pattern, re) in &group.patterns {
                for (idx, line) in lines.iter().enumerate() {
                    if re.is_match(line) {
                        findings.push(RiskFinding {
                            category: group.category.clone(),
                            path: path.to_string(),
                            line: idx + 1,
                            pattern: pattern.clone(),
                            level: group.level,
                        });
                    }
                }
            }
        }
        findings
    }
}

fn scan_file(file: &SourceFile, matcher: &RiskMatcher) -> Vec<RiskFinding> {
    match read_text_lossy(&file.path) {
        Ok(text) => matcher.scan_text(&file.path.display().to_string(), &text),
        Err(err) => {
            tracing::debug!(path = %file.path.display(), error = %format!("{err:#}"), "skipping unreadable file");
            Vec::new()
        }
    }
}

/// Scan every source file under `root` selected by `scope`.
pub fn scan_codebase(root: &Path, scope: &ScopeSettings, matcher: &RiskMatcher) -> Vec<RiskFinding> {
    let files = list_source_files(root, scope);
    let findings: Vec<RiskFinding> = files.iter().flat_map(|f| scan_file(f, matcher)).collect();
    tracing::debug!(
        root = %root.display(),
        files = files.len(),
        findings = findings.len(),
        "risk scan complete"
    );
    findings
}

/// Assess the task and scan the codebase.
pub fn build_report(
    task: &str,
    root: &Path,
    scope: &ScopeSettings,
    rules: &RiskRules,
) -> Result<RiskReport, regex::Error> {
    let matcher = RiskMatcher::compile(rules)?;
    Ok(RiskReport {
        task: task.to_string(),
        task_risks: assess_task(task, rules),
        findings: scan_codebase(root, scope, &matcher),
    })
}
