//! Pre-mortem risk report types.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A risk keyword found in the task description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRisk {
    pub keyword: String,
    pub level: RiskLevel,
}

/// A single line in the codebase that matched a risk pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub category: String,
    pub path: String,
    /// 1-based.
    pub line: usize,
    pub pattern: String,
    pub level: RiskLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    pub task: String,
    pub task_risks: Vec<TaskRisk>,
    pub findings: Vec<RiskFinding>,
}

impl RiskReport {
    pub fn is_clean(&self) -> bool {
        self.task_risks.is_empty() && self.findings.is_empty()
    }
}
