//! # eta-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `eta`.
//! It contains only data types and Serde definitions.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: The primary contract is the JSON shape of
//! [`EstimateReceipt`] and [`RiskReport`], not Rust struct literals.
//!
//! ## What belongs here
//! * Pure data structs (metrics, estimates, receipts)
//! * Serialization/Deserialization logic
//! * Fixed label tables that are part of the output contract
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Keyword tables or thresholds (use eta-settings)

pub mod risk;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use risk::{RiskFinding, RiskLevel, RiskReport, TaskRisk};

/// Severity tier of a task, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Trivial,
    Simple,
    Medium,
    Complex,
    Major,
}

impl Category {
    /// Every tier in ascending severity.
    pub const ALL: [Category; 5] = [
        Category::Trivial,
        Category::Simple,
        Category::Medium,
        Category::Complex,
        Category::Major,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Trivial => "trivial",
            Category::Simple => "simple",
            Category::Medium => "medium",
            Category::Complex => "complex",
            Category::Major => "major",
        }
    }

    /// Capitalized name used by the text report.
    pub fn title(self) -> &'static str {
        match self {
            Category::Trivial => "Trivial",
            Category::Simple => "Simple",
            Category::Medium => "Medium",
            Category::Complex => "Complex",
            Category::Major => "Major",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named risk or complexity signal that adds buffer to an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningTag {
    Vague,
    ScopeCreep,
    External,
    Risky,
    LargeCodebase,
    NoTests,
    TechDebt,
    LargeFiles,
}

impl WarningTag {
    pub const ALL: [WarningTag; 8] = [
        WarningTag::Vague,
        WarningTag::ScopeCreep,
        WarningTag::External,
        WarningTag::Risky,
        WarningTag::LargeCodebase,
        WarningTag::NoTests,
        WarningTag::TechDebt,
        WarningTag::LargeFiles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WarningTag::Vague => "vague",
            WarningTag::ScopeCreep => "scope_creep",
            WarningTag::External => "external",
            WarningTag::Risky => "risky",
            WarningTag::LargeCodebase => "large_codebase",
            WarningTag::NoTests => "no_tests",
            WarningTag::TechDebt => "tech_debt",
            WarningTag::LargeFiles => "large_files",
        }
    }

    /// Human label shown under "Risk factors" in the text report.
    pub fn label(self) -> &'static str {
        match self {
            WarningTag::Vague => "Vague requirements",
            WarningTag::ScopeCreep => "Scope creep risk",
            WarningTag::External => "External dependencies",
            WarningTag::Risky => "High-risk changes",
            WarningTag::LargeCodebase => "Large codebase",
            WarningTag::NoTests => "No existing tests",
            WarningTag::TechDebt => "Technical debt present",
            WarningTag::LargeFiles => "Large files detected",
        }
    }

    /// Whether this tag signals unclear or unbounded requirements.
    pub fn is_requirement_risk(self) -> bool {
        matches!(self, WarningTag::Vague | WarningTag::ScopeCreep)
    }
}

impl fmt::Display for WarningTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate statistics over a scanned codebase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeMetrics {
    pub total_files: usize,
    pub total_lines: usize,
    pub test_files: usize,
    /// Occurrences of TODO/FIXME/HACK/XXX across all scanned contents.
    pub complexity_markers: usize,
    /// Distinct extensions observed, with leading dot.
    pub languages: BTreeSet<String>,
    pub largest_file_lines: usize,
}

/// Expected low/high count of agent action cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationRange {
    pub low: u32,
    pub high: u32,
}

impl IterationRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }
}

/// Minutes per work phase. Field order is the report order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub analysis: f64,
    pub implementation: f64,
    pub testing: f64,
    pub verification: f64,
}

impl Breakdown {
    /// `(phase, minutes)` pairs in report order.
    pub fn phases(&self) -> [(&'static str, f64); 4] {
        [
            ("analysis", self.analysis),
            ("implementation", self.implementation),
            ("testing", self.testing),
            ("verification", self.verification),
        ]
    }
}

/// The computed estimate for one task description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEstimate {
    pub category: Category,
    pub base_minutes: f64,
    pub scope_adjustment: f64,
    pub warning_buffer: f64,
    pub low_estimate: f64,
    pub high_estimate: f64,
    pub iterations_low: u32,
    pub iterations_high: u32,
    pub warnings: Vec<WarningTag>,
    /// Excludes `warning_buffer`, so it does not sum to the bounds.
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinutesRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSummary {
    pub total_files: usize,
    pub total_lines: usize,
    pub test_files: usize,
}

impl From<&ScopeMetrics> for ScopeSummary {
    fn from(m: &ScopeMetrics) -> Self {
        Self {
            total_files: m.total_files,
            total_lines: m.total_lines,
            test_files: m.test_files,
        }
    }
}

/// Structured record emitted by `eta estimate --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReceipt {
    pub task: String,
    pub category: Category,
    pub estimate_minutes: MinutesRange,
    pub iterations: IterationRange,
    pub breakdown: Breakdown,
    pub warnings: Vec<WarningTag>,
    pub scope: ScopeSummary,
}

impl EstimateReceipt {
    pub fn new(task: &str, scope: &ScopeMetrics, estimate: &TaskEstimate) -> Self {
        Self {
            task: task.to_string(),
            category: estimate.category,
            estimate_minutes: MinutesRange {
                low: estimate.low_estimate,
                high: estimate.high_estimate,
            },
            iterations: IterationRange::new(estimate.iterations_low, estimate.iterations_high),
            breakdown: estimate.breakdown,
            warnings: estimate.warnings.clone(),
            scope: ScopeSummary::from(scope),
        }
    }
}
