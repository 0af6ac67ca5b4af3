//! # eta-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings for every estimation stage: the extension allow-list
//! and skip set used by the walker, the tier table, the ordered keyword
//! rules, the warning thresholds, the estimate weights and the pre-mortem
//! risk tables.
//!
//! Settings are built once (defaults, optionally overlaid by an `eta.toml`),
//! validated, and then passed by reference into each component. Nothing in
//! the workspace reads a global table.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default tables and their invariants
//! * TOML parsing
//!
//! ## What does NOT belong here
//! * Clap parsing (use eta-config)
//! * Filesystem walking
//! * Business logic

use std::path::Path;

use eta_types::{Category, IterationRange, RiskLevel, WarningTag};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Tier '{0}' must have positive base_minutes")]
    NonPositiveBase(Category),

    #[error("Tier '{higher}' base_minutes must exceed tier '{lower}'")]
    NonIncreasingBase { lower: Category, higher: Category },

    #[error("Tier '{0}' iteration range is invalid (need 0 < low <= high)")]
    InvalidIterations(Category),

    #[error("Scope extension list is empty")]
    EmptyExtensions,

    #[error("Classification rules are empty")]
    EmptyRules,

    #[error("Estimate weight '{0}' must be a non-negative number")]
    NegativeWeight(&'static str),

    #[error("Estimate low_factor ({low}) must not exceed high_factor ({high})")]
    InvertedFactors { low: f64, high: f64 },
}

/// Complete settings for one process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtaSettings {
    pub scope: ScopeSettings,
    pub tiers: TierTable,
    pub classify: ClassifyRules,
    pub warnings: WarningRules,
    pub weights: EstimateWeights,
    pub risk: RiskRules,
}

impl EtaSettings {
    /// Parse and validate settings from a TOML string.
    ///
    /// Sections that are absent keep their defaults.
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Render the settings as TOML; the output parses back to an equal value.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check the invariants every component relies on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.scope.extensions.is_empty() {
            return Err(SettingsError::EmptyExtensions);
        }
        if self.classify.rules.is_empty() {
            return Err(SettingsError::EmptyRules);
        }
        self.tiers.validate()?;
        self.weights.validate()
    }
}

// ============================================================
// Scope
// ============================================================

/// Which files the walker visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeSettings {
    /// File-name suffixes (with leading dot) to include.
    pub extensions: Vec<String>,

    /// Directory names that are never descended into.
    pub skip_dirs: Vec<String>,

    /// Honour `.gitignore` / `.ignore` files while walking.
    pub respect_ignore_files: bool,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            extensions: strings(&[
                ".py", ".js", ".ts", ".tsx", ".jsx", ".go", ".rs", ".rb", ".java",
            ]),
            skip_dirs: strings(&[
                "node_modules",
                "venv",
                ".venv",
                "__pycache__",
                ".git",
                "dist",
                "build",
            ]),
            respect_ignore_files: false,
        }
    }
}

// ============================================================
// Tiers
// ============================================================

/// Base duration and iteration range bound to one severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    pub base_minutes: f64,
    pub iterations: IterationRange,
    /// Files assumed in scope when the caller gives no override.
    pub default_files: u32,
}

impl TierProfile {
    const fn new(base_minutes: f64, low: u32, high: u32, default_files: u32) -> Self {
        Self {
            base_minutes,
            iterations: IterationRange::new(low, high),
            default_files,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierTable {
    pub trivial: TierProfile,
    pub simple: TierProfile,
    pub medium: TierProfile,
    pub complex: TierProfile,
    pub major: TierProfile,
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            trivial: TierProfile::new(4.0, 1, 3, 1),
            simple: TierProfile::new(7.0, 3, 8, 2),
            medium: TierProfile::new(15.0, 8, 20, 5),
            complex: TierProfile::new(35.0, 20, 50, 12),
            major: TierProfile::new(75.0, 50, 150, 25),
        }
    }
}

impl TierTable {
    pub fn get(&self, category: Category) -> &TierProfile {
        match category {
            Category::Trivial => &self.trivial,
            Category::Simple => &self.simple,
            Category::Medium => &self.medium,
            Category::Complex => &self.complex,
            Category::Major => &self.major,
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        for category in Category::ALL {
            let tier = self.get(category);
            if tier.base_minutes.is_nan() || tier.base_minutes <= 0.0 {
                return Err(SettingsError::NonPositiveBase(category));
            }
            let IterationRange { low, high } = tier.iterations;
            if low == 0 || low > high {
                return Err(SettingsError::InvalidIterations(category));
            }
        }
        for pair in Category::ALL.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            if self.get(higher).base_minutes <= self.get(lower).base_minutes {
                return Err(SettingsError::NonIncreasingBase { lower, higher });
            }
        }
        Ok(())
    }
}

// ============================================================
// Classification
// ============================================================

/// One entry of the ordered categorization table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// Ordered first-match rules. Order encodes the severity tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyRules {
    /// Category used when no rule matches.
    pub fallback: Category,
    pub rules: Vec<TierRule>,
}

impl Default for ClassifyRules {
    fn default() -> Self {
        Self {
            fallback: Category::Medium,
            rules: vec![
                rule(
                    Category::Major,
                    &[
                        "migrate",
                        "rewrite",
                        "framework",
                        "upgrade",
                        "graphql",
                        "overhaul",
                        "everything",
                    ],
                ),
                rule(
                    Category::Complex,
                    &[
                        "authentication",
                        "auth",
                        "security",
                        "architectural",
                        "cross-cutting",
                        "full stack",
                    ],
                ),
                rule(
                    Category::Medium,
                    &["feature", "endpoint", "refactor", "module", "migration"],
                ),
                rule(
                    Category::Simple,
                    &["fix", "bug", "update", "add test", "validate", "single"],
                ),
                rule(
                    Category::Trivial,
                    &["typo", "rename", "config", "constant", "string", "import"],
                ),
            ],
        }
    }
}

fn rule(category: Category, keywords: &[&str]) -> TierRule {
    TierRule {
        category,
        keywords: strings(keywords),
    }
}

// ============================================================
// Warnings
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningGroup {
    pub tag: WarningTag,
    pub keywords: Vec<String>,
}

/// Scope thresholds; every comparison is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeThresholds {
    /// `total_files` above this raises `large_codebase`.
    pub large_codebase_files: usize,
    /// With zero test files, `total_files` above this raises `no_tests`.
    pub no_tests_min_files: usize,
    /// `complexity_markers` above this raises `tech_debt`.
    pub tech_debt_markers: usize,
    /// `largest_file_lines` above this raises `large_files`.
    pub large_file_lines: usize,
}

impl Default for ScopeThresholds {
    fn default() -> Self {
        Self {
            large_codebase_files: 50,
            no_tests_min_files: 5,
            tech_debt_markers: 20,
            large_file_lines: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningRules {
    pub thresholds: ScopeThresholds,
    pub groups: Vec<WarningGroup>,
}

impl Default for WarningRules {
    fn default() -> Self {
        Self {
            thresholds: ScopeThresholds::default(),
            groups: vec![
                group(
                    WarningTag::Vague,
                    &["make it work", "just fix", "somehow", "whatever"],
                ),
                group(
                    WarningTag::ScopeCreep,
                    &["everything", "all", "entire", "whole codebase"],
                ),
                group(
                    WarningTag::External,
                    &["api", "integration", "third-party", "external"],
                ),
                group(
                    WarningTag::Risky,
                    &["production", "database", "migration", "security", "auth"],
                ),
            ],
        }
    }
}

fn group(tag: WarningTag, keywords: &[&str]) -> WarningGroup {
    WarningGroup {
        tag,
        keywords: strings(keywords),
    }
}

// ============================================================
// Estimate weights
// ============================================================

/// Per-phase shares of base minutes and scope adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseWeights {
    pub analysis_base: f64,
    pub implementation_base: f64,
    pub implementation_scope: f64,
    pub testing_base: f64,
    pub testing_scope: f64,
    pub verification_base: f64,
}

impl Default for PhaseWeights {
    fn default() -> Self {
        Self {
            analysis_base: 0.2,
            implementation_base: 0.5,
            implementation_scope: 0.7,
            testing_base: 0.2,
            testing_scope: 0.3,
            verification_base: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateWeights {
    /// Minutes added per file in scope.
    pub per_file_minutes: f64,
    /// Extra minutes per file when the task mentions tests.
    pub test_per_file_minutes: f64,
    /// Buffer share of base minutes for vague or scope-creep tasks.
    pub requirement_risk_buffer: f64,
    /// Buffer share when the warning count exceeds `many_warnings`.
    pub many_warnings_buffer: f64,
    /// Buffer share for any other non-empty warning set.
    pub some_warnings_buffer: f64,
    pub many_warnings: usize,
    pub low_factor: f64,
    pub high_factor: f64,
    pub phases: PhaseWeights,
}

impl Default for EstimateWeights {
    fn default() -> Self {
        Self {
            per_file_minutes: 0.5,
            test_per_file_minutes: 1.0,
            requirement_risk_buffer: 1.0,
            many_warnings_buffer: 0.5,
            some_warnings_buffer: 0.25,
            many_warnings: 2,
            low_factor: 0.7,
            high_factor: 1.5,
            phases: PhaseWeights::default(),
        }
    }
}

impl EstimateWeights {
    /// Every weight must be a non-negative number and the low factor must
    /// not exceed the high factor, so bounds stay ordered and non-negative.
    fn validate(&self) -> Result<(), SettingsError> {
        let p = &self.phases;
        let weights = [
            ("per_file_minutes", self.per_file_minutes),
            ("test_per_file_minutes", self.test_per_file_minutes),
            ("requirement_risk_buffer", self.requirement_risk_buffer),
            ("many_warnings_buffer", self.many_warnings_buffer),
            ("some_warnings_buffer", self.some_warnings_buffer),
            ("low_factor", self.low_factor),
            ("high_factor", self.high_factor),
            ("phases.analysis_base", p.analysis_base),
            ("phases.implementation_base", p.implementation_base),
            ("phases.implementation_scope", p.implementation_scope),
            ("phases.testing_base", p.testing_base),
            ("phases.testing_scope", p.testing_scope),
            ("phases.verification_base", p.verification_base),
        ];
        if let Some(&(name, _)) = weights
            .iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(SettingsError::NegativeWeight(name));
        }
        if self.low_factor > self.high_factor {
            return Err(SettingsError::InvertedFactors {
                low: self.low_factor,
                high: self.high_factor,
            });
        }
        Ok(())
    }
}

// ============================================================
// Pre-mortem risk tables
// ============================================================

/// Regex patterns (case-insensitive) that flag one risk area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPatternGroup {
    pub category: String,
    pub level: RiskLevel,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRules {
    pub high_keywords: Vec<String>,
    pub medium_keywords: Vec<String>,
    /// Sample locations shown per category in the text report.
    pub max_samples: usize,
    pub patterns: Vec<RiskPatternGroup>,
}

impl Default for RiskRules {
    fn default() -> Self {
        Self {
            high_keywords: strings(&[
                "migration",
                "payment",
                "auth",
                "security",
                "delete",
                "production",
                "database",
                "schema",
                "refactor",
                "upgrade",
                "integration",
                "api",
            ]),
            medium_keywords: strings(&[
                "feature",
                "endpoint",
                "service",
                "module",
                "component",
                "handler",
            ]),
            max_samples: 5,
            patterns: vec![
                risk_group(
                    "database",
                    RiskLevel::High,
                    &[
                        r"\.execute\(",
                        "migration",
                        "schema",
                        "ALTER TABLE",
                        "DROP",
                        "DELETE FROM",
                    ],
                ),
                risk_group(
                    "auth",
                    RiskLevel::High,
                    &["password", "token", "secret", "api_key", "credential", "auth"],
                ),
                risk_group(
                    "payment",
                    RiskLevel::High,
                    &["stripe", "payment", "charge", "invoice", "billing", "price"],
                ),
                risk_group(
                    "external_api",
                    RiskLevel::Medium,
                    &[
                        r"requests\.(get|post|put)",
                        r"fetch\(",
                        "axios",
                        r"http\.",
                        "webhook",
                    ],
                ),
                risk_group(
                    "file_ops",
                    RiskLevel::Medium,
                    &[
                        r#"open\(.*["']w"#,
                        r"\.write\(",
                        "shutil",
                        r"os\.remove",
                        "unlink",
                    ],
                ),
                risk_group(
                    "env_config",
                    RiskLevel::Medium,
                    &[r"\.env", "environ", "getenv", r"config\[", r"settings\."],
                ),
            ],
        }
    }
}

fn risk_group(category: &str, level: RiskLevel, patterns: &[&str]) -> RiskPatternGroup {
    RiskPatternGroup {
        category: category.to_string(),
        level,
        patterns: strings(patterns),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
