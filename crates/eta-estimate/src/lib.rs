//! # eta-estimate
//!
//! **Tier 3 (Analysis)**
//!
//! Turns a category, warning set and file count into a [`TaskEstimate`]:
//! low/high minute bounds, an iteration range and a per-phase breakdown.
//!
//! ## What belongs here
//! * Scope adjustment and warning buffer arithmetic
//! * Rounding of reported minute values
//! * The `estimate_task` pipeline (categorize, detect, calculate)
//!
//! ## What does NOT belong here
//! * Filesystem scanning (use eta-scope)
//! * Rendering (use eta-format)

use eta_math::round1;
use eta_settings::{EstimateWeights, EtaSettings, PhaseWeights, TierTable};
use eta_types::{Breakdown, Category, ScopeMetrics, TaskEstimate, WarningTag};

/// Share of base minutes added as buffer for this warning set.
fn buffer_share(warnings: &[WarningTag], weights: &EstimateWeights) -> f64 {
    if warnings.iter().any(|w| w.is_requirement_risk()) {
        weights.requirement_risk_buffer
    } else if warnings.len() > weights.many_warnings {
        weights.many_warnings_buffer
    } else if !warnings.is_empty() {
        weights.some_warnings_buffer
    } else {
        0.0
    }
}

fn breakdown(base: f64, scope: f64, p: &PhaseWeights) -> Breakdown {
    Breakdown {
        analysis: round1(base * p.analysis_base),
        implementation: round1(base * p.implementation_base + scope * p.implementation_scope),
        testing: round1(base * p.testing_base + scope * p.testing_scope),
        verification: round1(base * p.verification_base),
    }
}

/// Compute the estimate for an already categorized task.
///
/// `files_override` replaces the tier's default file count. A description
/// mentioning "test" (any case) adds per-file testing overhead. The
/// breakdown is built from base minutes and scope only; the warning buffer
/// widens the bounds but is not attributed to a phase.
pub fn calculate(
    description: &str,
    category: Category,
    warnings: Vec<WarningTag>,
    files_override: Option<u32>,
    tiers: &TierTable,
    weights: &EstimateWeights,
) -> TaskEstimate {
    let tier = tiers.get(category);
    let base = tier.base_minutes;
    let files = f64::from(files_override.unwrap_or(tier.default_files));

    let mut scope_adjustment = files * weights.per_file_minutes;
    if description.to_lowercase().contains("test") {
        scope_adjustment += files * weights.test_per_file_minutes;
    }

    let warning_buffer = base * buffer_share(&warnings, weights);
    let total = base + scope_adjustment + warning_buffer;

    tracing::debug!(
        %category,
        base,
        scope_adjustment,
        warning_buffer,
        total,
        "calculated estimate"
    );

    TaskEstimate {
        category,
        base_minutes: base,
        scope_adjustment: round1(scope_adjustment),
        warning_buffer: round1(warning_buffer),
        low_estimate: round1(total * weights.low_factor),
        high_estimate: round1(total * weights.high_factor),
        iterations_low: tier.iterations.low,
        iterations_high: tier.iterations.high,
        warnings,
        breakdown: breakdown(base, scope_adjustment, &weights.phases),
    }
}

/// Categorize, detect warnings and calculate in one call.
pub fn estimate_task(
    description: &str,
    metrics: &ScopeMetrics,
    files_override: Option<u32>,
    settings: &EtaSettings,
) -> TaskEstimate {
    let category = eta_classify::categorize(description, &settings.classify);
    let warnings = eta_classify::detect_warnings(description, metrics, &settings.warnings);
    calculate(
        description,
        category,
        warnings,
        files_override,
        &settings.tiers,
        &settings.weights,
    )
}
