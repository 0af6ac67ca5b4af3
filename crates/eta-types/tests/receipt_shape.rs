//! JSON contract tests for `EstimateReceipt`.
//!
//! The receipt is the only structured output consumers parse, so its key
//! names and nesting are pinned here.

use std::collections::BTreeSet;

use eta_types::{
    Breakdown, Category, EstimateReceipt, ScopeMetrics, TaskEstimate, WarningTag,
};
use serde_json::Value;

fn sample_scope() -> ScopeMetrics {
    ScopeMetrics {
        total_files: 12,
        total_lines: 3400,
        test_files: 3,
        complexity_markers: 7,
        languages: BTreeSet::from([".py".to_string(), ".rs".to_string()]),
        largest_file_lines: 420,
    }
}

fn sample_estimate() -> TaskEstimate {
    TaskEstimate {
        category: Category::Simple,
        base_minutes: 7.0,
        scope_adjustment: 1.0,
        warning_buffer: 1.8,
        low_estimate: 6.9,
        high_estimate: 14.7,
        iterations_low: 3,
        iterations_high: 8,
        warnings: vec![WarningTag::External],
        breakdown: Breakdown {
            analysis: 1.4,
            implementation: 4.2,
            testing: 1.7,
            verification: 0.7,
        },
    }
}

fn receipt_json() -> Value {
    let receipt = EstimateReceipt::new("Fix api bug", &sample_scope(), &sample_estimate());
    serde_json::to_value(&receipt).unwrap()
}

#[test]
fn top_level_keys_are_stable() {
    let json = receipt_json();
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "breakdown",
            "category",
            "estimate_minutes",
            "iterations",
            "scope",
            "task",
            "warnings"
        ]
    );
}

#[test]
fn nested_values_carry_estimate_fields() {
    let json = receipt_json();
    assert_eq!(json["task"], "Fix api bug");
    assert_eq!(json["category"], "simple");
    assert_eq!(json["estimate_minutes"]["low"], 6.9);
    assert_eq!(json["estimate_minutes"]["high"], 14.7);
    assert_eq!(json["iterations"]["low"], 3);
    assert_eq!(json["iterations"]["high"], 8);
    assert_eq!(json["breakdown"]["implementation"], 4.2);
    assert_eq!(json["warnings"], serde_json::json!(["external"]));
}

#[test]
fn scope_section_is_a_summary_only() {
    let json = receipt_json();
    let scope = json["scope"].as_object().unwrap();
    assert_eq!(scope.len(), 3);
    assert_eq!(scope["total_files"], 12);
    assert_eq!(scope["total_lines"], 3400);
    assert_eq!(scope["test_files"], 3);
    assert!(scope.get("languages").is_none());
}

#[test]
fn receipt_round_trips_through_json() {
    let receipt = EstimateReceipt::new("Fix api bug", &sample_scope(), &sample_estimate());
    let text = serde_json::to_string(&receipt).unwrap();
    let back: EstimateReceipt = serde_json::from_str(&text).unwrap();
    assert_eq!(back, receipt);
}
