//! Property-based tests for estimate invariants.

use eta_estimate::{calculate, estimate_task};
use eta_settings::{EstimateWeights, EtaSettings, TierTable};
use eta_types::{Category, ScopeMetrics, WarningTag};
use proptest::prelude::*;

fn any_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn any_warnings() -> impl Strategy<Value = Vec<WarningTag>> {
    prop::collection::vec(prop::sample::select(WarningTag::ALL.to_vec()), 0..6)
}

proptest! {
    #[test]
    fn bounds_are_ordered_and_non_negative(
        desc in "[a-z ]{0,30}",
        category in any_category(),
        warnings in any_warnings(),
        files in prop::option::of(0u32..500),
    ) {
        let e = calculate(
            &desc,
            category,
            warnings,
            files,
            &TierTable::default(),
            &EstimateWeights::default(),
        );
        prop_assert!(e.low_estimate >= 0.0);
        prop_assert!(e.low_estimate <= e.high_estimate);
        prop_assert!(e.iterations_low <= e.iterations_high);
    }

    #[test]
    fn more_severe_tier_never_estimates_less(files in 0u32..200) {
        let tiers = TierTable::default();
        let weights = EstimateWeights::default();
        let highs: Vec<f64> = Category::ALL
            .iter()
            .map(|c| calculate("x", *c, Vec::new(), Some(files), &tiers, &weights).high_estimate)
            .collect();
        prop_assert!(highs.windows(2).all(|w| w[0] < w[1]), "{:?}", highs);
    }

    #[test]
    fn more_files_never_estimate_less(category in any_category(), files in 0u32..200) {
        let tiers = TierTable::default();
        let weights = EstimateWeights::default();
        let fewer = calculate("x", category, Vec::new(), Some(files), &tiers, &weights);
        let more = calculate("x", category, Vec::new(), Some(files + 1), &tiers, &weights);
        prop_assert!(fewer.high_estimate <= more.high_estimate);
    }

    #[test]
    fn estimate_is_idempotent(desc in ".{0,40}", total_files in 0usize..100) {
        let settings = EtaSettings::default();
        let metrics = ScopeMetrics { total_files, ..ScopeMetrics::default() };
        prop_assert_eq!(
            estimate_task(&desc, &metrics, None, &settings),
            estimate_task(&desc, &metrics, None, &settings)
        );
    }
}
