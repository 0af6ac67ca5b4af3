//! # eta-classify
//!
//! **Tier 3 (Analysis)**
//!
//! Maps a free-text task description to a severity [`Category`] and collects
//! the [`WarningTag`]s that add buffer to an estimate.
//!
//! Both stages are pure: the same description, metrics and rules always give
//! the same answer. Matching is plain substring containment over the
//! lower-cased description, so short keywords also hit inside longer words
//! (`"all"` matches `"install"`).
//!
//! ## What belongs here
//! * Ordered first-match categorization
//! * Keyword and scope-threshold warnings
//!
//! ## What does NOT belong here
//! * Keyword tables (use eta-settings)
//! * Arithmetic on minutes (use eta-estimate)

use eta_settings::{ClassifyRules, ScopeThresholds, WarningRules};
use eta_types::{Category, ScopeMetrics, WarningTag};

/// Whether any keyword occurs in the already lower-cased `haystack`.
fn mentions_any(haystack: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|kw| !kw.is_empty() && haystack.contains(kw.to_lowercase().as_str()))
}

/// Categorize a task description.
///
/// Rules run in order and the first one with a matching keyword wins. When
/// none match, `rules.fallback` is returned.
pub fn categorize(description: &str, rules: &ClassifyRules) -> Category {
    let lower = description.to_lowercase();
    let category = rules
        .rules
        .iter()
        .find(|rule| mentions_any(&lower, &rule.keywords))
        .map_or(rules.fallback, |rule| rule.category);
    tracing::debug!(%category, "categorized task");
    category
}

/// Collect warning tags for a task.
///
/// Keyword groups come first, in table order, each contributing its tag at
/// most once. Scope thresholds follow, in a fixed order.
pub fn detect_warnings(
    description: &str,
    metrics: &ScopeMetrics,
    rules: &WarningRules,
) -> Vec<WarningTag> {
    let lower = description.to_lowercase();
    let mut warnings: Vec<WarningTag> = rules
        .groups
        .iter()
        .filter(|group| mentions_any(&lower, &group.keywords))
        .map(|group| group.tag)
        .collect();
    warnings.extend(scope_warnings(metrics, &rules.thresholds));
    tracing::debug!(count = warnings.len(), "detected warnings");
    warnings
}

/// Threshold warnings; every comparison is strict.
pub fn scope_warnings(metrics: &ScopeMetrics, t: &ScopeThresholds) -> Vec<WarningTag> {
    let checks = [
        (
            metrics.total_files > t.large_codebase_files,
            WarningTag::LargeCodebase,
        ),
        (
            metrics.test_files == 0 && metrics.total_files > t.no_tests_min_files,
            WarningTag::NoTests,
        ),
        (
            metrics.complexity_markers > t.tech_debt_markers,
            WarningTag::TechDebt,
        ),
        (
            metrics.largest_file_lines > t.large_file_lines,
            WarningTag::LargeFiles,
        ),
    ];
    checks
        .into_iter()
        .filter_map(|(fired, tag)| fired.then_some(tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eta_settings::{TierRule, WarningGroup};

    fn rules() -> ClassifyRules {
        ClassifyRules::default()
    }

    fn warn(description: &str, metrics: &ScopeMetrics) -> Vec<WarningTag> {
        detect_warnings(description, metrics, &WarningRules::default())
    }

    #[test]
    fn rewrite_is_major() {
        assert_eq!(
            categorize("Rewrite the entire billing module", &rules()),
            Category::Major
        );
    }

    #[test]
    fn fix_login_bug_is_simple() {
        assert_eq!(categorize("Fix login bug", &rules()), Category::Simple);
    }

    #[test]
    fn unmatched_description_falls_back_to_medium() {
        assert_eq!(
            categorize("Look into the weekend report", &rules()),
            Category::Medium
        );
        assert_eq!(categorize("", &rules()), Category::Medium);
    }

    #[test]
    fn higher_tier_wins_over_lower() {
        // "fix" is simple, "auth" is complex
        assert_eq!(categorize("fix the auth flow", &rules()), Category::Complex);
        // "typo" is trivial, "fix" is simple
        assert_eq!(categorize("Fix typo in README", &rules()), Category::Simple);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(categorize("GRAPHQL gateway", &rules()), Category::Major);
        assert_eq!(categorize("Rename a variable", &rules()), Category::Trivial);
    }

    #[test]
    fn matching_is_substring_based() {
        // "author" contains "auth"
        assert_eq!(categorize("credit the author", &rules()), Category::Complex);
    }

    #[test]
    fn configured_keywords_are_lowercased_before_matching() {
        let custom = ClassifyRules {
            fallback: Category::Trivial,
            rules: vec![TierRule {
                category: Category::Major,
                keywords: vec!["Kubernetes".to_string()],
            }],
        };
        assert_eq!(categorize("move to kubernetes", &custom), Category::Major);
        assert_eq!(categorize("tweak css", &custom), Category::Trivial);
    }

    #[test]
    fn vague_description_is_flagged() {
        let tags = warn("Just fix it, whatever", &ScopeMetrics::default());
        assert!(tags.contains(&WarningTag::Vague));
    }

    #[test]
    fn large_codebase_ignores_description() {
        let metrics = ScopeMetrics {
            total_files: 60,
            test_files: 3,
            ..ScopeMetrics::default()
        };
        assert_eq!(warn("rename x", &metrics), vec![WarningTag::LargeCodebase]);
    }

    #[test]
    fn keyword_groups_precede_thresholds_in_order() {
        let metrics = ScopeMetrics {
            total_files: 51,
            test_files: 0,
            complexity_markers: 21,
            largest_file_lines: 501,
            ..ScopeMetrics::default()
        };
        let tags = warn(
            "somehow redo everything via the external api in production",
            &metrics,
        );
        assert_eq!(tags, WarningTag::ALL.to_vec());
    }

    #[test]
    fn each_group_fires_at_most_once() {
        let tags = warn("api api integration third-party", &ScopeMetrics::default());
        assert_eq!(tags, vec![WarningTag::External]);
    }

    #[test]
    fn thresholds_are_strict() {
        let at_limit = ScopeMetrics {
            total_files: 50,
            test_files: 1,
            complexity_markers: 20,
            largest_file_lines: 500,
            ..ScopeMetrics::default()
        };
        assert!(scope_warnings(&at_limit, &ScopeThresholds::default()).is_empty());
    }

    #[test]
    fn no_tests_needs_more_than_five_files() {
        let t = ScopeThresholds::default();
        let five = ScopeMetrics {
            total_files: 5,
            ..ScopeMetrics::default()
        };
        let six = ScopeMetrics {
            total_files: 6,
            ..ScopeMetrics::default()
        };
        assert!(scope_warnings(&five, &t).is_empty());
        assert_eq!(scope_warnings(&six, &t), vec![WarningTag::NoTests]);
    }

    #[test]
    fn duplicate_tags_are_kept() {
        let rules = WarningRules {
            groups: vec![
                WarningGroup {
                    tag: WarningTag::Risky,
                    keywords: vec!["prod".to_string()],
                },
                WarningGroup {
                    tag: WarningTag::Risky,
                    keywords: vec!["db".to_string()],
                },
            ],
            ..WarningRules::default()
        };
        let tags = detect_warnings("prod db", &ScopeMetrics::default(), &rules);
        assert_eq!(tags, vec![WarningTag::Risky, WarningTag::Risky]);
    }
}
