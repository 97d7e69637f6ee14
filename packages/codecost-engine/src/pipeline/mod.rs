//! Pipeline orchestration
//!
//! Runs the Structural Detector, hands its result (and the raw text) to the
//! Heuristic Optimizer, then merges the two suggestion lists: first
//! occurrence wins per `(line, title)` key, and the final list is
//! stable-sorted by descending priority.

use rustc_hash::FxHashSet;
use std::cmp::Reverse;

use crate::features::language::LanguageProfile;
use crate::features::optimizer::HeuristicOptimizer;
use crate::features::structural::{StructuralAnalysis, StructuralDetector};
use crate::shared::models::{AnalysisResult, Suggestion};

/// Run one full analysis over a snippet.
pub fn run(code: &str, language: &str) -> AnalysisResult {
    let profile = LanguageProfile::resolve(language);
    tracing::debug!(
        "analyzing {} byte(s) with the {} profile",
        code.len(),
        profile.id.as_str()
    );

    let structural = StructuralDetector::new(profile).detect(code);
    let optimizer_suggestions = HeuristicOptimizer::new().scan(code, profile, &structural);

    let StructuralAnalysis {
        line_records,
        patterns,
        overall,
        suggestions,
        educational,
    } = structural;

    let suggestions = merge_suggestions(suggestions, optimizer_suggestions);

    AnalysisResult {
        overall,
        line_records,
        patterns,
        suggestions,
        educational,
    }
}

/// Concatenate, dedupe keeping the first occurrence per `(line, title)`,
/// then stable-sort by priority rank descending. Equal priorities keep
/// their pre-sort relative order.
fn merge_suggestions(
    structural: Vec<Suggestion>,
    optimizer: Vec<Suggestion>,
) -> Vec<Suggestion> {
    let mut seen: FxHashSet<(usize, String)> = FxHashSet::default();
    let mut merged: Vec<Suggestion> = Vec::new();

    for suggestion in structural.into_iter().chain(optimizer) {
        if seen.insert((suggestion.line, suggestion.title.clone())) {
            merged.push(suggestion);
        }
    }

    merged.sort_by_key(|s| Reverse(s.priority.rank()));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Severity, SuggestionKind};

    fn suggestion(line: usize, title: &str, priority: Severity, description: &str) -> Suggestion {
        Suggestion {
            line,
            kind: SuggestionKind::Optimization,
            title: title.to_string(),
            description: description.to_string(),
            example: None,
            priority,
        }
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let merged = merge_suggestions(
            vec![suggestion(1, "Same title", Severity::High, "first")],
            vec![suggestion(1, "Same title", Severity::High, "second")],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].description, "first");
    }

    #[test]
    fn test_same_title_different_lines_both_survive() {
        let merged = merge_suggestions(
            vec![suggestion(1, "Same title", Severity::High, "a")],
            vec![suggestion(2, "Same title", Severity::High, "b")],
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_sorted_by_priority_descending() {
        let merged = merge_suggestions(
            vec![
                suggestion(1, "low", Severity::Low, ""),
                suggestion(2, "high", Severity::High, ""),
            ],
            vec![suggestion(3, "medium", Severity::Medium, "")],
        );
        let ranks: Vec<u8> = merged.iter().map(|s| s.priority.rank()).collect();
        assert_eq!(ranks, vec![3, 2, 1]);
    }

    #[test]
    fn test_equal_priority_preserves_relative_order() {
        let merged = merge_suggestions(
            vec![
                suggestion(5, "first high", Severity::High, ""),
                suggestion(1, "low", Severity::Low, ""),
            ],
            vec![suggestion(2, "second high", Severity::High, "")],
        );
        assert_eq!(merged[0].title, "first high");
        assert_eq!(merged[1].title, "second high");
        assert_eq!(merged[2].title, "low");
    }
}
