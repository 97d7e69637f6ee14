//! Nested-loop shape: inner scans and matrix walks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::LOOP_CONTEXT_WINDOW;
use crate::features::optimizer::templates;
use crate::features::optimizer::{Recognizer, ScanContext};
use crate::shared::models::{Severity, Suggestion, SuggestionKind};
use crate::shared::text;

/// `][` between two bracket indices, e.g. `matrix[i][j]`.
static DOUBLE_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\]\s*\[").expect("double index regex"));

const SEARCH_TOKENS: &[&str] = &["==", "find", "search"];
const GRID_TOKENS: &[&str] = &["matrix", "grid"];

pub struct NestedLoopShape;

impl Recognizer for NestedLoopShape {
    fn name(&self) -> &'static str {
        "nested-loop-shape"
    }

    fn scan(&self, ctx: &ScanContext) -> Vec<Suggestion> {
        let mut out = Vec::new();

        for i in 0..ctx.len() {
            if !ctx.profile.is_loop_header(ctx.lines[i]) {
                continue;
            }
            let has_inner = text::window(ctx.len(), i + 1, LOOP_CONTEXT_WINDOW - 1)
                .any(|j| ctx.profile.is_loop_header(ctx.lines[j]));
            if !has_inner {
                continue;
            }

            let context = ctx.lower_window(i, LOOP_CONTEXT_WINDOW);

            if text::contains_any(&context, SEARCH_TOKENS) {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Optimization,
                    title: "Use a hash map for lookups".to_string(),
                    description: "The inner loop rescans a collection for every outer \
                                  element; a hash map built once makes each lookup O(1)."
                        .to_string(),
                    example: Some(templates::HASH_MAP_LOOKUP.to_string()),
                    priority: Severity::High,
                });
            }

            if DOUBLE_INDEX.is_match(&context) || text::contains_any(&context, GRID_TOKENS) {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Optimization,
                    title: "Cache-friendly traversal order".to_string(),
                    description: "Grid traversals are fastest when the inner loop walks \
                                  the contiguous index; reordering the loops avoids \
                                  cache-miss-heavy strides."
                        .to_string(),
                    example: Some(templates::MATRIX_TRAVERSAL.to_string()),
                    priority: Severity::Medium,
                });
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::language::LanguageProfile;

    fn scan(code: &str) -> Vec<Suggestion> {
        let ctx = ScanContext::new(code, LanguageProfile::resolve("javascript"));
        NestedLoopShape.scan(&ctx)
    }

    #[test]
    fn test_search_in_nested_loop_suggests_hash_map() {
        let code = "for(i=0;i<n;i++){\n  for(j=0;j<n;j++){\n    if(arr[i][j]==target) found=true;\n  }\n}";
        let found = scan(code);
        let hash: Vec<_> = found
            .iter()
            .filter(|s| s.title == "Use a hash map for lookups")
            .collect();
        assert!(!hash.is_empty());
        assert_eq!(hash[0].line, 1);
        assert_eq!(hash[0].priority, Severity::High);
        assert!(hash[0].example.is_some());
    }

    #[test]
    fn test_double_index_suggests_cache_friendly_order() {
        let code = "for(i=0;i<rows;i++){\n  for(j=0;j<cols;j++){\n    sum += table[j][i];\n  }\n}";
        let found = scan(code);
        assert!(found
            .iter()
            .any(|s| s.title == "Cache-friendly traversal order" && s.priority == Severity::Medium));
    }

    #[test]
    fn test_single_loop_triggers_nothing() {
        let code = "for(i=0;i<n;i++){\n  if(arr[i]==target) found=true;\n}";
        assert!(scan(code).is_empty());
    }
}
