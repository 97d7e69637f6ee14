//! Memory shape: avoidable copies and n-sized scratch allocations.

use crate::config::NEAR_CONTEXT_WINDOW;
use crate::features::optimizer::templates;
use crate::features::optimizer::{Recognizer, ScanContext};
use crate::shared::models::{Severity, Suggestion, SuggestionKind};
use crate::shared::text;

/// Lowercased explicit copy/clone tokens.
const COPY_TOKENS: &[&str] = &[
    ".slice()",
    ".clone(",
    ".copy(",
    "copyof(",
    "array.from(",
    "memcpy(",
    "[...",
];

/// Lowercased allocation tokens for n-sized auxiliary structures.
const ALLOC_TOKENS: &[&str] = &[
    "new array(",
    "vec![",
    "make([]",
    "malloc(",
    "calloc(",
    "[0] * ",
];

pub struct MemoryShape;

impl Recognizer for MemoryShape {
    fn name(&self) -> &'static str {
        "memory-shape"
    }

    fn scan(&self, ctx: &ScanContext) -> Vec<Suggestion> {
        let mut out = Vec::new();

        let loop_headers: Vec<usize> = (0..ctx.len())
            .filter(|i| ctx.profile.is_loop_header(ctx.lines[*i]))
            .collect();

        for (i, lower_line) in ctx.lower.iter().enumerate() {
            if text::contains_any(lower_line, COPY_TOKENS) {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Refactor,
                    title: "Avoid unnecessary copies".to_string(),
                    description: "Each copy duplicates the whole structure; pass a view \
                                  or reuse the original when the data is not mutated."
                        .to_string(),
                    example: Some(templates::AVOID_COPY.to_string()),
                    priority: Severity::Medium,
                });
            }

            // Scratch allocations only matter near a loop that fills them.
            let near_loop = loop_headers
                .iter()
                .any(|h| h.abs_diff(i) <= NEAR_CONTEXT_WINDOW);
            if near_loop && text::contains_any(lower_line, ALLOC_TOKENS) {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Refactor,
                    title: "Consider a two-pointer or in-place approach".to_string(),
                    description: "The auxiliary structure grows with the input; a \
                                  two-pointer pass over the data often needs O(1) \
                                  extra space."
                        .to_string(),
                    example: Some(templates::TWO_POINTER.to_string()),
                    priority: Severity::Low,
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
        MemoryShape.scan(&ctx)
    }

    #[test]
    fn test_slice_copy_flagged() {
        let found = scan("const snapshot = items.slice();");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Avoid unnecessary copies");
        assert_eq!(found[0].priority, Severity::Medium);
    }

    #[test]
    fn test_spread_copy_flagged() {
        let found = scan("const copy = [...items];");
        assert!(found.iter().any(|s| s.title == "Avoid unnecessary copies"));
    }

    #[test]
    fn test_allocation_near_loop_suggests_two_pointer() {
        let code = "const seen = new Array(n).fill(false);\nfor (let i = 0; i < n; i++) {\n  seen[i] = check(arr[i]);\n}";
        let found = scan(code);
        let aux: Vec<_> = found
            .iter()
            .filter(|s| s.title == "Consider a two-pointer or in-place approach")
            .collect();
        assert_eq!(aux.len(), 1);
        assert_eq!(aux[0].line, 1);
        assert_eq!(aux[0].priority, Severity::Low);
    }

    #[test]
    fn test_allocation_far_from_any_loop_is_ignored() {
        let code = "const seen = new Array(n);";
        assert!(scan(code).is_empty());
    }
}
