//! Search shape: linear scans over sorted data, repeated substring search.

use crate::config::{LOOP_CONTEXT_WINDOW, NEAR_CONTEXT_WINDOW};
use crate::features::optimizer::templates;
use crate::features::optimizer::{Recognizer, ScanContext};
use crate::shared::models::{Severity, Suggestion, SuggestionKind};
use crate::shared::text;

const SORTED_HINTS: &[&str] = &["sorted", "ascending"];
/// Lowercased substring/index-of call tokens.
const SUBSTRING_TOKENS: &[&str] = &[".indexof(", ".substring(", ".substr(", "strstr("];

pub struct SearchShape;

impl Recognizer for SearchShape {
    fn name(&self) -> &'static str {
        "search-shape"
    }

    fn scan(&self, ctx: &ScanContext) -> Vec<Suggestion> {
        let mut out = Vec::new();

        for i in 0..ctx.len() {
            if !ctx.profile.is_loop_header(ctx.lines[i]) {
                continue;
            }
            let body = ctx.lower_window(i, LOOP_CONTEXT_WINDOW);
            if !body.contains("==") {
                continue;
            }
            let near = ctx.lower_around(i, NEAR_CONTEXT_WINDOW);
            if text::contains_any(&near, SORTED_HINTS) {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Algorithm,
                    title: "Use binary search on sorted data".to_string(),
                    description: "The data nearby is described as sorted; a binary \
                                  search finds the target in O(log n) instead of \
                                  scanning every element."
                        .to_string(),
                    example: Some(templates::BINARY_SEARCH.to_string()),
                    priority: Severity::High,
                });
            }
        }

        for (i, lower_line) in ctx.lower.iter().enumerate() {
            if text::contains_any(lower_line, SUBSTRING_TOKENS) {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Algorithm,
                    title: "Use KMP for repeated substring search".to_string(),
                    description: "Naive substring search rescans the text on every \
                                  call; Knuth-Morris-Pratt preprocesses the pattern \
                                  once and runs in linear time."
                        .to_string(),
                    example: Some(templates::KMP_SEARCH.to_string()),
                    priority: Severity::Medium,
                });
            }
        }

        out
    }
}
