//! Sort shape: hand-rolled bubble and selection sorts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{LOOP_CONTEXT_WINDOW, NEAR_CONTEXT_WINDOW};
use crate::features::optimizer::templates;
use crate::features::optimizer::{Recognizer, ScanContext};
use crate::shared::models::{Severity, Suggestion, SuggestionKind};
use crate::shared::text;

/// Adjacent-index access, e.g. `arr[j + 1]`.
static ADJACENT_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*\w+\s*\+\s*1\s*\]").expect("adjacent index regex"));

const SWAP_TOKENS: &[&str] = &["swap", "temp =", "tmp ="];
const MIN_TRACK_TOKENS: &[&str] = &["min_idx", "minidx", "min_index", "minindex", "min ="];

pub struct SortShape;

impl Recognizer for SortShape {
    fn name(&self) -> &'static str {
        "sort-shape"
    }

    fn scan(&self, ctx: &ScanContext) -> Vec<Suggestion> {
        let mut out = Vec::new();

        for i in 0..ctx.len() {
            if !ctx.profile.is_loop_header(ctx.lines[i]) {
                continue;
            }
            let nested = text::window(ctx.len(), i + 1, LOOP_CONTEXT_WINDOW - 1)
                .any(|j| ctx.profile.is_loop_header(ctx.lines[j]));
            let context = ctx.lower_window(i, LOOP_CONTEXT_WINDOW);
            // Naming hints often live in a comment just above the loop.
            let near = ctx.lower_around(i, NEAR_CONTEXT_WINDOW);
            let swaps = text::contains_any(&context, SWAP_TOKENS);

            let bubble_shaped = near.contains("bubble")
                || (nested && swaps && ADJACENT_INDEX.is_match(&context));
            if bubble_shaped {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Algorithm,
                    title: "Replace bubble sort with an O(n log n) sort".to_string(),
                    description: "Adjacent-swap passes cost O(n^2); the standard \
                                  library sort does the same job in O(n log n)."
                        .to_string(),
                    example: Some(templates::EFFICIENT_SORT.to_string()),
                    priority: Severity::High,
                });
                continue;
            }

            let selection_shaped = near.contains("selection")
                || (nested && swaps && text::contains_any(&context, MIN_TRACK_TOKENS));
            if selection_shaped {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Algorithm,
                    title: "Replace selection sort with merge sort or heap sort".to_string(),
                    description: "Tracking the minimum across repeated passes is \
                                  O(n^2); merge sort or heap sort reaches O(n log n)."
                        .to_string(),
                    example: Some(templates::MERGE_SORT.to_string()),
                    priority: Severity::High,
                });
            }
        }

        out
    }
}
