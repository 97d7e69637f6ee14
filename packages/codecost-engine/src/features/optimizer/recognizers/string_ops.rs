//! String-operation shape: concatenation in loops, per-character edits.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::NEAR_CONTEXT_WINDOW;
use crate::features::optimizer::templates;
use crate::features::optimizer::{Recognizer, ScanContext};
use crate::shared::models::{Severity, Suggestion, SuggestionKind};
use crate::shared::text;

/// Single-character indexed access on a string-named reference, or an
/// explicit charAt call. Applied to lowercased lines.
static CHAR_ACCESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.charat\(|\w*(?:str|string|text|word|char)\w*\s*\[").expect("char access regex")
});

pub struct StringOpShape;

impl Recognizer for StringOpShape {
    fn name(&self) -> &'static str {
        "string-op-shape"
    }

    fn scan(&self, ctx: &ScanContext) -> Vec<Suggestion> {
        let mut out = Vec::new();

        for i in 0..ctx.len() {
            if !ctx.profile.is_loop_header(ctx.lines[i]) {
                continue;
            }
            let appends_literal = text::window(ctx.len(), i, NEAR_CONTEXT_WINDOW).any(|j| {
                let line = ctx.lines[j];
                line.contains("+=") && (line.contains('"') || line.contains('\''))
            });
            if appends_literal {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Optimization,
                    title: "Build strings with a buffer".to_string(),
                    description: "Concatenating inside a loop copies the whole string \
                                  on every append, O(n^2) in total; collect parts and \
                                  join once."
                        .to_string(),
                    example: Some(templates::STRING_BUILDER.to_string()),
                    priority: Severity::High,
                });
            }
        }

        for (i, lower_line) in ctx.lower.iter().enumerate() {
            if CHAR_ACCESS.is_match(lower_line) {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Optimization,
                    title: "Accumulate characters in an array".to_string(),
                    description: "Per-character string edits re-copy the string; push \
                                  characters into an array and join at the end."
                        .to_string(),
                    example: Some(templates::CHAR_ARRAY.to_string()),
                    priority: Severity::Medium,
                });
            }
        }

        out
    }
}
