//! Data-structure misuse: front inserts, linear-lookup clusters, uniqueness
//! by scanning.

use crate::config::LOOKUP_CLUSTER_WINDOW;
use crate::features::optimizer::templates;
use crate::features::optimizer::{Recognizer, ScanContext};
use crate::shared::models::{Severity, Suggestion, SuggestionKind};
use crate::shared::text;

const FRONT_INSERT_TOKENS: &[&str] = &[".unshift(", ".insert(0", ".splice(0", "push_front("];
/// Lowercased linear-lookup call tokens.
const LOOKUP_TOKENS: &[&str] = &[".indexof(", ".includes(", ".find(", ".contains("];
const UNIQUE_TOKENS: &[&str] = &["unique", "distinct"];
const ARRAY_TOKENS: &[&str] = &["array", "list", "vector", "[]"];

pub struct DataStructureShape;

impl DataStructureShape {
    fn lookup_hits(lower_line: &str) -> usize {
        LOOKUP_TOKENS
            .iter()
            .map(|t| lower_line.matches(t).count())
            .sum()
    }
}

impl Recognizer for DataStructureShape {
    fn name(&self) -> &'static str {
        "data-structure-shape"
    }

    fn scan(&self, ctx: &ScanContext) -> Vec<Suggestion> {
        let mut out = Vec::new();

        for (i, line) in ctx.lines.iter().enumerate() {
            if text::contains_any(line, FRONT_INSERT_TOKENS) {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Optimization,
                    title: "Use a deque for front insertions".to_string(),
                    description: "Inserting at the front of an array shifts every \
                                  element; a double-ended queue does it in O(1)."
                        .to_string(),
                    example: Some(templates::DEQUE_FRONT_INSERT.to_string()),
                    priority: Severity::Medium,
                });
            }
        }

        // Clusters of linear lookups: >=2 calls within the window starting
        // at a lookup line. The scan jumps past each reported window so a
        // dense cluster yields one suggestion, not one per line.
        let mut i = 0;
        while i < ctx.len() {
            if Self::lookup_hits(&ctx.lower[i]) > 0 {
                let range = text::window(ctx.len(), i, LOOKUP_CLUSTER_WINDOW);
                let total: usize = range.clone().map(|j| Self::lookup_hits(&ctx.lower[j])).sum();
                if total >= 2 {
                    out.push(Suggestion {
                        line: i + 1,
                        kind: SuggestionKind::Optimization,
                        title: "Replace linear lookups with a hash map".to_string(),
                        description: "Several linear scans over the same data; building \
                                      a hash map or set once makes each membership check \
                                      O(1)."
                            .to_string(),
                        example: Some(templates::LOOKUP_TABLE.to_string()),
                        priority: Severity::High,
                    });
                    i = range.end;
                    continue;
                }
            }
            i += 1;
        }

        for (i, lower_line) in ctx.lower.iter().enumerate() {
            if text::contains_any(lower_line, UNIQUE_TOKENS)
                && text::contains_any(lower_line, ARRAY_TOKENS)
            {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Optimization,
                    title: "Use a set for uniqueness".to_string(),
                    description: "Deduplicating with array scans is O(n^2); a set keeps \
                                  membership checks constant time."
                        .to_string(),
                    example: Some(templates::SET_UNIQUE.to_string()),
                    priority: Severity::Medium,
                });
            }
        }

        out
    }
}
