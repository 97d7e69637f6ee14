//! Line classifier and loop/recursion region scanner.
//!
//! All detection here is bounded-window text matching over raw lines; no
//! syntax tree exists anywhere in the engine. Misclassification degrades to
//! a conservative label, never to a failure.

use rustc_hash::FxHashSet;

use crate::config::NESTED_SCAN_WINDOW;
use crate::features::language::{BlockStyle, LanguageProfile};
use crate::features::structural::{education, scoring};
use crate::shared::models::{
    Complexity, EducationalEntry, LineRecord, OverallComplexity, Pattern, PatternKind, Severity,
    Suggestion, SuggestionKind,
};
use crate::shared::text;

/// Built-in sort invocations recognized across the supported languages.
const SORT_CALL_TOKENS: &[&str] = &[
    ".sort(",
    "sorted(",
    "Collections.sort(",
    "Arrays.sort(",
    "sort.Slice(",
    "std::sort(",
    "qsort(",
    ".sort_by(",
    ".sort_unstable(",
];

/// Output of the structural pass.
#[derive(Debug, Clone)]
pub struct StructuralAnalysis {
    pub line_records: Vec<LineRecord>,
    pub patterns: Vec<Pattern>,
    pub overall: OverallComplexity,
    pub suggestions: Vec<Suggestion>,
    pub educational: Vec<EducationalEntry>,
}

/// Loop region found by the greedy scan. Indices are 0-based.
#[derive(Debug, Clone, Copy)]
struct LoopRegion {
    start: usize,
    end: usize,
    /// Loop-nesting counter: 1 for the header itself plus one per loop
    /// header seen while inside the block. Increment-only; sequential inner
    /// loops therefore overcount, which is the intended heuristic behavior.
    max_depth: usize,
}

pub struct StructuralDetector {
    profile: &'static LanguageProfile,
}

impl StructuralDetector {
    pub fn new(profile: &'static LanguageProfile) -> Self {
        Self { profile }
    }

    /// Run the full structural pass over one snippet.
    pub fn detect(&self, code: &str) -> StructuralAnalysis {
        let lines: Vec<&str> = code.split('\n').collect();

        let regions = self.scan_loop_regions(&lines);
        let fn_defs = self.collect_function_defs(&lines);
        let recursive = self.recursive_lines(&lines, &fn_defs);

        let patterns = self.collect_patterns(&lines, &regions, &recursive);
        let line_records = self.classify_lines(&lines, &regions, &recursive);
        let overall = scoring::score(&patterns);
        let suggestions = self.structural_suggestions(&patterns, &line_records);
        let educational = education::entries_for(&patterns);

        tracing::debug!(
            "structural pass: {} lines, {} patterns, time {}, score {}",
            line_records.len(),
            patterns.len(),
            overall.time,
            overall.score
        );

        StructuralAnalysis {
            line_records,
            patterns,
            overall,
            suggestions,
            educational,
        }
    }

    /// Greedy, non-overlapping partition of the input into loop regions.
    ///
    /// The scan after a region resumes past its end line; lines already
    /// consumed are never re-scanned.
    fn scan_loop_regions(&self, lines: &[&str]) -> Vec<LoopRegion> {
        let mut regions = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            if self.profile.is_loop_header(lines[i]) {
                let region = match self.profile.block_style {
                    BlockStyle::Braces => self.scan_braced_region(lines, i),
                    BlockStyle::Indentation => self.scan_indented_region(lines, i),
                };
                i = region.end + 1;
                regions.push(region);
            } else {
                i += 1;
            }
        }
        regions
    }

    /// Walk forward from a loop header counting brace depth. Ends when the
    /// depth returns to zero after a block was opened, or when the lookahead
    /// window runs out.
    fn scan_braced_region(&self, lines: &[&str], start: usize) -> LoopRegion {
        let range = text::window(lines.len(), start, NESTED_SCAN_WINDOW);
        let mut end = range.end - 1;
        let mut depth: i64 = 0;
        let mut opened = false;
        let mut nesting = 1usize;

        for j in range {
            let line = lines[j];
            if j > start && depth > 0 && self.profile.is_loop_header(line) {
                nesting += 1;
            }
            let opens = line.matches('{').count() as i64;
            let closes = line.matches('}').count() as i64;
            if opens > 0 {
                opened = true;
            }
            depth += opens - closes;
            if opened && depth <= 0 {
                end = j;
                break;
            }
        }

        LoopRegion {
            start,
            end,
            max_depth: nesting,
        }
    }

    /// Indentation variant: the region is every following non-blank line
    /// indented deeper than the header, within the same lookahead window.
    fn scan_indented_region(&self, lines: &[&str], start: usize) -> LoopRegion {
        let base = text::indent_width(lines[start]);
        let mut end = start;
        let mut nesting = 1usize;

        for j in text::window(lines.len(), start + 1, NESTED_SCAN_WINDOW - 1) {
            let line = lines[j];
            if text::is_blank(line) {
                continue;
            }
            if text::indent_width(line) <= base {
                break;
            }
            if self.profile.is_loop_header(line) {
                nesting += 1;
            }
            end = j;
        }

        LoopRegion {
            start,
            end,
            max_depth: nesting,
        }
    }

    /// All function definitions, as (0-based line index, name).
    fn collect_function_defs(&self, lines: &[&str]) -> Vec<(usize, String)> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| self.profile.function_name(line).map(|name| (i, name)))
            .collect()
    }

    /// Lines that call the innermost enclosing function by name. Any such
    /// line is treated as exponential recursion; the heuristic makes no
    /// attempt to prove otherwise.
    fn recursive_lines(
        &self,
        lines: &[&str],
        fn_defs: &[(usize, String)],
    ) -> FxHashSet<usize> {
        let mut out = FxHashSet::default();
        for (i, line) in lines.iter().enumerate() {
            let enclosing = fn_defs.iter().rev().find(|(def_idx, _)| *def_idx < i);
            if let Some((_, name)) = enclosing {
                if text::contains_call(line, name) {
                    out.insert(i);
                }
            }
        }
        out
    }

    /// One line-ordered pass emitting every structural pattern. Detection
    /// order is line order; the scoring fold depends on it.
    fn collect_patterns(
        &self,
        lines: &[&str],
        regions: &[LoopRegion],
        recursive: &FxHashSet<usize>,
    ) -> Vec<Pattern> {
        let mut patterns = Vec::new();
        let mut next_region = 0;

        for (i, line) in lines.iter().enumerate() {
            if next_region < regions.len() && regions[next_region].start == i {
                let r = regions[next_region];
                next_region += 1;
                if r.max_depth > 1 {
                    patterns.push(Pattern {
                        kind: PatternKind::Nested,
                        start_line: r.start + 1,
                        end_line: r.end + 1,
                        complexity: Complexity::Power(r.max_depth as u32),
                        description: format!("Nested loops, {} levels deep", r.max_depth),
                        impact: if r.max_depth > 2 {
                            Severity::High
                        } else {
                            Severity::Medium
                        },
                    });
                } else {
                    patterns.push(Pattern {
                        kind: PatternKind::Loop,
                        start_line: r.start + 1,
                        end_line: r.end + 1,
                        complexity: Complexity::Linear,
                        description: "Single loop over the input".to_string(),
                        impact: Severity::Medium,
                    });
                }
            }

            if recursive.contains(&i) {
                patterns.push(Pattern::single_line(
                    PatternKind::Recursion,
                    i + 1,
                    Complexity::Exponential,
                    "Recursive self-call",
                    Severity::High,
                ));
            } else if text::contains_any(line, SORT_CALL_TOKENS) {
                patterns.push(Pattern::single_line(
                    PatternKind::Algorithm,
                    i + 1,
                    Complexity::Linearithmic,
                    "Built-in sort call",
                    Severity::Medium,
                ));
            }
        }

        patterns
    }

    /// Per-line classification. First matching rule wins, in fixed priority
    /// order; everything unmatched is a constant-time line.
    fn classify_lines(
        &self,
        lines: &[&str],
        regions: &[LoopRegion],
        recursive: &FxHashSet<usize>,
    ) -> Vec<LineRecord> {
        let mut nested_depth: Vec<Option<usize>> = vec![None; lines.len()];
        for r in regions.iter().filter(|r| r.max_depth > 1) {
            for slot in nested_depth.iter_mut().take(r.end + 1).skip(r.start) {
                *slot = Some(r.max_depth);
            }
        }

        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let (complexity, reason, severity) = if let Some(d) = nested_depth[i] {
                    (
                        Complexity::Power(d as u32),
                        format!("inside nested loops ({} levels)", d),
                        Severity::High,
                    )
                } else if self.profile.is_loop_header(line) {
                    (
                        Complexity::Linear,
                        "loop over the input".to_string(),
                        Severity::Medium,
                    )
                } else if recursive.contains(&i) {
                    (
                        Complexity::Exponential,
                        "recursive self-call".to_string(),
                        Severity::High,
                    )
                } else if self.profile.is_collection_op(line) {
                    (
                        Complexity::Linear,
                        "linear collection operation".to_string(),
                        Severity::Medium,
                    )
                } else if self.profile.is_keyed_access(line) {
                    (
                        Complexity::Constant,
                        "keyed lookup or assignment".to_string(),
                        Severity::Low,
                    )
                } else {
                    (
                        Complexity::Constant,
                        "constant time operation".to_string(),
                        Severity::Low,
                    )
                };
                LineRecord {
                    line_number: i + 1,
                    text: (*line).to_string(),
                    complexity,
                    reason,
                    severity,
                }
            })
            .collect()
    }

    /// Suggestions derived from structural patterns, plus the generic
    /// fallback for high-severity lines nothing else covered. The fallback
    /// checks existing suggestions by line number only.
    fn structural_suggestions(
        &self,
        patterns: &[Pattern],
        line_records: &[LineRecord],
    ) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        for p in patterns {
            match p.kind {
                PatternKind::Nested if p.impact == Severity::High => {
                    suggestions.push(Suggestion {
                        line: p.start_line,
                        kind: SuggestionKind::Optimization,
                        title: "Reduce nested loop complexity".to_string(),
                        description: format!(
                            "{} multiply their iteration counts; restructure the \
                             inner work or precompute a lookup table to flatten them.",
                            p.description
                        ),
                        example: None,
                        priority: Severity::High,
                    });
                }
                PatternKind::Recursion => {
                    suggestions.push(Suggestion {
                        line: p.start_line,
                        kind: SuggestionKind::Algorithm,
                        title: "Optimize recursion".to_string(),
                        description: "Plain recursion can recompute the same subproblems \
                                      many times; memoize, switch to dynamic programming, \
                                      or rewrite iteratively."
                            .to_string(),
                        example: None,
                        priority: Severity::High,
                    });
                }
                _ => {}
            }
        }

        for record in line_records.iter().filter(|r| r.severity == Severity::High) {
            if !suggestions.iter().any(|s| s.line == record.line_number) {
                suggestions.push(Suggestion {
                    line: record.line_number,
                    kind: SuggestionKind::Refactor,
                    title: "Simplify complex operation".to_string(),
                    description: "This line carries a large share of the estimated cost; \
                                  break the work up or move it out of the hot path."
                        .to_string(),
                    example: None,
                    priority: Severity::Medium,
                });
            }
        }

        suggestions
    }
}
