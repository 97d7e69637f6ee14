//! Heuristic Optimizer
//!
//! Second engine pass: a catalog of shape-specific recognizers re-scans the
//! raw lines and emits targeted suggestions, each carrying a canned example
//! rewrite. Recognizers are independent forward scans and are not mutually
//! exclusive; one line may trigger several families.

pub mod recognizers;
pub mod templates;

use crate::features::language::LanguageProfile;
use crate::features::structural::StructuralAnalysis;
use crate::shared::models::Suggestion;
use crate::shared::text;

/// Shared per-call view of the input handed to every recognizer.
pub struct ScanContext<'a> {
    pub lines: Vec<&'a str>,
    /// Lowercased copy of each line, for case-insensitive token tests.
    pub lower: Vec<String>,
    pub profile: &'static LanguageProfile,
}

impl<'a> ScanContext<'a> {
    pub fn new(code: &'a str, profile: &'static LanguageProfile) -> Self {
        let lines: Vec<&str> = code.split('\n').collect();
        let lower = lines.iter().map(|l| l.to_lowercase()).collect();
        Self {
            lines,
            lower,
            profile,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lowercased text of the forward window starting at `start`.
    pub fn lower_window(&self, start: usize, span: usize) -> String {
        self.lower[text::window(self.len(), start, span)].join("\n")
    }

    /// Lowercased text of the +/- `radius` window around `idx`.
    pub fn lower_around(&self, idx: usize, radius: usize) -> String {
        self.lower[text::around(self.len(), idx, radius)].join("\n")
    }
}

/// A bounded-window heuristic over nearby lines that flags one algorithmic
/// shape and proposes a rewrite.
pub trait Recognizer: Send + Sync {
    /// Recognizer name (for logging).
    fn name(&self) -> &'static str;

    /// Scan the whole input, returning any suggestions found.
    fn scan(&self, ctx: &ScanContext) -> Vec<Suggestion>;
}

/// Runs the full recognizer catalog over one snippet.
pub struct HeuristicOptimizer {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl HeuristicOptimizer {
    pub fn new() -> Self {
        Self {
            recognizers: vec![
                Box::new(recognizers::nested_loop::NestedLoopShape),
                Box::new(recognizers::recursion::RecursionShape),
                Box::new(recognizers::data_structure::DataStructureShape),
                Box::new(recognizers::search::SearchShape),
                Box::new(recognizers::sort::SortShape),
                Box::new(recognizers::string_ops::StringOpShape),
                Box::new(recognizers::memory::MemoryShape),
            ],
        }
    }

    /// Run every recognizer over the raw text. The detector's result is part
    /// of the call contract but only the raw lines drive matching.
    pub fn scan(
        &self,
        code: &str,
        profile: &'static LanguageProfile,
        _structural: &StructuralAnalysis,
    ) -> Vec<Suggestion> {
        let ctx = ScanContext::new(code, profile);
        let mut suggestions = Vec::new();
        for recognizer in &self.recognizers {
            let found = recognizer.scan(&ctx);
            if !found.is_empty() {
                tracing::debug!("{}: {} suggestion(s)", recognizer.name(), found.len());
            }
            suggestions.extend(found);
        }
        suggestions
    }
}

impl Default for HeuristicOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
