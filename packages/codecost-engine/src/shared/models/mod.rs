//! Domain models for complexity analysis
//!
//! Single source of truth for the records every feature produces or
//! consumes. Pure data, no recognizer logic.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Three-level qualitative rating.
///
/// Used for per-line severity, pattern impact, and suggestion priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Numeric rank used for suggestion ordering (high=3, medium=2, low=1).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// Big-O complexity label.
///
/// Structured rather than stringly-typed so scoring can match on shape;
/// rendered as conventional notation (`O(1)`, `O(n)`, `O(n^2)`, ...) for
/// display and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// O(1)
    Constant,
    /// O(n)
    Linear,
    /// O(n log n)
    Linearithmic,
    /// O(n^k) for k >= 2
    Power(u32),
    /// O(2^n)
    Exponential,
}

impl Complexity {
    /// Rendered Big-O notation.
    pub fn label(&self) -> String {
        match self {
            Self::Constant => "O(1)".to_string(),
            Self::Linear => "O(n)".to_string(),
            Self::Linearithmic => "O(n log n)".to_string(),
            Self::Power(k) => format!("O(n^{})", k),
            Self::Exponential => "O(2^n)".to_string(),
        }
    }

    /// Is this considered slow? (quadratic or worse)
    pub fn is_slow(&self) -> bool {
        matches!(self, Self::Power(_) | Self::Exponential)
    }

    fn order_index(&self) -> u64 {
        match self {
            Self::Constant => 0,
            Self::Linear => 10,
            Self::Linearithmic => 20,
            Self::Power(k) => 20 + 10 * (*k as u64),
            Self::Exponential => u64::MAX,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl PartialOrd for Complexity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Complexity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_index().cmp(&other.order_index())
    }
}

impl Serialize for Complexity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Per-line classification record.
///
/// One per input line, in input order, immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct LineRecord {
    /// 1-based line number
    pub line_number: usize,

    /// Raw line text
    pub text: String,

    /// Assigned complexity label
    pub complexity: Complexity,

    /// Human-readable reason for the label
    pub reason: String,

    /// Severity of this line's contribution
    pub severity: Severity,
}

/// Structural pattern kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Loop,
    Nested,
    Recursion,
    Algorithm,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loop => "loop",
            Self::Nested => "nested",
            Self::Recursion => "recursion",
            Self::Algorithm => "algorithm",
        }
    }
}

/// A detected structural region (one or more lines).
#[derive(Debug, Clone, Serialize)]
pub struct Pattern {
    pub kind: PatternKind,

    /// 1-based, start_line <= end_line
    pub start_line: usize,
    pub end_line: usize,

    pub complexity: Complexity,
    pub description: String,
    pub impact: Severity,
}

impl Pattern {
    /// Pattern spanning a single line.
    pub fn single_line(
        kind: PatternKind,
        line: usize,
        complexity: Complexity,
        description: impl Into<String>,
        impact: Severity,
    ) -> Self {
        Self {
            kind,
            start_line: line,
            end_line: line,
            complexity,
            description: description.into(),
            impact,
        }
    }
}

/// Suggestion category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Optimization,
    Refactor,
    Algorithm,
}

/// A ranked improvement suggestion.
///
/// Identity for deduplication is the `(line, title)` pair; descriptions may
/// differ between two suggestions considered equal.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    /// 1-based line the suggestion anchors to
    pub line: usize,

    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,

    /// Canned example rewrite, when the catalog has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    pub priority: Severity,
}

impl Suggestion {
    /// Structural dedup key.
    pub fn key(&self) -> (usize, &str) {
        (self.line, self.title.as_str())
    }
}

/// Aggregate complexity summary.
#[derive(Debug, Clone, Serialize)]
pub struct OverallComplexity {
    pub time: Complexity,

    /// Always O(1): space inference is a known, deliberate gap.
    pub space: Complexity,

    /// Efficiency score in [0, 100]
    pub score: u8,
}

impl Default for OverallComplexity {
    fn default() -> Self {
        Self {
            time: Complexity::Constant,
            space: Complexity::Constant,
            score: 100,
        }
    }
}

/// One educational concept with explanation and example.
#[derive(Debug, Clone, Serialize)]
pub struct EducationalEntry {
    pub concept: String,
    pub explanation: String,
    pub example: String,
}

/// Full result of one analysis call. Produced fresh per call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub overall: OverallComplexity,
    pub line_records: Vec<LineRecord>,
    pub patterns: Vec<Pattern>,
    pub suggestions: Vec<Suggestion>,
    pub educational: Vec<EducationalEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering_and_rank() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert_eq!(Severity::High.rank(), 3);
        assert_eq!(Severity::Medium.rank(), 2);
        assert_eq!(Severity::Low.rank(), 1);
    }

    #[test]
    fn test_complexity_labels() {
        assert_eq!(Complexity::Constant.label(), "O(1)");
        assert_eq!(Complexity::Linear.label(), "O(n)");
        assert_eq!(Complexity::Linearithmic.label(), "O(n log n)");
        assert_eq!(Complexity::Power(2).label(), "O(n^2)");
        assert_eq!(Complexity::Power(3).label(), "O(n^3)");
        assert_eq!(Complexity::Exponential.label(), "O(2^n)");
    }

    #[test]
    fn test_complexity_ordering() {
        assert!(Complexity::Constant < Complexity::Linear);
        assert!(Complexity::Linear < Complexity::Linearithmic);
        assert!(Complexity::Linearithmic < Complexity::Power(2));
        assert!(Complexity::Power(2) < Complexity::Power(3));
        assert!(Complexity::Power(9) < Complexity::Exponential);
    }

    #[test]
    fn test_complexity_is_slow() {
        assert!(!Complexity::Linear.is_slow());
        assert!(!Complexity::Linearithmic.is_slow());
        assert!(Complexity::Power(2).is_slow());
        assert!(Complexity::Exponential.is_slow());
    }

    #[test]
    fn test_complexity_serializes_as_notation() {
        let json = serde_json::to_string(&Complexity::Power(2)).unwrap();
        assert_eq!(json, "\"O(n^2)\"");
    }

    #[test]
    fn test_suggestion_key_is_line_and_title() {
        let s = Suggestion {
            line: 3,
            kind: SuggestionKind::Optimization,
            title: "Use a hash map for lookups".to_string(),
            description: "first".to_string(),
            example: None,
            priority: Severity::High,
        };
        assert_eq!(s.key(), (3, "Use a hash map for lookups"));
    }
}
