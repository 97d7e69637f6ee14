//! Educational content catalog
//!
//! Fixed concept/explanation/example triples keyed by pattern kind. The
//! baseline Big-O entry is always appended last, whatever was detected.

use crate::shared::models::{EducationalEntry, Pattern, PatternKind};

struct ConceptRow {
    concept: &'static str,
    explanation: &'static str,
    example: &'static str,
}

impl ConceptRow {
    fn to_entry(&self) -> EducationalEntry {
        EducationalEntry {
            concept: self.concept.to_string(),
            explanation: self.explanation.to_string(),
            example: self.example.to_string(),
        }
    }
}

const NESTED_LOOPS: ConceptRow = ConceptRow {
    concept: "Nested Loops",
    explanation: "Each level of loop nesting multiplies the iteration count: two loops \
                  over n items perform n * n steps, three perform n^3. Replacing an inner \
                  scan with a constant-time lookup usually removes a whole factor of n.",
    example: "// O(n^2): inner scan repeats for every outer element\nfor (let i = 0; i < items.length; i++) {\n  for (let j = 0; j < items.length; j++) {\n    if (items[i] + items[j] === target) return [i, j];\n  }\n}",
};

const RECURSION: ConceptRow = ConceptRow {
    concept: "Recursion",
    explanation: "A function that calls itself re-derives its answer from smaller inputs. \
                  Without caching, branching recursion revisits the same subproblems and \
                  the call count grows exponentially with the input size.",
    example: "// O(2^n): both branches recompute overlapping subproblems\nfunction fib(n) {\n  if (n <= 1) return n;\n  return fib(n - 1) + fib(n - 2);\n}",
};

const BIG_O: ConceptRow = ConceptRow {
    concept: "Big O Notation",
    explanation: "Big O describes how running time grows as the input grows, ignoring \
                  constant factors: O(1) stays flat, O(n) grows in step with the input, \
                  O(n^2) quadruples when the input doubles, and O(2^n) doubles with every \
                  extra element.",
    example: "// O(1)   -> arr[0]\n// O(n)   -> arr.includes(x)\n// O(n^2) -> all pairs of arr\n// O(2^n) -> all subsets of arr",
};

/// Build the educational entries for a set of detected patterns.
///
/// One entry per distinct pattern kind with teaching material, ordered by
/// first detection; the baseline entry always closes the list.
pub fn entries_for(patterns: &[Pattern]) -> Vec<EducationalEntry> {
    let mut entries: Vec<EducationalEntry> = Vec::new();

    for pattern in patterns {
        let row = match pattern.kind {
            PatternKind::Nested => Some(&NESTED_LOOPS),
            PatternKind::Recursion => Some(&RECURSION),
            _ => None,
        };
        if let Some(row) = row {
            if !entries.iter().any(|e| e.concept == row.concept) {
                entries.push(row.to_entry());
            }
        }
    }

    entries.push(BIG_O.to_entry());
    entries
}
