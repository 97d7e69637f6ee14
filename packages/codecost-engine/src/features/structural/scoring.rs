//! Aggregate scoring
//!
//! Folds detected patterns, in detection order, into the overall summary.
//! Later qualifying patterns overwrite `time` even when an earlier pattern
//! set a costlier label; the final label is whatever the last qualifying
//! pattern set, not the worst case seen. Downstream consumers rely on the
//! published scores, so the fold must stay sequential.

use crate::shared::models::{Complexity, OverallComplexity, Pattern};

/// Score deduction for an exponential pattern.
const EXPONENTIAL_PENALTY: i32 = 40;
/// Score deduction for an O(n log n) pattern.
const LINEARITHMIC_PENALTY: i32 = 15;
/// Score deduction for a linear pattern (applied once, from a constant
/// baseline only).
const LINEAR_PENALTY: i32 = 10;
/// Per-exponent score deduction for an O(n^k) pattern.
const POWER_PENALTY_PER_LEVEL: i32 = 20;

/// Fold all detected patterns into the overall complexity summary.
///
/// Space is always reported as O(1): space inference is out of scope and the
/// constant label is the documented placeholder, not a measurement.
pub fn score(patterns: &[Pattern]) -> OverallComplexity {
    let mut time = Complexity::Constant;
    let mut score: i32 = 100;

    for pattern in patterns {
        match pattern.complexity {
            Complexity::Power(k) => {
                time = Complexity::Power(k);
                score -= POWER_PENALTY_PER_LEVEL * k as i32;
            }
            Complexity::Exponential => {
                time = Complexity::Exponential;
                score -= EXPONENTIAL_PENALTY;
            }
            Complexity::Linearithmic => {
                time = Complexity::Linearithmic;
                score -= LINEARITHMIC_PENALTY;
            }
            Complexity::Linear if time == Complexity::Constant => {
                time = Complexity::Linear;
                score -= LINEAR_PENALTY;
            }
            _ => {}
        }
    }

    let score = score.clamp(0, 100) as u8;
    tracing::debug!("scored {} patterns: time {}, score {}", patterns.len(), time, score);

    OverallComplexity {
        time,
        space: Complexity::Constant,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{PatternKind, Severity};

    fn pattern(complexity: Complexity) -> Pattern {
        Pattern::single_line(PatternKind::Loop, 1, complexity, "test", Severity::Medium)
    }

    #[test]
    fn test_empty_patterns_keep_perfect_score() {
        let overall = score(&[]);
        assert_eq!(overall.time, Complexity::Constant);
        assert_eq!(overall.space, Complexity::Constant);
        assert_eq!(overall.score, 100);
    }

    #[test]
    fn test_single_linear_pattern() {
        let overall = score(&[pattern(Complexity::Linear)]);
        assert_eq!(overall.time, Complexity::Linear);
        assert_eq!(overall.score, 90);
    }

    #[test]
    fn test_linear_only_applies_from_constant_baseline() {
        let overall = score(&[pattern(Complexity::Power(2)), pattern(Complexity::Linear)]);
        assert_eq!(overall.time, Complexity::Power(2));
        assert_eq!(overall.score, 60);
    }

    #[test]
    fn test_power_penalty_scales_with_exponent() {
        assert_eq!(score(&[pattern(Complexity::Power(2))]).score, 60);
        assert_eq!(score(&[pattern(Complexity::Power(3))]).score, 40);
    }

    #[test]
    fn test_later_pattern_overwrites_time() {
        // The fold keeps the last qualifying label, not the worst one.
        let overall = score(&[
            pattern(Complexity::Exponential),
            pattern(Complexity::Linearithmic),
        ]);
        assert_eq!(overall.time, Complexity::Linearithmic);
        assert_eq!(overall.score, 45);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let patterns: Vec<Pattern> = (0..5).map(|_| pattern(Complexity::Exponential)).collect();
        let overall = score(&patterns);
        assert_eq!(overall.score, 0);
    }

    #[test]
    fn test_score_is_monotone_in_pattern_count() {
        let mut patterns = Vec::new();
        let mut last = 100;
        for _ in 0..6 {
            patterns.push(pattern(Complexity::Power(2)));
            let next = score(&patterns).score;
            assert!(next <= last);
            last = next;
        }
    }
}
