//! Language-agnostic core API
//!
//! The single engine entry point, designed to be wrapped by any frontend
//! (CLI, service, FFI) without pulling in their concerns.

use crate::pipeline;
use crate::shared::models::AnalysisResult;

/// Analyze a source snippet and estimate its algorithmic complexity.
///
/// Synchronous, deterministic, and total: the call never fails. An
/// unrecognized `language` tag falls back to the C-family heuristics, and
/// arbitrary or malformed input is still classified line by line, degrading
/// to conservative labels rather than erroring.
///
/// ```
/// use codecost_engine::analyze;
///
/// let result = analyze("for(i=0;i<n;i++){\n  sum+=arr[i];\n}", "javascript");
/// assert_eq!(result.overall.time.label(), "O(n)");
/// assert_eq!(result.overall.score, 90);
/// ```
pub fn analyze(code: &str, language: &str) -> AnalysisResult {
    pipeline::run(code, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Complexity;

    #[test]
    fn test_unknown_language_falls_back() {
        let result = analyze("for(i=0;i<n;i++){\n  x++;\n}", "klingon");
        assert_eq!(result.overall.time, Complexity::Linear);
    }

    #[test]
    fn test_empty_input_is_trivial_result() {
        let result = analyze("", "javascript");
        assert_eq!(result.line_records.len(), 1);
        assert!(result.patterns.is_empty());
        assert_eq!(result.overall.score, 100);
        assert_eq!(result.overall.time, Complexity::Constant);
    }

    #[test]
    fn test_binary_garbage_never_fails() {
        let noise = "\u{0}\u{1}\u{2}garbage{{{{]]]\nmore\u{7f}noise";
        let result = analyze(noise, "javascript");
        assert_eq!(result.line_records.len(), 2);
    }
}
