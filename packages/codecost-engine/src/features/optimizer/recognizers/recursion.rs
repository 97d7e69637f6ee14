//! Recursion shape: fibonacci-style branching and tail-call candidates.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RECURSION_BODY_WINDOW;
use crate::features::optimizer::templates;
use crate::features::optimizer::{Recognizer, ScanContext};
use crate::shared::models::{Severity, Suggestion, SuggestionKind};
use crate::shared::text;

static N_MINUS_ONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+\s*-\s*1\b").expect("n-1 regex"));
static N_MINUS_TWO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+\s*-\s*2\b").expect("n-2 regex"));

pub struct RecursionShape;

impl Recognizer for RecursionShape {
    fn name(&self) -> &'static str {
        "recursion-shape"
    }

    fn scan(&self, ctx: &ScanContext) -> Vec<Suggestion> {
        let mut out = Vec::new();

        for i in 0..ctx.len() {
            if !ctx.profile.is_function_def(ctx.lines[i]) {
                continue;
            }
            let name = ctx
                .profile
                .function_name(ctx.lines[i])
                .unwrap_or_else(|| templates::FALLBACK_FUNCTION_NAME.to_string());

            let body = text::window(ctx.len(), i + 1, RECURSION_BODY_WINDOW);
            let self_referential = body
                .clone()
                .any(|j| text::contains_call(ctx.lines[j], &name));
            if !self_referential {
                continue;
            }

            let body_text = ctx.lower_window(i + 1, RECURSION_BODY_WINDOW);
            let fibonacci_shaped = (N_MINUS_ONE.is_match(&body_text)
                && N_MINUS_TWO.is_match(&body_text))
                || body_text.contains("fibonacci");

            if fibonacci_shaped {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Algorithm,
                    title: "Memoize overlapping subproblems".to_string(),
                    description: format!(
                        "{}() branches on smaller inputs that repeat; caching results \
                         turns the exponential call tree into a linear one.",
                        name
                    ),
                    example: Some(templates::memoization_example(&name)),
                    priority: Severity::High,
                });
            }

            // Tail-call candidate: a return of the bare self-call, with no
            // arithmetic combining the result.
            let tail_shaped = body.clone().any(|j| {
                let line = ctx.lines[j];
                line.contains("return")
                    && text::contains_call(line, &name)
                    && !line.contains('+')
                    && !line.contains('*')
            });

            if tail_shaped {
                out.push(Suggestion {
                    line: i + 1,
                    kind: SuggestionKind::Algorithm,
                    title: "Convert recursion to iteration".to_string(),
                    description: format!(
                        "{}() returns its recursive call unchanged; a loop performs the \
                         same work without growing the call stack.",
                        name
                    ),
                    example: Some(templates::iterative_example(&name)),
                    priority: Severity::Medium,
                });
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::language::LanguageProfile;

    fn scan(code: &str, language: &str) -> Vec<Suggestion> {
        let ctx = ScanContext::new(code, LanguageProfile::resolve(language));
        RecursionShape.scan(&ctx)
    }

    #[test]
    fn test_fibonacci_suggests_memoization_with_name() {
        let code = "function fibonacci(n) {\n  if (n <= 1) return n;\n  return fibonacci(n - 1) + fibonacci(n - 2);\n}";
        let found = scan(code, "javascript");

        let memo: Vec<_> = found
            .iter()
            .filter(|s| s.title == "Memoize overlapping subproblems")
            .collect();
        assert_eq!(memo.len(), 1);
        assert_eq!(memo[0].line, 1);
        assert_eq!(memo[0].priority, Severity::High);
        let example = memo[0].example.as_deref().unwrap();
        assert!(example.contains("fibonacci"));
    }

    #[test]
    fn test_bare_return_call_suggests_iteration() {
        let code = "function countdown(n) {\n  if (n == 0) return 0;\n  return countdown(n - 1);\n}";
        let found = scan(code, "javascript");

        assert!(found
            .iter()
            .any(|s| s.title == "Convert recursion to iteration" && s.priority == Severity::Medium));
        // n - 1 alone is not fibonacci-shaped.
        assert!(!found
            .iter()
            .any(|s| s.title == "Memoize overlapping subproblems"));
    }

    #[test]
    fn test_combined_return_is_not_tail_shaped() {
        let code = "function fibonacci(n) {\n  if (n <= 1) return n;\n  return fibonacci(n - 1) + fibonacci(n - 2);\n}";
        let found = scan(code, "javascript");
        assert!(!found
            .iter()
            .any(|s| s.title == "Convert recursion to iteration"));
    }

    #[test]
    fn test_non_recursive_function_is_ignored() {
        let code = "function total(xs) {\n  let sum = 0;\n  return sum;\n}";
        assert!(scan(code, "javascript").is_empty());
    }

    #[test]
    fn test_python_recursion_detected() {
        let code = "def fact(n):\n    if n <= 1:\n        return 1\n    return n * fact(n - 1)";
        let found = scan(code, "python");
        // Multiplicative return: recursion is seen but not tail-shaped, and
        // n-1 alone is not fibonacci-shaped.
        assert!(found.is_empty());
    }
}
