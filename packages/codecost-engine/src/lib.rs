//! codecost-engine - heuristic source-code complexity estimation
//!
//! Scans raw source lines with text-pattern recognizers, labels each line's
//! asymptotic contribution, detects loop/nesting/recursion regions, scores
//! the snippet 0-100, and derives ranked, deduplicated optimization
//! suggestions with canned example rewrites.
//!
//! This is deliberately not a static analyzer: no AST, no identifier
//! resolution, no type information. Every recognizer is a bounded-window
//! linear scan over lines, so labels are best-effort estimates, and the
//! public entry point is total.
//!
//! # Architecture
//!
//! - `shared/`   : domain models (LineRecord, Pattern, Suggestion, ...)
//! - `features/` : vertical slices (language profiles, structural detector,
//!   heuristic optimizer)
//! - `pipeline/` : orchestration and suggestion merging
//! - `api/`      : the language-agnostic `analyze` entry point
//!
//! # Example
//!
//! ```
//! use codecost_engine::analyze;
//!
//! let result = analyze(
//!     "for(i=0;i<n;i++){\n  for(j=0;j<n;j++){\n    if(a[i][j]==t) hit=true;\n  }\n}",
//!     "javascript",
//! );
//! assert_eq!(result.overall.time.label(), "O(n^2)");
//! assert!(result.suggestions.iter().any(|s| s.title.contains("hash map")));
//! ```

/// Language-agnostic core API
pub mod api;

/// Engine tuning constants
pub mod config;

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Shared models and utilities
pub mod shared;

pub use api::analyze;
pub use errors::{EngineError, Result};
pub use features::language::{detect_language, LanguageId, LanguageProfile, SUPPORTED_LANGUAGES};
pub use shared::models::{
    AnalysisResult, Complexity, EducationalEntry, LineRecord, OverallComplexity, Pattern,
    PatternKind, Severity, Suggestion, SuggestionKind,
};
