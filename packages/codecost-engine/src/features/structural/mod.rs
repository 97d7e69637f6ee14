//! Structural Detector
//!
//! First of the two engine passes: classifies every line's asymptotic
//! contribution, finds loop/nesting/recursion regions, folds them into the
//! aggregate score, and emits the structural suggestions and educational
//! entries.

pub mod detector;
pub mod education;
pub mod scoring;

pub use detector::{StructuralAnalysis, StructuralDetector};
