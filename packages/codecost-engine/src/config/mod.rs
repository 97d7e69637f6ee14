//! Engine tuning constants
//!
//! Every recognizer is a bounded-window linear scan; the windows below cap
//! how far a recognizer looks from its anchor line. The exact values are
//! load-bearing: widening a window changes which shapes match.

/// Maximum number of lines the nested-structure scan walks forward from a
/// loop header before giving up on finding the block end.
pub const NESTED_SCAN_WINDOW: usize = 20;

/// Number of body lines inspected below a function definition when checking
/// for self-calls, fibonacci-style argument shapes, and tail-call candidates.
pub const RECURSION_BODY_WINDOW: usize = 15;

/// Forward window used when classifying the context of a loop header
/// (inner loops, search tokens, sort shapes).
pub const LOOP_CONTEXT_WINDOW: usize = 10;

/// Window scanned for clusters of linear lookup calls.
pub const LOOKUP_CLUSTER_WINDOW: usize = 8;

/// Radius of the +/- context window around a line (sorted-data hints,
/// string-append bodies).
pub const NEAR_CONTEXT_WINDOW: usize = 5;
