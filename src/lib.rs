//! # Traceprof - Trace Motif Profiling
//!
//! Profiles discretized event traces (sequences of cluster labels derived
//! from time-series samples) by discovering recurring contiguous
//! sub-patterns ("motifs") and measuring how much of the trace they
//! explain.
//!
//! Mining is greedy and length-descending: patterns are counted from the
//! longest window size down to 2, and once a pattern recurs often enough
//! its windows are claimed, so shorter patterns can never fragment them.
//! The claimed windows roll up into a single coverage score, which an
//! external hyperparameter search minimizes as a negated loss. Mined
//! patterns are post-processed into run-length compressed motifs for
//! reporting.
//!
//! ## Example
//!
//! ```
//! use traceprof::{compress, mine, score, Pattern};
//!
//! let trace = vec![0u8, 1, 1, 1, 0, 0, 1, 1, 1, 0];
//!
//! // The length-4 motif (0, 1, 1, 1) recurs and is claimed before any of
//! // its shorter fragments can be counted.
//! let mining = mine(&trace, 4, 2).unwrap();
//! let motif = Pattern::from(vec![0u8, 1, 1, 1]);
//! assert_eq!(mining.frequency.get(&motif), Some(&2));
//!
//! // The objective an external search loop sees
//! let outcome = score(&trace, 2);
//! assert_eq!(outcome.coverage, 10);
//! assert_eq!(outcome.loss, -10);
//!
//! // Run-length compressed motifs for reporting
//! let motifs = compress(&mining);
//! assert!(!motifs.frequency.is_empty());
//! ```
//!
//! ## Performance
//!
//! - Window keys are owned slices over a dense `u16` alphabet, built in
//!   O(length) and compared structurally
//! - Windows already claimed by longer patterns are jumped over via a
//!   min-heap of active range ends instead of being re-scanned
//! - One mining run is a self-contained, single-threaded computation

mod codec;
mod compress;
mod coverage;
mod error;
mod miner;
mod pattern;
mod profile;
mod range;
mod score;
mod taken;

#[cfg(test)]
mod tests;

pub use compress::{compress, Compressed};
pub use coverage::total_coverage;
pub use error::ProfileError;
pub use miner::{mine, Mining};
pub use pattern::{magnitude, CompressedPattern, Pattern};
pub use profile::{MotifReport, TraceProfile};
pub use range::Range;
pub use score::{score, ScoreCache, ScoreOutcome};
