use thiserror::Error;

/// Parameter faults reported by the mining entry points.
///
/// Internal invariant violations (heap state, sort order) are debug
/// assertions rather than error values, and numeric faults at the scoring
/// boundary are mapped to the zero-coverage sentinel in [`crate::score`]
/// instead of surfacing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The input trace has no symbols to mine.
    #[error("sequence is empty")]
    EmptySequence,

    /// Patterns shorter than two symbols are never mined.
    #[error("max_subseq_len must be at least 2, got {0}")]
    MaxLenTooSmall(usize),

    /// A pattern seen once is not recurring; thresholds below 2 are refused.
    #[error("min_frequency_thresh must be at least 2, got {0}")]
    ThresholdTooSmall(usize),
}
