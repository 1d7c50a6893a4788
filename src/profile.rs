use crate::compress::Compressed;
use crate::miner::Mining;
use crate::pattern::CompressedPattern;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// One row of the compressed motif table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifReport<T> {
    pub pattern: CompressedPattern<T>,

    /// Summed occurrence count of the raw patterns behind this motif.
    pub frequency: usize,

    /// Unique positions this motif's occurrences cover.
    pub coverage: usize,
}

/// Immutable hand-off bundle for the reporting layer.
///
/// Carries the label sequence alongside the compressed motif table. How
/// the bundle is rendered or persisted is the consumer's concern; it is
/// serializable so an external collaborator can store it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceProfile<T> {
    /// The discretized trace the motifs were mined from.
    pub labels: Vec<T>,

    /// Unique positions explained by any finalized pattern.
    pub total_coverage: usize,

    /// Compressed motifs, widest coverage first.
    pub motifs: Vec<MotifReport<T>>,
}

impl<T: Ord + Hash + Eq + Clone> TraceProfile<T> {
    /// Assembles the bundle from one mining run and its compressed motifs.
    ///
    /// Rows are ordered by coverage, then frequency, then pattern, so equal
    /// inputs always produce an identical bundle.
    pub fn assemble(labels: Vec<T>, mining: &Mining<T>, compressed: &Compressed<T>) -> Self {
        let mut motifs: Vec<MotifReport<T>> = compressed
            .frequency
            .iter()
            .map(|(pattern, &frequency)| MotifReport {
                pattern: pattern.clone(),
                frequency,
                coverage: compressed.coverage.get(pattern).copied().unwrap_or(0),
            })
            .collect();

        motifs.sort_by(|a, b| {
            b.coverage
                .cmp(&a.coverage)
                .then(b.frequency.cmp(&a.frequency))
                .then(a.pattern.cmp(&b.pattern))
        });

        Self {
            labels,
            total_coverage: mining.total_coverage(),
            motifs,
        }
    }
}
