use crate::coverage::total_coverage;
use crate::miner::Mining;
use crate::pattern::CompressedPattern;
use crate::range::Range;
use ahash::AHashMap as HashMap;
use std::hash::Hash;

/// Compressed motif set: run-collapsed patterns with merged statistics.
#[derive(Debug, Clone)]
pub struct Compressed<T> {
    /// Summed occurrence counts per compressed pattern.
    pub frequency: HashMap<CompressedPattern<T>, usize>,

    /// Unique positions covered by each compressed pattern's occurrences.
    pub coverage: HashMap<CompressedPattern<T>, usize>,
}

/// Collapses every mined pattern into `(symbol, magnitude)` runs and merges
/// the patterns that become identical.
///
/// Raw patterns whose runs fall in the same magnitude buckets share one
/// compressed key; their frequencies are summed and their occurrence lists
/// concatenated before the per-key coverage is recomputed. Exact run
/// lengths are lost here by design.
pub fn compress<T: Hash + Eq + Clone>(mining: &Mining<T>) -> Compressed<T> {
    let mut frequency: HashMap<CompressedPattern<T>, usize> = HashMap::new();
    let mut merged_ranges: HashMap<CompressedPattern<T>, Vec<Range>> = HashMap::new();

    for (pattern, &count) in &mining.frequency {
        let compressed = CompressedPattern::from_pattern(pattern);
        let ranges = mining
            .occurrences
            .get(pattern)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        *frequency.entry(compressed.clone()).or_insert(0) += count;
        merged_ranges
            .entry(compressed)
            .or_default()
            .extend_from_slice(ranges);
    }

    let coverage = merged_ranges
        .into_iter()
        .map(|(key, ranges)| {
            let covered = total_coverage(&ranges);
            (key, covered)
        })
        .collect();

    Compressed {
        frequency,
        coverage,
    }
}
