use crate::codec::{CanonicalSequence, PatternKey};
use crate::error::ProfileError;
use crate::pattern::Pattern;
use crate::range::Range;
use crate::taken::TakenSet;
use ahash::AHashMap as HashMap;
use log::debug;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Everything one mining run produces.
///
/// Built incrementally across the length-descending passes and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Mining<T> {
    /// Occurrence count per finalized pattern. Never below the threshold
    /// the run was mined with.
    pub frequency: HashMap<Pattern<T>, usize>,

    /// The windows each finalized pattern claimed, in discovery order.
    pub occurrences: HashMap<Pattern<T>, Vec<Range>>,

    /// Union of all claimed windows, sorted by start index. The raw list
    /// may contain overlaps; `total_coverage` deduplicates positions.
    pub taken_ranges: Vec<Range>,
}

impl<T> Mining<T> {
    pub(crate) fn empty() -> Self {
        Self {
            frequency: HashMap::new(),
            occurrences: HashMap::new(),
            taken_ranges: Vec::new(),
        }
    }

    /// Unique positions explained by at least one claimed window.
    pub fn total_coverage(&self) -> usize {
        crate::coverage::total_coverage(&self.taken_ranges)
    }
}

/// Occurrence list accumulated for one window key within a single pass.
#[derive(Debug)]
struct Candidate {
    ranges: Vec<Range>,
    finalized: bool,
}

/// Mines recurring contiguous patterns out of a discretized trace.
///
/// Pattern lengths are processed from `max_subseq_len` (clamped to the
/// trace length minus one) down to 2, so longer patterns claim their
/// windows first and can never be fragmented by shorter ones. Within a
/// pass, windows are scanned left to right; a window lying fully inside an
/// already claimed range is jumped over in one step. A pattern is
/// finalized the moment its occurrence list reaches
/// `min_frequency_thresh`, at which point every window it accumulated is
/// claimed; further sightings claim one window each. Patterns that stay
/// below the threshold at every length are dropped without trace.
///
/// The result is deterministic for fixed inputs: scan order is fixed and
/// nothing here is randomized.
///
/// # Errors
///
/// Fails fast on an empty trace, `max_subseq_len < 2`, or
/// `min_frequency_thresh < 2` (a pattern seen once is not recurring).
pub fn mine<T>(
    labels: &[T],
    max_subseq_len: usize,
    min_frequency_thresh: usize,
) -> Result<Mining<T>, ProfileError>
where
    T: Ord + Hash + Eq + Clone,
{
    if labels.is_empty() {
        return Err(ProfileError::EmptySequence);
    }
    if max_subseq_len < 2 {
        return Err(ProfileError::MaxLenTooSmall(max_subseq_len));
    }
    if min_frequency_thresh < 2 {
        return Err(ProfileError::ThresholdTooSmall(min_frequency_thresh));
    }

    let encoded = CanonicalSequence::encode(labels);
    let n = encoded.len();
    debug!(
        "mining {n} symbols over an alphabet of {}",
        encoded.alphabet_len()
    );

    // A pattern spanning the whole trace can occur only once, so lengths
    // cap at n - 1.
    let max_len = max_subseq_len.min(n - 1);

    let mut taken = TakenSet::new();
    let mut frequency = HashMap::new();
    let mut occurrences = HashMap::new();

    for length in (2..=max_len).rev() {
        if length % 100 == 0 {
            debug!("mining checkpoint: length {length}");
        }

        let mut candidates: HashMap<PatternKey, Candidate> = HashMap::new();
        let mut new_taken: Vec<Range> = Vec::new();
        let mut scanner = taken.scanner();

        let mut start = 0;
        while start + length <= n {
            // Windows swallowed by a longer pattern's claim are never
            // re-counted; jump past the covering range in one step.
            if let Some(jump) = scanner.skip_target(start, length) {
                start = jump;
                continue;
            }

            let range = Range::new(start, start + length);
            match candidates.entry(encoded.key(start, start + length)) {
                Entry::Vacant(slot) => {
                    slot.insert(Candidate {
                        ranges: vec![range],
                        finalized: false,
                    });
                }
                Entry::Occupied(mut slot) => {
                    let candidate = slot.get_mut();
                    candidate.ranges.push(range);
                    if candidate.finalized {
                        // Already claimed; only the new window joins this
                        // pass's takes.
                        new_taken.push(range);
                    } else if candidate.ranges.len() == min_frequency_thresh {
                        // Threshold reached: claim every accumulated window.
                        candidate.finalized = true;
                        new_taken.extend_from_slice(&candidate.ranges);
                    }
                }
            }

            start += 1;
        }

        for (key, candidate) in candidates {
            if candidate.finalized {
                let pattern = Pattern::from(encoded.decode(&key));
                frequency.insert(pattern.clone(), candidate.ranges.len());
                occurrences.insert(pattern, candidate.ranges);
            }
        }

        taken.merge(new_taken);
    }

    Ok(Mining {
        frequency,
        occurrences,
        taken_ranges: taken.into_ranges(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        let err = mine::<u8>(&[], 4, 2).unwrap_err();
        assert_eq!(err, ProfileError::EmptySequence);
    }

    #[test]
    fn test_short_max_len_rejected() {
        let err = mine(&[1u8, 2, 1, 2], 1, 2).unwrap_err();
        assert_eq!(err, ProfileError::MaxLenTooSmall(1));
    }

    #[test]
    fn test_threshold_one_rejected() {
        let err = mine(&[1u8, 2, 1, 2], 4, 1).unwrap_err();
        assert_eq!(err, ProfileError::ThresholdTooSmall(1));
    }

    #[test]
    fn test_no_repetition_no_patterns() {
        let mining = mine(&[1u8, 2, 3, 4, 5], 4, 2).unwrap();
        assert!(mining.frequency.is_empty());
        assert!(mining.occurrences.is_empty());
        assert!(mining.taken_ranges.is_empty());
        assert_eq!(mining.total_coverage(), 0);
    }

    #[test]
    fn test_longest_pattern_claimed_first() {
        let trace = vec![0u8, 1, 1, 1, 0, 0, 1, 1, 1, 0];
        let mining = mine(&trace, 4, 2).unwrap();

        let motif = Pattern::from(vec![0u8, 1, 1, 1]);
        assert_eq!(mining.frequency.get(&motif), Some(&2));
        assert_eq!(
            mining.occurrences.get(&motif),
            Some(&vec![Range::new(0, 4), Range::new(5, 9)])
        );

        // No shorter fragment of the motif is separately counted
        assert!(mining.frequency.keys().all(|pattern| pattern.len() == 4));
    }

    #[test]
    fn test_same_pass_patterns_may_overlap() {
        // At length 4 both 0111 and 1110 recur; the second is discovered in
        // the same pass, before the first's claims take effect.
        let trace = vec![0u8, 1, 1, 1, 0, 0, 1, 1, 1, 0];
        let mining = mine(&trace, 4, 2).unwrap();

        assert_eq!(mining.frequency.len(), 2);
        assert!(mining
            .frequency
            .contains_key(&Pattern::from(vec![1u8, 1, 1, 0])));
        assert_eq!(mining.total_coverage(), 10);
    }

    #[test]
    fn test_uniform_trace_claims_longest_run() {
        let mining = mine(&[7u8; 6], 5, 2).unwrap();

        let motif = Pattern::from(vec![7u8; 5]);
        assert_eq!(mining.frequency.get(&motif), Some(&2));
        assert_eq!(mining.frequency.len(), 1);
        assert_eq!(mining.total_coverage(), 6);
    }

    #[test]
    fn test_max_len_clamped_to_trace() {
        let trace = vec![3u8, 4, 3, 4, 3, 4];
        let clamped = mine(&trace, 1_000, 2).unwrap();
        let explicit = mine(&trace, trace.len() - 1, 2).unwrap();

        assert_eq!(clamped.taken_ranges, explicit.taken_ranges);
        assert_eq!(clamped.frequency.len(), explicit.frequency.len());
    }

    #[test]
    fn test_single_symbol_trace_degrades_gracefully() {
        let mining = mine(&[9u8], 4, 2).unwrap();
        assert!(mining.frequency.is_empty());
        assert!(mining.taken_ranges.is_empty());
    }

    #[test]
    fn test_frequency_matches_occurrences() {
        let trace = vec![0u8, 1, 2, 0, 1, 2, 0, 1, 2, 3, 0, 1];
        let mining = mine(&trace, 6, 2).unwrap();

        for (pattern, count) in &mining.frequency {
            assert_eq!(mining.occurrences[pattern].len(), *count);
        }
    }

    #[test]
    fn test_labels_need_not_be_dense() {
        // Arbitrary label values come back out unchanged
        let trace = vec![100u32, 7, 100, 7, 100, 7];
        let mining = mine(&trace, 4, 2).unwrap();
        assert!(mining
            .frequency
            .keys()
            .any(|pattern| pattern.symbols().contains(&100)));
    }
}
