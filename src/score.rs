use crate::miner::{mine, Mining};
use ahash::AHashMap as HashMap;
use log::warn;
use std::hash::Hash;

/// Lowest threshold the objective mines with; smaller requests are clamped
/// up before mining (a pattern seen once is not recurring).
const MIN_THRESHOLD: usize = 2;

/// One evaluation of the coverage objective.
#[derive(Debug, Clone)]
pub struct ScoreOutcome<T> {
    /// The full mining result behind this evaluation.
    pub mining: Mining<T>,

    /// Unique positions covered by all claimed windows.
    pub coverage: usize,

    /// Objective value handed to a minimizing optimizer: `-(coverage)`.
    pub loss: i64,
}

/// Evaluates the coverage objective for one frequency threshold.
///
/// This is the call boundary an external hyperparameter search drives.
/// `max_subseq_len` defaults to the trace length minus one. Thresholds
/// below 2 are clamped up with a warning rather than refused, and any
/// mining failure is mapped to a zero-coverage outcome instead of
/// propagating, so the search loop always gets an answer it can rank.
pub fn score<T>(labels: &[T], min_frequency_thresh: usize) -> ScoreOutcome<T>
where
    T: Ord + Hash + Eq + Clone,
{
    let threshold = if min_frequency_thresh < MIN_THRESHOLD {
        warn!("min_frequency_thresh {min_frequency_thresh} below {MIN_THRESHOLD}, rounding up");
        MIN_THRESHOLD
    } else {
        min_frequency_thresh
    };

    let max_subseq_len = labels.len().saturating_sub(1);

    match mine(labels, max_subseq_len, threshold) {
        Ok(mining) => {
            let coverage = mining.total_coverage();
            ScoreOutcome {
                mining,
                coverage,
                loss: -(coverage as i64),
            }
        }
        Err(err) => {
            warn!("scoring failed ({err}); reporting zero coverage");
            ScoreOutcome {
                mining: Mining::empty(),
                coverage: 0,
                loss: 0,
            }
        }
    }
}

/// Caller-owned memo of objective evaluations, keyed by (clamped)
/// threshold.
///
/// An external search may probe the same threshold repeatedly; replaying
/// the stored outcome keeps those calls idempotent without hiding state in
/// a global. Growth is unbounded on purpose: the key space is limited by
/// the optimizer's trial budget.
#[derive(Debug)]
pub struct ScoreCache<T> {
    by_threshold: HashMap<usize, ScoreOutcome<T>>,
}

impl<T: Ord + Hash + Eq + Clone> ScoreCache<T> {
    pub fn new() -> Self {
        Self {
            by_threshold: HashMap::new(),
        }
    }

    /// Number of distinct thresholds evaluated so far.
    pub fn len(&self) -> usize {
        self.by_threshold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_threshold.is_empty()
    }

    /// Scores `labels` at `min_frequency_thresh`, replaying the stored
    /// outcome when the threshold was already evaluated.
    ///
    /// The cache key is the clamped threshold, so 0, 1 and 2 share one
    /// entry.
    pub fn score(&mut self, labels: &[T], min_frequency_thresh: usize) -> &ScoreOutcome<T> {
        let threshold = min_frequency_thresh.max(MIN_THRESHOLD);
        if !self.by_threshold.contains_key(&threshold) {
            let outcome = score(labels, min_frequency_thresh);
            self.by_threshold.insert(threshold, outcome);
        } else {
            warn!("repeat threshold {threshold}, replaying cached outcome");
        }
        &self.by_threshold[&threshold]
    }
}

impl<T: Ord + Hash + Eq + Clone> Default for ScoreCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
