use serde::{Deserialize, Serialize};

/// A mined motif: the symbol content of a finalized window.
///
/// Equality and hashing are structural, so the same symbols mined from
/// different traces (or different positions) compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pattern<T>(pub Box<[T]>);

impl<T> Pattern<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> &[T] {
        &self.0
    }
}

impl<T: Clone> From<&[T]> for Pattern<T> {
    fn from(symbols: &[T]) -> Self {
        Pattern(symbols.into())
    }
}

impl<T> From<Vec<T>> for Pattern<T> {
    fn from(symbols: Vec<T>) -> Self {
        Pattern(symbols.into_boxed_slice())
    }
}

/// A motif after run-length collapsing: one `(symbol, magnitude)` pair per
/// maximal run of an identical symbol.
///
/// Exact run lengths are dropped on purpose; only their order of magnitude
/// survives, so `(a, a, a, b)` and `(a, a, b)` share the key `[(a, 1), (b, 0)]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompressedPattern<T>(pub Box<[(T, u32)]>);

impl<T: PartialEq + Clone> CompressedPattern<T> {
    /// Collapses the maximal runs of `pattern` into `(symbol, magnitude)` pairs.
    pub fn from_pattern(pattern: &Pattern<T>) -> Self {
        let mut runs = Vec::new();
        let mut iter = pattern.symbols().iter();

        let Some(first) = iter.next() else {
            return CompressedPattern(runs.into_boxed_slice());
        };

        let mut current = first;
        let mut run = 1usize;
        for symbol in iter {
            if symbol == current {
                run += 1;
            } else {
                runs.push((current.clone(), magnitude(run)));
                current = symbol;
                run = 1;
            }
        }
        runs.push((current.clone(), magnitude(run)));

        CompressedPattern(runs.into_boxed_slice())
    }

    pub fn runs(&self) -> &[(T, u32)] {
        &self.0
    }
}

/// Order-of-magnitude bucket for a run length: the smallest `m` with
/// `10^m >= run`. A run of 1 maps to 0.
///
/// Equivalent to `ceil(log10(run))` but computed with exact integer
/// arithmetic.
pub fn magnitude(run: usize) -> u32 {
    debug_assert!(run > 0, "runs are non-empty");
    let mut mag = 0;
    let mut bound = 1usize;
    while bound < run {
        bound = bound.saturating_mul(10);
        mag += 1;
    }
    mag
}
