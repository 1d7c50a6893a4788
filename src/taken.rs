use crate::range::Range;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The set of windows permanently claimed by finalized patterns.
///
/// Kept sorted by start index. The raw list may hold overlapping ranges
/// (two patterns finalized in the same pass can overlap); what shorter
/// passes must never do is re-count a window lying fully inside one of
/// these ranges, and `TakenScanner` answers exactly that.
#[derive(Debug, Default)]
pub(crate) struct TakenSet {
    ranges: Vec<Range>,
}

impl TakenSet {
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Merges one pass's newly claimed ranges and restores start order.
    ///
    /// The sort is stable, so ranges sharing a start keep discovery order.
    pub fn merge(&mut self, new_ranges: Vec<Range>) {
        if new_ranges.is_empty() {
            return;
        }
        self.ranges.extend(new_ranges);
        self.ranges.sort_by_key(|range| range.start);
    }

    pub fn scanner(&self) -> TakenScanner<'_> {
        TakenScanner {
            ranges: &self.ranges,
            next: 0,
            active_ends: BinaryHeap::new(),
        }
    }

    pub fn into_ranges(self) -> Vec<Range> {
        self.ranges
    }
}

/// Left-to-right scanner deciding whether a window is swallowed by a taken
/// range, and if so where the next candidate window may start.
///
/// A cursor walks the start-sorted range list while a min-heap tracks the
/// ends of every range whose start lies at or before the current window.
/// Window starts must be queried in non-decreasing order.
pub(crate) struct TakenScanner<'a> {
    ranges: &'a [Range],
    next: usize,
    active_ends: BinaryHeap<Reverse<usize>>,
}

impl TakenScanner<'_> {
    /// If the window `[start, start + len)` lies fully inside some taken
    /// range, returns the first window start past the covering range.
    /// Windows merely brushing a taken range are not skipped.
    pub fn skip_target(&mut self, start: usize, len: usize) -> Option<usize> {
        let end = start + len;

        while self.next < self.ranges.len() && self.ranges[self.next].start <= start {
            self.active_ends.push(Reverse(self.ranges[self.next].end));
            self.next += 1;
        }

        // A range ending before this window's end cannot contain it, nor any
        // later window of the same length.
        while let Some(&Reverse(active_end)) = self.active_ends.peek() {
            if active_end < end {
                self.active_ends.pop();
            } else {
                break;
            }
        }

        self.active_ends
            .peek()
            .map(|&Reverse(active_end)| active_end - len + 1)
    }
}
