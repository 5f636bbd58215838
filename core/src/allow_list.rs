//! Closed codepoint repertoire a display can render.
//!
//! An `AllowList` is built from a set of ranges and singletons. Ranges are
//! sorted and coalesced on construction so membership is a binary search.

use std::cmp::Ordering;

/// Inclusive codepoint range. A singleton has `first == last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointRange {
    pub first: char,
    pub last: char,
}

impl CodepointRange {
    /// Inclusive range `first..=last`.
    pub const fn new(first: char, last: char) -> Self {
        Self { first, last }
    }

    /// Range holding exactly one codepoint.
    pub const fn single(ch: char) -> Self {
        Self { first: ch, last: ch }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.first <= ch && ch <= self.last
    }

    fn compare(&self, ch: char) -> Ordering {
        if ch < self.first {
            Ordering::Greater
        } else if ch > self.last {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// Set of disjoint codepoint ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowList {
    ranges: Vec<CodepointRange>,
}

impl AllowList {
    /// Build an allow-list from possibly overlapping, unordered ranges.
    ///
    /// Inverted ranges (`first > last`) are dropped. Overlapping and adjacent
    /// ranges are merged so the stored set is disjoint and sorted.
    pub fn from_ranges(ranges: &[CodepointRange]) -> Self {
        let mut sorted: Vec<CodepointRange> = ranges
            .iter()
            .copied()
            .filter(|r| r.first <= r.last)
            .collect();
        sorted.sort_by_key(|r| r.first);

        let mut merged: Vec<CodepointRange> = Vec::with_capacity(sorted.len());
        for range in sorted {
            if let Some(prev) = merged.last_mut() {
                if range.first as u32 <= prev.last as u32 + 1 {
                    if range.last > prev.last {
                        prev.last = range.last;
                    }
                    continue;
                }
            }
            merged.push(range);
        }

        Self { ranges: merged }
    }

    /// Check whether `ch` is renderable.
    pub fn contains(&self, ch: char) -> bool {
        self.ranges.binary_search_by(|r| r.compare(ch)).is_ok()
    }

    /// Check whether every character of `s` is renderable.
    pub fn contains_all(&self, s: &str) -> bool {
        s.chars().all(|ch| self.contains(ch))
    }

    /// The normalized (sorted, disjoint) ranges.
    pub fn ranges(&self) -> &[CodepointRange] {
        &self.ranges
    }

    /// Total number of codepoints in the set.
    pub fn len(&self) -> usize {
        self.ranges
            .iter()
            .map(|r| (r.last as u32 - r.first as u32 + 1) as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Check whether every member of `self` is also a member of `other`.
    pub fn is_subset_of(&self, other: &AllowList) -> bool {
        self.ranges
            .iter()
            .all(|r| (r.first..=r.last).all(|ch| other.contains(ch)))
    }
}
