use serde::{Deserialize, Serialize};

use crate::error::{PruneError, Result};

/// A run of 1-based line numbers, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Reject line 0 and reversed bounds. `label` is echoed in the error.
    pub fn validate(&self, label: &str) -> Result<()> {
        if self.start == 0 {
            return Err(PruneError::InvalidRange {
                spec: label.to_string(),
                reason: "line numbers start at 1".to_string(),
            });
        }
        if self.start > self.end {
            return Err(PruneError::InvalidRange {
                spec: label.to_string(),
                reason: format!("start {} is after end {}", self.start, self.end),
            });
        }
        Ok(())
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line <= self.end
    }

    /// Number of lines covered. Saturates instead of overflowing.
    pub fn count(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).saturating_add(1)
    }
}

/// Union of every line number to drop, kept as sorted, disjoint ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ranges: Vec<LineRange>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validated range, merging it with any it overlaps or touches.
    pub fn insert_range(&mut self, range: LineRange) {
        let at = self.ranges.partition_point(|r| r.start < range.start);
        self.ranges.insert(at, range);

        let mut merged: Vec<LineRange> = Vec::with_capacity(self.ranges.len());
        for r in self.ranges.drain(..) {
            match merged.last_mut() {
                Some(last) if r.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(r.end);
                }
                _ => merged.push(r),
            }
        }
        self.ranges = merged;
    }

    pub fn contains(&self, line: usize) -> bool {
        let at = self.ranges.partition_point(|r| r.end < line);
        self.ranges.get(at).is_some_and(|r| r.contains(line))
    }

    /// Distinct lines covered.
    pub fn len(&self) -> usize {
        self.ranges
            .iter()
            .fold(0usize, |acc, r| acc.saturating_add(r.count()))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Merged ranges, ascending.
    pub fn ranges(&self) -> &[LineRange] {
        &self.ranges
    }

    /// The parts of the set past the end of a file of `total` lines.
    pub fn beyond(&self, total: usize) -> Vec<LineRange> {
        let Some(first) = total.checked_add(1) else {
            return Vec::new();
        };
        self.ranges
            .iter()
            .filter(|r| r.end >= first)
            .map(|r| LineRange::new(r.start.max(first), r.end))
            .collect()
    }
}

impl FromIterator<LineRange> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = LineRange>>(iter: I) -> Self {
        let mut set = Self::new();
        for range in iter {
            set.insert_range(range);
        }
        set
    }
}
