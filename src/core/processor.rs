use std::collections::BTreeMap;

use crate::parsing::SkipReason;

/// Statistics about a parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub chunks: usize,
    pub records: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl ParseStats {
    pub fn new(chunks: usize, records: usize) -> Self {
        Self {
            chunks,
            records,
            skipped: BTreeMap::new(),
        }
    }

    /// Counts one skipped chunk.
    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    /// Total number of skipped chunks.
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Skipped chunks for one reason.
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    /// Percentage of chunks that became records.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.chunks == 0 {
            return 0.0;
        }
        (self.records as f64 / self.chunks as f64) * 100.0
    }
}
