//! Append-only history of run statistics for the current session

use serde::{Deserialize, Serialize};

use crate::pathfind::PathStats;
use crate::sort::{SortAlgorithm, SortStats};

/// One finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RunRecord {
    Sort(SortStats),
    Path(PathStats),
}

/// Runs in the order they finished. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    records: Vec<RunRecord>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_sort(&mut self, stats: SortStats) {
        self.records.push(RunRecord::Sort(stats));
    }

    pub fn push_path(&mut self, stats: PathStats) {
        self.records.push(RunRecord::Path(stats));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sorts(&self) -> impl Iterator<Item = &SortStats> {
        self.records.iter().filter_map(|record| match record {
            RunRecord::Sort(stats) => Some(stats),
            RunRecord::Path(_) => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathStats> {
        self.records.iter().filter_map(|record| match record {
            RunRecord::Path(stats) => Some(stats),
            RunRecord::Sort(_) => None,
        })
    }

    /// Sort run with the fewest swaps/copies; earliest wins ties.
    pub fn fewest_swaps(&self) -> Option<SortAlgorithm> {
        self.sorts()
            .min_by_key(|stats| stats.swaps)
            .map(|stats| stats.algorithm)
    }
}
