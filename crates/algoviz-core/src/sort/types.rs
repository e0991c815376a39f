use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::VizError;

/// Available sorting algorithms, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Merge,
    Quick,
    Insertion,
    Selection,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    /// Time and space complexity blurb shown next to a run
    pub fn complexity(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble | SortAlgorithm::Selection | SortAlgorithm::Insertion => {
                "Time: O(n²), Space: O(1)"
            }
            SortAlgorithm::Merge => "Time: O(n log n), Space: O(n)",
            SortAlgorithm::Quick => "Time: Average O(n log n), Worst O(n²), Space: O(log n)",
            SortAlgorithm::Heap => "Time: O(n log n), Space: O(1)",
        }
    }

    /// Whether the counter tracks element copies rather than swaps
    pub fn counts_copies(self) -> bool {
        matches!(self, SortAlgorithm::Merge | SortAlgorithm::Insertion)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Heap => "heap",
        };
        f.write_str(key)
    }
}

impl FromStr for SortAlgorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "merge" => Ok(SortAlgorithm::Merge),
            "quick" => Ok(SortAlgorithm::Quick),
            "insertion" => Ok(SortAlgorithm::Insertion),
            "selection" => Ok(SortAlgorithm::Selection),
            "heap" => Ok(SortAlgorithm::Heap),
            other => bail_invalid!("sort algorithm", other),
        }
    }
}

/// Snapshot of the array published at each step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayFrame {
    pub values: Vec<i64>,
    /// Indices being compared or moved right now
    pub highlighted: Vec<usize>,
    /// Indices already in their final position
    pub sorted: BTreeSet<usize>,
}

impl ArrayFrame {
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            highlighted: Vec::new(),
            sorted: BTreeSet::new(),
        }
    }

    pub fn is_highlighted(&self, idx: usize) -> bool {
        self.highlighted.contains(&idx)
    }

    pub fn is_sorted(&self, idx: usize) -> bool {
        self.sorted.contains(&idx)
    }
}

/// Statistics for a single sort run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortStats {
    pub algorithm: SortAlgorithm,
    pub len: usize,
    /// Swaps, shifts or copies depending on the algorithm
    pub swaps: u64,
    pub elapsed_ms: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Sorted output plus the run statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortRun {
    pub values: Vec<i64>,
    pub stats: SortStats,
}
