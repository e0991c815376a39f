use serde::{Deserialize, Serialize};

use crate::grid::{Position, DEFAULT_COLS, DEFAULT_END, DEFAULT_ROWS, DEFAULT_START};
use crate::sort::DEFAULT_ARRAY_SIZE;

/// Default inter-step delay for sorting animations
pub const DEFAULT_DELAY_MS: u64 = 100;

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_array_size() -> usize {
    DEFAULT_ARRAY_SIZE
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizConfig {
    /// Milliseconds between sort steps (10..=1000)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Length of generated arrays (10..=100)
    #[serde(default = "default_array_size")]
    pub array_size: usize,

    /// Milliseconds between traversal steps; unset keeps per-algorithm pacing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_delay_ms: Option<u64>,

    #[serde(default)]
    pub grid: GridConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            array_size: DEFAULT_ARRAY_SIZE,
            path_delay_ms: None,
            grid: GridConfig::default(),
        }
    }
}

/// Grid shape and initial endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub end: Position,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}
