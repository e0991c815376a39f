use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::VizError;
use crate::grid::Position;

/// Predecessor map produced by Dijkstra: cell -> cell it was reached from
pub type CameFrom = HashMap<Position, Position>;

/// Available grid traversals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Traversal {
    pub const ALL: [Traversal; 3] = [Traversal::Bfs, Traversal::Dfs, Traversal::Dijkstra];

    pub fn name(self) -> &'static str {
        match self {
            Traversal::Bfs => "BFS",
            Traversal::Dfs => "DFS",
            Traversal::Dijkstra => "Dijkstra",
        }
    }

    /// Per-algorithm animation pace used when no delay is configured
    pub fn default_delay(self) -> Duration {
        match self {
            Traversal::Bfs | Traversal::Dfs => Duration::from_millis(50),
            Traversal::Dijkstra => Duration::from_millis(20),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::Bfs => write!(f, "bfs"),
            Traversal::Dfs => write!(f, "dfs"),
            Traversal::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

impl FromStr for Traversal {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Traversal::Bfs),
            "dfs" => Ok(Traversal::Dfs),
            "dijkstra" => Ok(Traversal::Dijkstra),
            other => bail_invalid!("traversal", other),
        }
    }
}

/// Result of a breadth-first search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsOutcome {
    /// Nodes dequeued, including the end node when reached
    pub visited: usize,
    pub reached: bool,
}

/// Tagged DFS result: the count at the moment the end was found, or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsOutcome {
    Found(usize),
    NotFound,
}

impl DfsOutcome {
    pub fn is_found(self) -> bool {
        matches!(self, DfsOutcome::Found(_))
    }
}

/// DFS outcome plus the running visit counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfsRun {
    pub outcome: DfsOutcome,
    /// Visit counter when the search stopped; equals the start's connected
    /// component size when the end was not found
    pub visited: usize,
}

/// Result of a Dijkstra search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DijkstraOutcome {
    /// Nodes extracted from the queue (stale entries excluded)
    pub visited: usize,
    pub reached: bool,
    pub came_from: CameFrom,
}

/// Cells from start to end inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub cells: Vec<Position>,
}

impl Path {
    /// Number of moves along the path
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

/// Statistics for a single traversal run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStats {
    pub algorithm: Traversal,
    pub visited: usize,
    pub reached: bool,
    /// Shortest path length in steps; only Dijkstra reconstructs a path
    pub path_len: Option<usize>,
    pub elapsed_ms: f64,
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_parse_and_display() {
        for kind in Traversal::ALL {
            assert_eq!(kind.to_string().parse::<Traversal>().unwrap(), kind);
        }
        assert_eq!("DiJkStRa".parse::<Traversal>().unwrap(), Traversal::Dijkstra);
        assert!("astar".parse::<Traversal>().is_err());
    }

    #[test]
    fn test_path_steps() {
        let path = Path {
            cells: vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)],
        };
        assert_eq!(path.steps(), 2);
        assert_eq!(Path { cells: vec![] }.steps(), 0);
    }
}
