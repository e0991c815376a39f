//! Grid pathfinding engines
//!
//! Provides the traversals animated over the [`Grid`](crate::grid::Grid):
//! - BFS: level-order reachability with a visited count
//! - DFS: first-found reachability in fixed direction order
//! - Dijkstra: uniform-cost search with a predecessor map
//! - Shortest-path reconstruction and highlighting from that map

pub mod algos;
pub mod path;
pub mod queue;
pub mod run;
pub mod types;

pub use algos::{bfs, dfs, dijkstra};
pub use path::{highlight_path, reconstruct_path};
pub use queue::MinQueue;
pub use run::run_traversal;
pub use types::{
    BfsOutcome, CameFrom, DfsOutcome, DfsRun, DijkstraOutcome, Path, PathStats, Traversal,
};
