//! Traversal implementations
//!
//! - `bfs`: queue-based level traversal
//! - `dfs`: explicit-stack depth-first search
//! - `dijkstra`: priority-queue search recording predecessors
//! - `shared`: helpers used by more than one traversal

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
