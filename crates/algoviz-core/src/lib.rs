//! Algoviz Core Library
//!
//! Step-by-step sorting and grid pathfinding engines that publish every
//! intermediate state to an observer, plus the configuration, error and
//! logging plumbing shared with the `algoviz` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod grid;
pub mod logging;
pub mod observe;
pub mod pathfind;
pub mod sort;
pub mod stats;
pub mod step;

pub use error::{Result, VizError};
