//! Animated sorting engines
//!
//! Six textbook sorts instrumented with a swap/copy counter. Every engine
//! works on a copy of the caller's original snapshot and publishes an
//! [`ArrayFrame`] at each suspension point.

pub mod algos;
pub mod bench;
pub mod run;
pub mod tracker;
pub mod types;

pub use bench::{
    ArrayBench, DEFAULT_ARRAY_SIZE, MAX_ARRAY_SIZE, MAX_VALUE, MIN_ARRAY_SIZE, MIN_VALUE,
};
pub use run::sort_with;
pub use types::{ArrayFrame, SortAlgorithm, SortRun, SortStats};
