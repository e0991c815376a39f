//! Timed sort runs

use std::time::{Duration, Instant};

use chrono::Utc;

use crate::error::Result;
use crate::observe::Observer;
use crate::sort::algos::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
use crate::sort::tracker::Tracker;
use crate::sort::types::{ArrayFrame, SortAlgorithm, SortRun, SortStats};
use crate::step::{Pacer, Stepper};
use crate::trace_time;

/// Sort a copy of `original` with `algorithm`, publishing frames to `observer`.
///
/// `original` is never mutated, so repeated runs over the same snapshot are
/// reproducible apart from the elapsed time.
#[tracing::instrument(skip(original, observer, pacer), fields(len = original.len()))]
pub fn sort_with(
    algorithm: SortAlgorithm,
    original: &[i64],
    observer: &mut dyn Observer<ArrayFrame>,
    pacer: &dyn Pacer,
    delay: Duration,
) -> Result<SortRun> {
    let mut stepper = Stepper::new(observer, pacer, delay);
    let mut tracker = Tracker::new(original.to_vec(), &mut stepper);
    tracker.publish();

    let start = Instant::now();
    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(&mut tracker)?,
        SortAlgorithm::Merge => merge_sort(&mut tracker)?,
        SortAlgorithm::Quick => quick_sort(&mut tracker)?,
        SortAlgorithm::Insertion => insertion_sort(&mut tracker)?,
        SortAlgorithm::Selection => selection_sort(&mut tracker)?,
        SortAlgorithm::Heap => heap_sort(&mut tracker)?,
    }
    let elapsed = start.elapsed();
    trace_time!(start, "sort", algorithm = algorithm.name());

    let (values, swaps) = tracker.finish();
    tracing::info!(
        algorithm = algorithm.name(),
        swaps,
        frames = stepper.frames(),
        "sort finished"
    );

    Ok(SortRun {
        values,
        stats: SortStats {
            algorithm,
            len: original.len(),
            swaps,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            recorded_at: Utc::now(),
        },
    })
}
