//! Sort implementations
//!
//! Each engine drives a [`Tracker`](crate::sort::tracker::Tracker) in place
//! and leaves it sorted in non-decreasing order.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::time::Duration;

    use crate::error::Result;
    use crate::observe::{Discard, Recorder};
    use crate::sort::tracker::Tracker;
    use crate::sort::types::ArrayFrame;
    use crate::step::{Instant, Stepper};

    pub type Engine = fn(&mut Tracker<'_, '_>) -> Result<()>;

    /// Run `engine` headless and return the sorted values and counter.
    pub fn run(engine: Engine, values: &[i64]) -> (Vec<i64>, u64) {
        let mut sink = Discard;
        let mut stepper = Stepper::<ArrayFrame>::new(&mut sink, &Instant, Duration::ZERO);
        let mut tracker = Tracker::new(values.to_vec(), &mut stepper);
        engine(&mut tracker).unwrap();
        tracker.finish()
    }

    /// Run `engine` and keep every published frame.
    pub fn record(engine: Engine, values: &[i64]) -> Vec<ArrayFrame> {
        let mut recorder = Recorder::<ArrayFrame>::new();
        {
            let mut stepper =
                Stepper::<ArrayFrame>::new(&mut recorder, &Instant, Duration::ZERO);
            let mut tracker = Tracker::new(values.to_vec(), &mut stepper);
            engine(&mut tracker).unwrap();
            tracker.finish();
        }
        recorder.into_frames()
    }

    pub const SAMPLE: [i64; 5] = [5, 3, 8, 1, 2];
}
