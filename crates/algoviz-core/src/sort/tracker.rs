//! Instrumented working copy shared by the sort engines

use crate::error::Result;
use crate::sort::types::ArrayFrame;
use crate::step::Stepper;

/// Working array plus display state and the swap/copy counter.
///
/// Engines mutate through this type so counting and publication stay uniform:
/// [`Tracker::step`] publishes the current frame and waits one step.
pub struct Tracker<'s, 'a> {
    frame: ArrayFrame,
    count: u64,
    stepper: &'s mut Stepper<'a, ArrayFrame>,
}

impl<'s, 'a> Tracker<'s, 'a> {
    pub fn new(values: Vec<i64>, stepper: &'s mut Stepper<'a, ArrayFrame>) -> Self {
        Self {
            frame: ArrayFrame::new(values),
            count: 0,
            stepper,
        }
    }

    pub fn len(&self) -> usize {
        self.frame.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.values.is_empty()
    }

    pub fn get(&self, idx: usize) -> i64 {
        self.frame.values[idx]
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Swap two slots and count it.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.frame.values.swap(a, b);
        self.count += 1;
    }

    /// Overwrite a slot and count it as a move.
    pub fn write_counted(&mut self, idx: usize, value: i64) {
        self.frame.values[idx] = value;
        self.count += 1;
    }

    /// Overwrite a slot without counting (placing a held key).
    pub fn write(&mut self, idx: usize, value: i64) {
        self.frame.values[idx] = value;
    }

    pub fn highlight(&mut self, indices: &[usize]) {
        self.frame.highlighted.clear();
        self.frame.highlighted.extend_from_slice(indices);
    }

    pub fn mark_sorted(&mut self, idx: usize) {
        self.frame.sorted.insert(idx);
    }

    /// Publish the current frame and wait one step.
    pub fn step(&mut self) -> Result<()> {
        self.stepper.frame(&self.frame)
    }

    /// Publish without waiting.
    pub fn publish(&mut self) {
        self.stepper.publish(&self.frame);
    }

    /// Mark everything sorted, clear highlights and publish the final frame.
    pub fn finish(mut self) -> (Vec<i64>, u64) {
        self.frame.highlighted.clear();
        self.frame.sorted = (0..self.frame.values.len()).collect();
        self.stepper.publish(&self.frame);
        (self.frame.values, self.count)
    }
}
