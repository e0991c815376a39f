//! Snapshot publication
//!
//! Engines publish a snapshot of their state after every meaningful mutation.
//! Rendering lives entirely behind [`Observer`], so the engines can be driven
//! headless and their snapshot sequence inspected in tests.

/// Receiver of engine snapshots
pub trait Observer<T: ?Sized> {
    fn publish(&mut self, snapshot: &T);
}

impl<T: ?Sized, O: Observer<T> + ?Sized> Observer<T> for &mut O {
    fn publish(&mut self, snapshot: &T) {
        (**self).publish(snapshot);
    }
}

/// Observer that drops every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl<T: ?Sized> Observer<T> for Discard {
    fn publish(&mut self, _snapshot: &T) {}
}

/// Observer that keeps a copy of every snapshot in publication order.
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    frames: Vec<T>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frames(&self) -> &[T] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.frames.last()
    }

    pub fn into_frames(self) -> Vec<T> {
        self.frames
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Observer<T> for Recorder<T> {
    fn publish(&mut self, snapshot: &T) {
        self.frames.push(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publish_twice<O: Observer<Vec<u32>>>(mut observer: O) {
        observer.publish(&vec![1, 2]);
        observer.publish(&vec![3]);
    }

    #[test]
    fn test_recorder_keeps_order() {
        let mut recorder = Recorder::new();
        publish_twice(&mut recorder);
        assert_eq!(recorder.frames(), &[vec![1, 2], vec![3]]);
        assert_eq!(recorder.last(), Some(&vec![3]));
    }

    #[test]
    fn test_discard_accepts_anything() {
        publish_twice(Discard);
        let mut discard = Discard;
        Observer::<str>::publish(&mut discard, "ignored");
    }
}
