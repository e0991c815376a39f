//! Step pacing and the cooperative pause gate
//!
//! Engines call [`Pacer::step`] at every suspension point. A [`PauseGate`]
//! parks the engine thread on a condition variable while paused and sleeps
//! for the inter-step delay with a timed wait, so `resume` and `cancel` take
//! effect without polling.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant as Clock};

use crate::error::{Result, VizError};
use crate::observe::Observer;

/// Slider bounds for the inter-step delay in milliseconds
pub const MIN_DELAY_MS: u64 = 10;
pub const MAX_DELAY_MS: u64 = 1000;

/// Suspension point handed to every engine
pub trait Pacer {
    /// Wait out one animation step, holding while paused.
    ///
    /// Returns [`VizError::Interrupted`] once the run has been cancelled.
    fn step(&self, delay: Duration) -> Result<()>;
}

/// Pacer that never waits and never pauses.
#[derive(Debug, Default, Clone, Copy)]
pub struct Instant;

impl Pacer for Instant {
    fn step(&self, _delay: Duration) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct GateState {
    paused: bool,
    cancelled: bool,
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<GateState>,
    changed: Condvar,
}

/// Pause/resume/cancel switch shared between the engine thread and a controller.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct PauseGate {
    shared: Arc<Shared>,
}

impl PauseGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        // a panicking holder cannot leave the two flags inconsistent
        self.shared
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update(&self, f: impl FnOnce(&mut GateState)) {
        let mut state = self.lock();
        f(&mut state);
        self.shared.changed.notify_all();
    }

    pub fn pause(&self) {
        self.update(|state| state.paused = true);
        tracing::debug!("run paused");
    }

    pub fn resume(&self) {
        self.update(|state| state.paused = false);
        tracing::debug!("run resumed");
    }

    /// Flip between paused and running; returns the new paused state.
    pub fn toggle(&self) -> bool {
        let mut paused = false;
        self.update(|state| {
            state.paused = !state.paused;
            paused = state.paused;
        });
        tracing::debug!(paused, "pause toggled");
        paused
    }

    /// Stop the run at its next suspension point. Also releases a paused run.
    pub fn cancel(&self) {
        self.update(|state| state.cancelled = true);
        tracing::debug!("run cancelled");
    }

    pub fn is_paused(&self) -> bool {
        self.lock().paused
    }

    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    /// Block while paused. Returns the guard so the caller can keep waiting.
    fn hold<'a>(
        &'a self,
        mut state: MutexGuard<'a, GateState>,
    ) -> Result<MutexGuard<'a, GateState>> {
        while state.paused && !state.cancelled {
            state = self
                .shared
                .changed
                .wait(state)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
        if state.cancelled {
            return Err(VizError::Interrupted);
        }
        Ok(state)
    }
}

impl Pacer for PauseGate {
    fn step(&self, delay: Duration) -> Result<()> {
        let mut state = self.hold(self.lock())?;

        let deadline = Clock::now() + delay;
        loop {
            let now = Clock::now();
            if now >= deadline {
                return Ok(());
            }
            let (next, _) = self
                .shared
                .changed
                .wait_timeout(state, deadline - now)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            // a pause requested mid-delay holds here; the delay resumes afterwards
            state = self.hold(next)?;
        }
    }
}

/// Publishes snapshots and waits out the step that follows each one.
pub struct Stepper<'a, T: ?Sized> {
    observer: &'a mut dyn Observer<T>,
    pacer: &'a dyn Pacer,
    delay: Duration,
    frames: usize,
}

impl<'a, T: ?Sized> Stepper<'a, T> {
    pub fn new(
        observer: &'a mut dyn Observer<T>,
        pacer: &'a dyn Pacer,
        delay: Duration,
    ) -> Self {
        Self {
            observer,
            pacer,
            delay,
            frames: 0,
        }
    }

    /// Publish `snapshot`, then suspend for one step.
    pub fn frame(&mut self, snapshot: &T) -> Result<()> {
        self.publish(snapshot);
        self.pacer.step(self.delay)
    }

    /// Publish without suspending (final frames).
    pub fn publish(&mut self, snapshot: &T) {
        self.observer.publish(snapshot);
        self.frames += 1;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Number of snapshots published so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

/// Validate an inter-step delay against the slider bounds.
pub fn checked_delay(ms: u64) -> Result<Duration> {
    crate::ensure_range!("delay (ms)", ms, MIN_DELAY_MS..=MAX_DELAY_MS);
    Ok(Duration::from_millis(ms))
}
