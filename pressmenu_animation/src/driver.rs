// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-clocked interpolation task.
//!
//! ## Usage
//!
//! 1) Describe the interpolation with an [`AnimationSpec`].
//! 2) Call [`AnimationDriver::start`] with the current host time.
//! 3) On every display frame, call [`AnimationDriver::advance`]; each call
//!    delivers exactly one interpolated value to the sink.
//! 4) Once the duration has elapsed the driver delivers the final value,
//!    reports `on_completed(true)` and goes idle.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use pressmenu_animation::{AnimationDriver, AnimationSpec, easing};
//!
//! let mut values = Vec::new();
//! let mut finished = None;
//! let mut sink = (|v: f64| values.push(v), |ok: bool| finished = Some(ok));
//!
//! let mut driver = AnimationDriver::new();
//! let spec = AnimationSpec::new(0.0, 10.0, Duration::from_millis(100), easing::linear);
//! driver.start(spec, Duration::ZERO, &mut sink);
//! driver.advance(Duration::from_millis(50), &mut sink);
//! driver.advance(Duration::from_millis(100), &mut sink);
//! assert!(!driver.is_running());
//!
//! drop(sink);
//! assert_eq!(values, [5.0, 10.0]);
//! assert_eq!(finished, Some(true));
//! ```

use core::time::Duration;

use crate::easing::Easing;

/// Receives the output of an [`AnimationDriver`].
pub trait AnimationSink {
    /// Called with the interpolated value for the current frame.
    fn on_tick(&mut self, value: f64);

    /// Called exactly once per started task: `true` when the task ran to its
    /// end, `false` when it was cancelled.
    fn on_completed(&mut self, finished: bool);
}

impl<T, C> AnimationSink for (T, C)
where
    T: FnMut(f64),
    C: FnMut(bool),
{
    fn on_tick(&mut self, value: f64) {
        (self.0)(value);
    }

    fn on_completed(&mut self, finished: bool) {
        (self.1)(finished);
    }
}

/// Parameters of a single interpolation.
#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    /// Value at the start of the task.
    pub from: f64,
    /// Value delivered on the final tick.
    pub to: f64,
    /// Total running time. A zero duration jumps straight to `to`.
    pub duration: Duration,
    /// Shape of the progress curve.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Creates a spec interpolating `from -> to` over `duration`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Returns the interpolated value after `elapsed` time.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * (self.easing)(progress)
    }
}

#[derive(Clone, Copy, Debug)]
struct RunningTask {
    spec: AnimationSpec,
    started_at: Duration,
}

/// Drives one [`AnimationSpec`] against host-supplied timestamps.
///
/// The driver never reads a clock. Time flows in through `now` arguments,
/// measured from any monotonic host epoch.
#[derive(Clone, Debug, Default)]
pub struct AnimationDriver {
    task: Option<RunningTask>,
}

impl AnimationDriver {
    /// Creates an idle driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a task is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Returns the spec of the running task, if any.
    #[must_use]
    pub fn spec(&self) -> Option<&AnimationSpec> {
        self.task.as_ref().map(|task| &task.spec)
    }

    /// Starts interpolating `spec` at time `now`.
    ///
    /// A task that is already running is cancelled first, so its sink sees
    /// `on_completed(false)` before anything from the new task. A zero
    /// duration delivers the final tick and `on_completed(true)` before this
    /// call returns.
    pub fn start(&mut self, spec: AnimationSpec, now: Duration, sink: &mut impl AnimationSink) {
        self.cancel(sink);
        if spec.duration.is_zero() {
            sink.on_tick(spec.to);
            sink.on_completed(true);
            return;
        }
        log::trace!(
            "animation {} -> {} over {:?} started",
            spec.from,
            spec.to,
            spec.duration
        );
        self.task = Some(RunningTask {
            spec,
            started_at: now,
        });
    }

    /// Delivers the value for the frame at `now`.
    ///
    /// Returns `true` if the task is still running afterwards. Calling this on
    /// an idle driver does nothing and returns `false`.
    pub fn advance(&mut self, now: Duration, sink: &mut impl AnimationSink) -> bool {
        let Some(task) = self.task else {
            return false;
        };
        let elapsed = now.saturating_sub(task.started_at);
        if elapsed >= task.spec.duration {
            self.task = None;
            sink.on_tick(task.spec.to);
            sink.on_completed(true);
            false
        } else {
            sink.on_tick(task.spec.value_at(elapsed));
            true
        }
    }

    /// Stops the running task and reports `on_completed(false)`.
    ///
    /// Idle drivers ignore this, so completing and then cancelling never
    /// produces a second completion.
    pub fn cancel(&mut self, sink: &mut impl AnimationSink) {
        if self.task.take().is_some() {
            sink.on_completed(false);
        }
    }
}
