// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phases, outcomes and the host port a recognizer reports through.

use core::time::Duration;

use kurbo::{Point, Vec2};

/// Committed stage of a press-and-drag interaction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Idle, or the current touch has not qualified yet.
    #[default]
    None,
    /// A threshold was crossed and the entry animation is running.
    Enter,
    /// Committed: vertical drag is tracked and reported.
    Scroll,
    /// The gesture is concluding; the machine returns to `None` afterwards.
    Exit,
}

/// Generic recognizer disposition reported next to the [`GesturePhase`].
///
/// A gesture can be `Failed` while its phase never left `None`, so the two are
/// tracked separately.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecognizerOutcome {
    /// Waiting for the touch to qualify.
    #[default]
    Possible,
    /// The gesture started (force or long press threshold reached).
    Began,
    /// Something observable changed while the gesture is live.
    Changed,
    /// The gesture concluded normally.
    Ended,
    /// The gesture was disqualified or cancelled.
    Failed,
}

/// One touch reading as delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchSample {
    /// Location in the host's view coordinates.
    pub position: Point,
    /// Pressure reading, or `0.0` on hardware without force sensing.
    pub force: f64,
    /// Host time of the reading.
    pub timestamp: Duration,
}

impl TouchSample {
    /// Creates a sample.
    #[must_use]
    pub fn new(position: Point, force: f64, timestamp: Duration) -> Self {
        Self {
            position,
            force,
            timestamp,
        }
    }
}

/// Named feedback moments for sound or haptic playback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FeedbackSignal {
    /// The long press committed to entering.
    Tap,
    /// The force threshold committed to entering.
    Confirm,
    /// A gesture that had begun was disqualified or cancelled.
    Reject,
}

/// Snapshot delivered with every notification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureUpdate {
    /// Phase at the time of the notification.
    pub phase: GesturePhase,
    /// Recognizer disposition at the time of the notification.
    pub outcome: RecognizerOutcome,
    /// Entry progress in `[0, 1]`.
    pub entry_factor: f64,
    /// Drag accumulated since the gesture reached [`GesturePhase::Scroll`].
    pub translation: Vec2,
}

/// Receiver for recognizer output.
///
/// The recognizer borrows the host for the duration of each input call, so
/// implementations can freely mutate their own state.
pub trait GestureHost {
    /// Phase, outcome, or entry factor changed.
    fn changed(&mut self, update: &GestureUpdate);

    /// A feedback moment was reached.
    fn feedback(&mut self, signal: FeedbackSignal) {
        let _ = signal;
    }
}

/// Ignores all output.
impl GestureHost for () {
    fn changed(&mut self, _update: &GestureUpdate) {}
}

impl<F: FnMut(&GestureUpdate)> GestureHost for F {
    fn changed(&mut self, update: &GestureUpdate) {
        self(update);
    }
}
