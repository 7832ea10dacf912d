// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture phase state machine.

use core::time::Duration;

use kurbo::{Point, Vec2};
use pressmenu_animation::{AnimatableScalar, Easing, ScalarObserver, easing};
use pressmenu_timing::TimerQueue;

use crate::config::{ConfigError, ForceCapability, GestureConfig};
use crate::touch::TouchTracker;
use crate::types::{
    FeedbackSignal, GestureHost, GesturePhase, GestureUpdate, RecognizerOutcome, TouchSample,
};

/// What to do when the entry-factor animation lands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EntryStep {
    /// Entry reached 1.0: start scrolling.
    Commit,
    /// Exit reached 0.0: report the end of the gesture.
    Finish,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Wake {
    LongPress,
}

/// Collects scalar notifications so they can be applied after the scalar call
/// returns.
#[derive(Default)]
struct EntryEvents {
    changed: bool,
    completed: Option<EntryStep>,
}

impl ScalarObserver<EntryStep> for EntryEvents {
    fn value_changed(&mut self, _value: f64) {
        self.changed = true;
    }

    fn completed(&mut self, token: EntryStep) {
        self.completed = Some(token);
    }
}

/// Recognizes "press to reveal, drag to select, release to confirm".
///
/// The recognizer consumes abstract touch input and host frame ticks, owns the
/// entry-factor animation, and reports every observable change to a
/// [`GestureHost`]. It never reads a clock: time arrives as `now` arguments
/// measured from the host's monotonic epoch, and the host calls
/// [`advance`](Self::advance) on every display frame while
/// [`needs_frames`](Self::needs_frames) is `true`, and again once
/// [`next_deadline`](Self::next_deadline) passes.
///
/// See the crate documentation for the full phase diagram.
#[derive(Debug)]
pub struct ForcePressRecognizer {
    config: GestureConfig,
    capability: ForceCapability,
    phase: GesturePhase,
    outcome: RecognizerOutcome,
    entry: AnimatableScalar<EntryStep>,
    translation: Vec2,
    touches: TouchTracker,
    timers: TimerQueue<Wake>,
}

impl ForcePressRecognizer {
    /// Creates an idle recognizer.
    pub fn new(config: GestureConfig, capability: ForceCapability) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            capability,
            phase: GesturePhase::None,
            outcome: RecognizerOutcome::Possible,
            entry: AnimatableScalar::new(0.0),
            translation: Vec2::ZERO,
            touches: TouchTracker::default(),
            timers: TimerQueue::new(),
        })
    }

    /// The configuration supplied at construction.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The force capability supplied at construction.
    #[must_use]
    pub fn capability(&self) -> ForceCapability {
        self.capability
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Current recognizer disposition.
    #[must_use]
    pub fn outcome(&self) -> RecognizerOutcome {
        self.outcome
    }

    /// Entry progress in `[0, 1]`.
    #[must_use]
    pub fn entry_factor(&self) -> f64 {
        self.entry.value()
    }

    /// Drag accumulated while scrolling.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Number of contacts currently down.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.active()
    }

    /// Snapshot of the observable state.
    #[must_use]
    pub fn update(&self) -> GestureUpdate {
        GestureUpdate {
            phase: self.phase,
            outcome: self.outcome,
            entry_factor: self.entry.value(),
            translation: self.translation,
        }
    }

    /// Returns `true` while the entry factor is animating and the host should
    /// call [`advance`](Self::advance) every frame.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.entry.is_animating()
    }

    /// Earliest pending timer deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// `count` new contacts landed.
    ///
    /// While idle only a single contact may start an attempt; any other touch
    /// fails the gesture immediately. Once a phase is live, extra contacts are
    /// only counted so the gesture ends when the last one lifts.
    pub fn touch_began(
        &mut self,
        count: usize,
        position: Point,
        now: Duration,
        host: &mut impl GestureHost,
    ) {
        if count == 0 {
            log::trace!("touch began with no contacts, ignored");
            return;
        }
        if self.phase != GesturePhase::None {
            if self.touches.is_touching() {
                self.touches.add_contacts(count);
            } else {
                self.touches.begin(position);
                self.touches.add_contacts(count - 1);
            }
            log::trace!(
                "{count} contact(s) joined during {:?}, {} active",
                self.phase,
                self.touches.active()
            );
            return;
        }
        if count != 1 || self.touches.is_touching() {
            log::debug!("multi-touch while idle, gesture failed");
            self.fail(host);
            return;
        }

        self.timers.clear();
        self.touches.begin(position);
        self.translation = Vec2::ZERO;
        self.outcome = RecognizerOutcome::Possible;
        if self.capability == ForceCapability::Unavailable
            && self.config.use_long_tap_if_no_force_touch
        {
            let deadline = now.saturating_add(self.config.start_long_touch_delay);
            self.timers.schedule(Wake::LongPress, deadline);
            log::trace!("long press scheduled for {deadline:?}");
        }
    }

    /// The tracked contact moved, with the given pressure reading.
    pub fn touch_moved(
        &mut self,
        position: Point,
        force: f64,
        now: Duration,
        host: &mut impl GestureHost,
    ) {
        let Some(delta) = self.touches.update(position) else {
            log::trace!("move without an active touch, ignored");
            return;
        };

        if self.phase == GesturePhase::Scroll {
            self.translation += delta;
            self.outcome = RecognizerOutcome::Changed;
            self.emit(host);
            return;
        }

        if let Some(slop) = self.config.long_touch_slop {
            let strayed = self
                .touches
                .total_offset(position)
                .is_some_and(|offset| offset.hypot() > slop);
            if strayed && self.timers.cancel_key(&Wake::LongPress) > 0 {
                log::debug!("touch moved beyond {slop}, long press cancelled");
            }
        }

        if self.capability != ForceCapability::Available
            || force <= self.config.touch_force_for_start
        {
            return;
        }
        if force < self.config.touch_force_for_enter {
            // Pressure only drives the factor until the gesture commits.
            if self.phase == GesturePhase::None {
                self.timers.cancel_key(&Wake::LongPress);
                let mut events = EntryEvents::default();
                self.entry
                    .set(self.config.partial_entry(force), &mut events);
                self.outcome = RecognizerOutcome::Began;
                self.emit(host);
            }
        } else if self.phase != GesturePhase::Enter {
            self.enter(
                FeedbackSignal::Confirm,
                self.config.force_step_animation_time,
                easing::cubic_in,
                now,
                host,
            );
        }
    }

    /// Convenience for hosts that already package readings as [`TouchSample`]s.
    pub fn touch_sample(&mut self, sample: &TouchSample, host: &mut impl GestureHost) {
        self.touch_moved(sample.position, sample.force, sample.timestamp, host);
    }

    /// One contact lifted.
    ///
    /// When the last contact lifts, a live gesture animates out and reports
    /// [`RecognizerOutcome::Ended`] once the exit animation lands. A gesture
    /// that never qualified fails immediately.
    pub fn touch_ended(&mut self, now: Duration, host: &mut impl GestureHost) {
        if !self.touches.is_touching() {
            log::trace!("release without an active touch, ignored");
            return;
        }
        if self.touches.lift() > 0 {
            return;
        }
        self.timers.clear();

        if self.phase == GesturePhase::None {
            log::debug!("released before qualifying, gesture failed");
            self.fail(host);
            return;
        }

        self.set_phase(GesturePhase::Exit, host);
        let mut events = EntryEvents::default();
        self.entry.animate(
            0.0,
            self.config.exit_time,
            easing::cubic_out,
            now,
            EntryStep::Finish,
            &mut events,
        );
        self.apply(events, host);
    }

    /// The system interrupted the touch sequence.
    ///
    /// Everything stops at once: no exit animation, the entry factor snaps to
    /// zero, and the gesture fails.
    pub fn touch_cancelled(&mut self, host: &mut impl GestureHost) {
        if self.phase == GesturePhase::None
            && !self.touches.is_touching()
            && self.outcome != RecognizerOutcome::Began
        {
            log::trace!("cancel with nothing tracked, ignored");
            return;
        }
        log::debug!("touches cancelled during {:?}", self.phase);
        self.fail(host);
    }

    /// Drives the entry animation and fires expired timers for the frame at
    /// `now`.
    pub fn advance(&mut self, now: Duration, host: &mut impl GestureHost) {
        let mut events = EntryEvents::default();
        self.entry.advance(now, &mut events);
        self.apply(events, host);

        while let Some(wake) = self.timers.pop_expired(now) {
            match wake {
                Wake::LongPress => self.long_press_fired(now, host),
            }
        }
    }

    /// Returns to idle without notifying anyone.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.touches.reset();
        self.entry.set(0.0, &mut EntryEvents::default());
        self.phase = GesturePhase::None;
        self.outcome = RecognizerOutcome::Possible;
        self.translation = Vec2::ZERO;
    }

    fn long_press_fired(&mut self, now: Duration, host: &mut impl GestureHost) {
        if self.phase != GesturePhase::None || !self.touches.is_touching() {
            return;
        }
        self.enter(
            FeedbackSignal::Tap,
            self.config.enter_long_touch_time,
            easing::cubic_out,
            now,
            host,
        );
    }

    fn enter(
        &mut self,
        signal: FeedbackSignal,
        duration: Duration,
        curve: Easing,
        now: Duration,
        host: &mut impl GestureHost,
    ) {
        self.timers.cancel_key(&Wake::LongPress);
        self.phase = GesturePhase::Enter;
        self.outcome = RecognizerOutcome::Began;
        log::debug!("phase -> Enter ({signal:?})");
        self.emit(host);
        host.feedback(signal);

        let mut events = EntryEvents::default();
        self.entry
            .animate(1.0, duration, curve, now, EntryStep::Commit, &mut events);
        self.apply(events, host);
    }

    /// Disqualifies the current attempt: the transient `Exit` is silent and the
    /// only notification is the failure itself.
    fn fail(&mut self, host: &mut impl GestureHost) {
        let had_begun =
            self.phase != GesturePhase::None || self.outcome == RecognizerOutcome::Began;
        self.timers.clear();
        self.touches.reset();
        self.phase = GesturePhase::Exit;
        self.entry.set(0.0, &mut EntryEvents::default());
        self.phase = GesturePhase::None;
        self.outcome = RecognizerOutcome::Failed;
        log::debug!("gesture failed");
        self.emit(host);
        if had_begun {
            host.feedback(FeedbackSignal::Reject);
        }
    }

    fn apply(&mut self, events: EntryEvents, host: &mut impl GestureHost) {
        if events.changed {
            self.notify_changed(host);
        }
        match events.completed {
            Some(EntryStep::Commit) => self.set_phase(GesturePhase::Scroll, host),
            Some(EntryStep::Finish) => {
                self.phase = GesturePhase::None;
                self.outcome = RecognizerOutcome::Ended;
                log::debug!("gesture ended");
                self.emit(host);
            }
            None => {}
        }
    }

    fn set_phase(&mut self, phase: GesturePhase, host: &mut impl GestureHost) {
        log::debug!("phase {:?} -> {phase:?}", self.phase);
        self.phase = phase;
        self.notify_changed(host);
    }

    /// An idle machine does not chatter.
    fn notify_changed(&mut self, host: &mut impl GestureHost) {
        if self.phase != GesturePhase::None {
            self.outcome = RecognizerOutcome::Changed;
            self.emit(host);
        }
    }

    fn emit(&self, host: &mut impl GestureHost) {
        let update = self.update();
        log::trace!(
            "{:?}/{:?} entry={:.3} translation={:?}",
            update.phase,
            update.outcome,
            update.entry_factor,
            update.translation
        );
        host.changed(&update);
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Host {
        updates: Vec<GestureUpdate>,
        feedback: Vec<FeedbackSignal>,
    }

    impl GestureHost for Host {
        fn changed(&mut self, update: &GestureUpdate) {
            self.updates.push(*update);
        }

        fn feedback(&mut self, signal: FeedbackSignal) {
            self.feedback.push(signal);
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn force_recognizer() -> ForcePressRecognizer {
        ForcePressRecognizer::new(GestureConfig::default(), ForceCapability::Available).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GestureConfig::default().with_force_thresholds(3.0, 1.0);
        let err = ForcePressRecognizer::new(config, ForceCapability::Available).unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOrder { .. }));
    }

    #[test]
    fn partial_force_tracks_entry_without_phase_change() {
        let mut rec = force_recognizer();
        let mut host = Host::default();
        rec.touch_began(1, Point::ZERO, ms(0), &mut host);
        rec.touch_moved(Point::ZERO, 2.0, ms(10), &mut host);

        assert_eq!(rec.phase(), GesturePhase::None);
        assert_eq!(rec.outcome(), RecognizerOutcome::Began);
        assert_eq!(rec.entry_factor(), 0.5);
        assert_eq!(host.updates.len(), 1);
        assert_eq!(host.updates[0].entry_factor, 0.5);
    }

    #[test]
    fn force_below_start_is_ignored() {
        let mut rec = force_recognizer();
        let mut host = Host::default();
        rec.touch_began(1, Point::ZERO, ms(0), &mut host);
        rec.touch_moved(Point::ZERO, 1.0, ms(10), &mut host);

        assert_eq!(rec.outcome(), RecognizerOutcome::Possible);
        assert!(host.updates.is_empty());
    }

    #[test]
    fn enter_threshold_commits_once() {
        let mut rec = force_recognizer();
        let mut host = Host::default();
        rec.touch_began(1, Point::ZERO, ms(0), &mut host);
        rec.touch_moved(Point::ZERO, 3.0, ms(10), &mut host);
        rec.touch_moved(Point::ZERO, 3.5, ms(20), &mut host);
        rec.touch_moved(Point::ZERO, 4.0, ms(30), &mut host);

        assert_eq!(rec.phase(), GesturePhase::Enter);
        assert_eq!(host.feedback, [FeedbackSignal::Confirm]);
        let began = host
            .updates
            .iter()
            .filter(|u| u.outcome == RecognizerOutcome::Began)
            .count();
        assert_eq!(began, 1);
    }

    #[test]
    fn easing_off_after_enter_does_not_roll_back() {
        let mut rec = force_recognizer();
        let mut host = Host::default();
        rec.touch_began(1, Point::ZERO, ms(0), &mut host);
        rec.touch_moved(Point::ZERO, 3.0, ms(0), &mut host);
        rec.touch_moved(Point::ZERO, 1.5, ms(10), &mut host);
        assert!(rec.needs_frames());

        rec.advance(ms(50), &mut host);
        assert_eq!(rec.phase(), GesturePhase::Scroll);
        assert_eq!(rec.entry_factor(), 1.0);
    }

    #[test]
    fn scroll_accumulates_translation() {
        let mut rec = force_recognizer();
        let mut host = Host::default();
        rec.touch_began(1, Point::new(0.0, 100.0), ms(0), &mut host);
        rec.touch_moved(Point::new(0.0, 100.0), 3.0, ms(0), &mut host);
        rec.advance(ms(50), &mut host);
        assert_eq!(rec.phase(), GesturePhase::Scroll);

        rec.touch_moved(Point::new(0.0, 90.0), 3.0, ms(60), &mut host);
        rec.touch_moved(Point::new(2.0, 70.0), 0.5, ms(70), &mut host);

        assert_eq!(rec.translation(), Vec2::new(2.0, -30.0));
        assert_eq!(rec.outcome(), RecognizerOutcome::Changed);
        assert_eq!(rec.entry_factor(), 1.0);
    }

    #[test]
    fn cancel_mid_enter_snaps_to_zero() {
        let mut rec = force_recognizer();
        let mut host = Host::default();
        rec.touch_began(1, Point::ZERO, ms(0), &mut host);
        rec.touch_moved(Point::ZERO, 3.0, ms(0), &mut host);
        rec.advance(ms(25), &mut host);
        assert!(rec.entry_factor() > 0.0);

        rec.touch_cancelled(&mut host);
        assert_eq!(rec.phase(), GesturePhase::None);
        assert_eq!(rec.outcome(), RecognizerOutcome::Failed);
        assert_eq!(rec.entry_factor(), 0.0);
        assert_eq!(rec.active_touches(), 0);
        assert!(!rec.needs_frames());
        assert_eq!(host.feedback.last(), Some(&FeedbackSignal::Reject));

        let last = host.updates.last().unwrap();
        assert_eq!(last.outcome, RecognizerOutcome::Failed);
        assert!(
            !host
                .updates
                .iter()
                .any(|u| u.phase == GesturePhase::Exit)
        );
    }

    #[test]
    fn stray_input_is_ignored() {
        let mut rec = force_recognizer();
        let mut host = Host::default();
        rec.touch_moved(Point::ZERO, 5.0, ms(0), &mut host);
        rec.touch_ended(ms(0), &mut host);
        rec.touch_cancelled(&mut host);
        rec.advance(ms(1000), &mut host);

        assert!(host.updates.is_empty());
        assert_eq!(rec.phase(), GesturePhase::None);
        assert_eq!(rec.outcome(), RecognizerOutcome::Possible);
    }

    #[test]
    fn reset_is_silent() {
        let mut rec = force_recognizer();
        let mut host = Host::default();
        rec.touch_began(1, Point::ZERO, ms(0), &mut host);
        rec.touch_moved(Point::ZERO, 3.0, ms(0), &mut host);
        let before = host.updates.len();

        rec.reset();
        rec.advance(ms(100), &mut host);
        assert_eq!(host.updates.len(), before);
        assert_eq!(rec.update().phase, GesturePhase::None);
        assert_eq!(rec.entry_factor(), 0.0);
    }
}
