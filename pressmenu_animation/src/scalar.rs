// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A floating-point value that can jump or animate to a new target.

use core::marker::PhantomData;
use core::time::Duration;

use crate::driver::{AnimationDriver, AnimationSink, AnimationSpec};
use crate::easing::Easing;

/// Receives change and completion notifications from an [`AnimatableScalar`].
///
/// `C` is the completion token the caller handed to
/// [`AnimatableScalar::animate`]; it comes back through [`completed`] only when
/// that animation runs to its end.
///
/// [`completed`]: ScalarObserver::completed
pub trait ScalarObserver<C> {
    /// The current value changed.
    fn value_changed(&mut self, value: f64);

    /// The animation started with `token` reached its target.
    fn completed(&mut self, token: C);
}

/// Discards every notification.
impl<C> ScalarObserver<C> for () {
    fn value_changed(&mut self, _value: f64) {}

    fn completed(&mut self, _token: C) {}
}

/// A scalar with at most one in-flight animation.
///
/// Starting a new animation, calling [`set`](Self::set), or calling
/// [`cancel`](Self::cancel) always supersedes the running one; the superseded
/// token is dropped without being reported.
///
/// ```
/// use core::time::Duration;
/// use pressmenu_animation::{AnimatableScalar, easing};
///
/// let mut opacity = AnimatableScalar::<u32>::new(0.0);
/// let mut done = Vec::new();
/// let mut observer = (|_: f64| {}, |token: u32| done.push(token));
///
/// let fade = Duration::from_millis(200);
/// opacity.animate(1.0, fade, easing::cubic_out, Duration::ZERO, 7, &mut observer);
/// opacity.advance(Duration::from_millis(100), &mut observer);
/// assert!(opacity.value() > 0.5);
/// opacity.advance(Duration::from_millis(200), &mut observer);
/// assert_eq!(opacity.value(), 1.0);
///
/// drop(observer);
/// assert_eq!(done, [7]);
/// ```
#[derive(Clone, Debug)]
pub struct AnimatableScalar<C = ()> {
    current: f64,
    target: f64,
    driver: AnimationDriver,
    pending: Option<C>,
}

impl<C, V, D> ScalarObserver<C> for (V, D)
where
    V: FnMut(f64),
    D: FnMut(C),
{
    fn value_changed(&mut self, value: f64) {
        (self.0)(value);
    }

    fn completed(&mut self, token: C) {
        (self.1)(token);
    }
}

/// Observer for cancellation, which never ticks or completes a token.
struct Discard;

impl<C> ScalarObserver<C> for Discard {
    fn value_changed(&mut self, _value: f64) {}

    fn completed(&mut self, _token: C) {}
}

/// Bridges driver output into the scalar's state and observer.
struct Relay<'a, C, O> {
    current: &'a mut f64,
    observer: &'a mut O,
    outcome: Option<bool>,
    token: PhantomData<fn(C)>,
}

impl<'a, C, O: ScalarObserver<C>> Relay<'a, C, O> {
    fn new(current: &'a mut f64, observer: &'a mut O) -> Self {
        Self {
            current,
            observer,
            outcome: None,
            token: PhantomData,
        }
    }
}

impl<C, O: ScalarObserver<C>> AnimationSink for Relay<'_, C, O> {
    fn on_tick(&mut self, value: f64) {
        *self.current = value;
        <O as ScalarObserver<C>>::value_changed(self.observer, value);
    }

    fn on_completed(&mut self, finished: bool) {
        self.outcome = Some(finished);
    }
}

impl<C> Default for AnimatableScalar<C> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<C> AnimatableScalar<C> {
    /// Creates a resting scalar holding `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            current: value,
            target: value,
            driver: AnimationDriver::new(),
            pending: None,
        }
    }

    /// The value as of the most recent tick.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.current
    }

    /// The last explicitly requested value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Jumps to `value`, cancelling any running animation.
    ///
    /// The observer hears about the change only if the value actually moved.
    pub fn set(&mut self, value: f64, observer: &mut impl ScalarObserver<C>) {
        self.cancel();
        self.target = value;
        if self.current != value {
            self.current = value;
            observer.value_changed(value);
        }
    }

    /// Animates from the current value to `to`.
    ///
    /// Every tick updates the value and notifies the observer. When the
    /// animation reaches `to`, `token` is handed back through
    /// [`ScalarObserver::completed`]. If it is superseded or cancelled first,
    /// `token` is dropped instead.
    pub fn animate(
        &mut self,
        to: f64,
        duration: Duration,
        easing: Easing,
        now: Duration,
        token: C,
        observer: &mut impl ScalarObserver<C>,
    ) {
        self.cancel();
        self.target = to;
        self.pending = Some(token);
        let spec = AnimationSpec::new(self.current, to, duration, easing);
        let mut relay = Relay::<C, _>::new(&mut self.current, &mut *observer);
        self.driver.start(spec, now, &mut relay);
        let outcome = relay.outcome;
        self.settle(outcome, observer);
    }

    /// Either animates to `value` or jumps there.
    ///
    /// With `animation == None` the value is [`set`](Self::set) and `token` is
    /// reported as completed right away.
    pub fn change(
        &mut self,
        value: f64,
        animation: Option<(Duration, Easing)>,
        now: Duration,
        token: C,
        observer: &mut impl ScalarObserver<C>,
    ) {
        match animation {
            Some((duration, easing)) => self.animate(value, duration, easing, now, token, observer),
            None => {
                self.set(value, observer);
                observer.completed(token);
            }
        }
    }

    /// Drives the running animation for the frame at `now`.
    pub fn advance(&mut self, now: Duration, observer: &mut impl ScalarObserver<C>) {
        if !self.driver.is_running() {
            return;
        }
        let mut relay = Relay::<C, _>::new(&mut self.current, &mut *observer);
        self.driver.advance(now, &mut relay);
        let outcome = relay.outcome;
        self.settle(outcome, observer);
    }

    /// Stops any running animation where it is.
    ///
    /// The value stays at the last delivered tick and the target follows it,
    /// so a resting scalar always has `value() == target()`.
    pub fn cancel(&mut self) {
        let mut discard = Discard;
        let mut relay = Relay::<C, _>::new(&mut self.current, &mut discard);
        self.driver.cancel(&mut relay);
        let cancelled = relay.outcome.is_some();
        if cancelled {
            self.target = self.current;
        }
        self.pending = None;
    }

    fn settle(&mut self, outcome: Option<bool>, observer: &mut impl ScalarObserver<C>) {
        let Some(finished) = outcome else {
            return;
        };
        if let Some(token) = self.pending.take().filter(|_| finished) {
            observer.completed(token);
        }
    }
}
