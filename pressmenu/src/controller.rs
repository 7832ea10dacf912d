// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring from gesture updates to the menu and the host.

use core::time::Duration;

use kurbo::Point;
use pressmenu_gesture::{
    FeedbackSignal, ForceCapability, ForcePressRecognizer, GestureHost, GesturePhase,
    GestureUpdate, RecognizerOutcome,
};
use pressmenu_menu::MenuListener;

use crate::presentation::{Presentation, PresentationConfig, SetupError};

/// Receiver for controller output aimed at the main content.
///
/// Every method has an empty default, so hosts implement only what they draw
/// or play.
pub trait ControllerHost {
    /// The gesture moved to `phase`.
    fn phase_changed(&mut self, phase: GesturePhase) {
        let _ = phase;
    }

    /// The scales or menu visibility changed.
    fn presentation_changed(&mut self, presentation: &Presentation) {
        let _ = presentation;
    }

    /// A sound or haptic moment was reached.
    fn feedback(&mut self, signal: FeedbackSignal) {
        let _ = signal;
    }
}

/// Ignores all output.
impl ControllerHost for () {}

/// Owns a [`ForcePressRecognizer`] and translates its updates into
/// [`MenuListener`] calls and [`Presentation`]s.
///
/// For each gesture update the controller, in order:
///
/// 1. recomputes the presentation and reports it if it changed,
/// 2. calls [`MenuListener::begin`] when the outcome is `Began`,
/// 3. calls [`MenuListener::did_scroll`] with the vertical translation while
///    scrolling,
/// 4. calls [`MenuListener::end`] with `false` when the gesture ended and
///    `true` when it failed,
/// 5. calls [`MenuListener::did_select`] while exiting normally,
/// 6. reports a phase change to the host.
#[derive(Debug)]
pub struct ForceMenuController<M, H = ()> {
    recognizer: ForcePressRecognizer,
    config: PresentationConfig,
    menu: M,
    host: H,
    enabled: bool,
    phase: GesturePhase,
    presentation: Presentation,
}

/// Bridges recognizer output to the menu and host for one input call.
struct Router<'a, M, H> {
    config: &'a PresentationConfig,
    menu: &'a mut M,
    host: &'a mut H,
    phase: &'a mut GesturePhase,
    presentation: &'a mut Presentation,
}

impl<M: MenuListener, H: ControllerHost> GestureHost for Router<'_, M, H> {
    fn changed(&mut self, update: &GestureUpdate) {
        let presentation = Presentation::from_entry(update.entry_factor, self.config.menu_scale);
        if presentation != *self.presentation {
            *self.presentation = presentation;
            self.host.presentation_changed(&presentation);
        }

        if update.outcome == RecognizerOutcome::Began {
            self.menu.begin();
        }
        if update.phase == GesturePhase::Scroll {
            self.menu.did_scroll(update.translation.y);
        }
        match update.outcome {
            RecognizerOutcome::Ended => self.menu.end(false),
            RecognizerOutcome::Failed => self.menu.end(true),
            _ => {}
        }
        if update.outcome != RecognizerOutcome::Failed && update.phase == GesturePhase::Exit {
            self.menu.did_select();
        }

        if update.phase != *self.phase {
            *self.phase = update.phase;
            self.host.phase_changed(update.phase);
        }
    }

    fn feedback(&mut self, signal: FeedbackSignal) {
        self.host.feedback(signal);
    }
}

impl<M: MenuListener, H: ControllerHost> ForceMenuController<M, H> {
    /// Creates an enabled controller.
    pub fn new(
        config: PresentationConfig,
        capability: ForceCapability,
        menu: M,
        host: H,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let recognizer = ForcePressRecognizer::new(config.gesture, capability)?;
        Ok(Self {
            recognizer,
            presentation: Presentation::from_entry(0.0, config.menu_scale),
            config,
            menu,
            host,
            enabled: true,
            phase: GesturePhase::None,
        })
    }

    /// The underlying recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &ForcePressRecognizer {
        &self.recognizer
    }

    /// The configuration supplied at construction.
    #[must_use]
    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// The menu listener.
    #[must_use]
    pub fn menu(&self) -> &M {
        &self.menu
    }

    /// The menu listener, mutably.
    pub fn menu_mut(&mut self) -> &mut M {
        &mut self.menu
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the controller, returning the menu and the host.
    pub fn into_parts(self) -> (M, H) {
        (self.menu, self.host)
    }

    /// Current presentation.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.recognizer.phase()
    }

    /// Returns `true` if touch input is being recognized.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables recognition.
    ///
    /// Disabling while a gesture is in progress cancels it.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        log::debug!("recognition enabled: {enabled}");
        if !enabled {
            let (recognizer, mut router) = self.split();
            recognizer.touch_cancelled(&mut router);
        }
        self.enabled = enabled;
    }

    /// Returns `true` while the host should call [`advance`](Self::advance)
    /// every frame.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.recognizer.needs_frames()
    }

    /// Earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.recognizer.next_deadline()
    }

    /// See [`ForcePressRecognizer::touch_began`].
    pub fn touch_began(&mut self, count: usize, position: Point, now: Duration) {
        if !self.enabled {
            log::trace!("touch ignored while disabled");
            return;
        }
        let (recognizer, mut router) = self.split();
        recognizer.touch_began(count, position, now, &mut router);
    }

    /// See [`ForcePressRecognizer::touch_moved`].
    pub fn touch_moved(&mut self, position: Point, force: f64, now: Duration) {
        if !self.enabled {
            return;
        }
        let (recognizer, mut router) = self.split();
        recognizer.touch_moved(position, force, now, &mut router);
    }

    /// See [`ForcePressRecognizer::touch_ended`].
    pub fn touch_ended(&mut self, now: Duration) {
        if !self.enabled {
            return;
        }
        let (recognizer, mut router) = self.split();
        recognizer.touch_ended(now, &mut router);
    }

    /// See [`ForcePressRecognizer::touch_cancelled`].
    pub fn touch_cancelled(&mut self) {
        let (recognizer, mut router) = self.split();
        recognizer.touch_cancelled(&mut router);
    }

    /// See [`ForcePressRecognizer::advance`].
    pub fn advance(&mut self, now: Duration) {
        let (recognizer, mut router) = self.split();
        recognizer.advance(now, &mut router);
    }

    fn split(&mut self) -> (&mut ForcePressRecognizer, Router<'_, M, H>) {
        let Self {
            recognizer,
            config,
            menu,
            host,
            phase,
            presentation,
            ..
        } = self;
        let router = Router {
            config,
            menu,
            host,
            phase,
            presentation,
        };
        (recognizer, router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn invalid_menu_scale_is_rejected() {
        let config = PresentationConfig::default().with_menu_scale(1.5);
        let err = ForceMenuController::new(config, ForceCapability::Available, (), ())
            .err()
            .unwrap();
        assert_eq!(err, SetupError::MenuScale { value: 1.5 });
    }

    #[test]
    fn disabled_controller_ignores_touches() {
        let mut controller = ForceMenuController::new(
            PresentationConfig::default(),
            ForceCapability::Unavailable,
            (),
            (),
        )
        .unwrap();
        controller.set_enabled(false);
        controller.touch_began(1, Point::ZERO, ms(0));
        controller.advance(ms(1000));
        assert_eq!(controller.phase(), GesturePhase::None);
        assert_eq!(controller.next_deadline(), None);
    }
}
