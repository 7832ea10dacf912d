// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing and threshold configuration.

use core::fmt;
use core::time::Duration;

/// Whether the input device reports touch pressure.
///
/// The host determines this once, when it creates the recognizer, and it picks
/// the entry strategy: force thresholds when pressure is available, the long
/// press fallback otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForceCapability {
    /// Touches carry a meaningful force value.
    Available,
    /// Force is always reported as zero.
    #[default]
    Unavailable,
}

/// Thresholds and durations that drive phase transitions.
///
/// The defaults match a phone-sized touch surface:
///
/// | field | default |
/// |-------|---------|
/// | `start_long_touch_delay` | 300 ms |
/// | `enter_long_touch_time` | 400 ms |
/// | `force_step_animation_time` | 50 ms |
/// | `exit_time` | 200 ms |
/// | `touch_force_for_start` | 1.0 |
/// | `touch_force_for_enter` | 3.0 |
/// | `use_long_tap_if_no_force_touch` | `true` |
/// | `long_touch_slop` | `None` |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// How long a touch must rest before the long press enters.
    pub start_long_touch_delay: Duration,
    /// Length of the entry animation started by a long press.
    pub enter_long_touch_time: Duration,
    /// Length of the entry animation started by crossing the force threshold.
    pub force_step_animation_time: Duration,
    /// Length of the exit animation after release.
    pub exit_time: Duration,
    /// Force above which the entry factor starts tracking pressure.
    pub touch_force_for_start: f64,
    /// Force at which the gesture commits to entering.
    pub touch_force_for_enter: f64,
    /// Fall back to a long press on hardware without pressure sensing.
    pub use_long_tap_if_no_force_touch: bool,
    /// Movement radius that disqualifies a pending long press.
    ///
    /// `None` lets the finger wander freely until the long press fires.
    pub long_touch_slop: Option<f64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            start_long_touch_delay: Duration::from_millis(300),
            enter_long_touch_time: Duration::from_millis(400),
            force_step_animation_time: Duration::from_millis(50),
            exit_time: Duration::from_millis(200),
            touch_force_for_start: 1.0,
            touch_force_for_enter: 3.0,
            use_long_tap_if_no_force_touch: true,
            long_touch_slop: None,
        }
    }
}

impl GestureConfig {
    /// Sets the long press delay.
    #[must_use]
    pub fn with_start_long_touch_delay(mut self, delay: Duration) -> Self {
        self.start_long_touch_delay = delay;
        self
    }

    /// Sets the long press entry animation length.
    #[must_use]
    pub fn with_enter_long_touch_time(mut self, time: Duration) -> Self {
        self.enter_long_touch_time = time;
        self
    }

    /// Sets the force entry animation length.
    #[must_use]
    pub fn with_force_step_animation_time(mut self, time: Duration) -> Self {
        self.force_step_animation_time = time;
        self
    }

    /// Sets the exit animation length.
    #[must_use]
    pub fn with_exit_time(mut self, time: Duration) -> Self {
        self.exit_time = time;
        self
    }

    /// Sets both force thresholds.
    #[must_use]
    pub fn with_force_thresholds(mut self, start: f64, enter: f64) -> Self {
        self.touch_force_for_start = start;
        self.touch_force_for_enter = enter;
        self
    }

    /// Enables or disables the long press fallback.
    #[must_use]
    pub fn with_long_tap_fallback(mut self, enabled: bool) -> Self {
        self.use_long_tap_if_no_force_touch = enabled;
        self
    }

    /// Sets the long press movement tolerance.
    #[must_use]
    pub fn with_long_touch_slop(mut self, slop: Option<f64>) -> Self {
        self.long_touch_slop = slop;
        self
    }

    /// Checks that the thresholds describe a usable gesture.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let start = self.touch_force_for_start;
        let enter = self.touch_force_for_enter;
        if !start.is_finite() || start < 0.0 {
            return Err(ConfigError::InvalidForce { value: start });
        }
        if !enter.is_finite() || enter < 0.0 {
            return Err(ConfigError::InvalidForce { value: enter });
        }
        if enter <= start {
            return Err(ConfigError::ThresholdOrder { start, enter });
        }
        if let Some(slop) = self.long_touch_slop {
            if !slop.is_finite() || slop <= 0.0 {
                return Err(ConfigError::InvalidSlop { value: slop });
            }
        }
        Ok(())
    }

    /// Maps a force reading between the two thresholds onto `[0, 1)`.
    pub(crate) fn partial_entry(&self, force: f64) -> f64 {
        let span = self.touch_force_for_enter - self.touch_force_for_start;
        ((force - self.touch_force_for_start) / span).clamp(0.0, 1.0)
    }
}

/// Reasons a [`GestureConfig`] is rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A force threshold is negative, infinite or NaN.
    InvalidForce {
        /// The offending threshold.
        value: f64,
    },
    /// The enter threshold does not lie above the start threshold.
    ThresholdOrder {
        /// `touch_force_for_start`.
        start: f64,
        /// `touch_force_for_enter`.
        enter: f64,
    },
    /// The long press slop is not a positive finite distance.
    InvalidSlop {
        /// The offending radius.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidForce { value } => {
                write!(f, "force threshold {value} is not a finite, non-negative value")
            }
            Self::ThresholdOrder { start, enter } => write!(
                f,
                "enter force {enter} must be greater than start force {start}"
            ),
            Self::InvalidSlop { value } => {
                write!(f, "long touch slop {value} is not a positive distance")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
