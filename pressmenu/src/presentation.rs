// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual state derived from the entry factor.

use core::fmt;

use kurbo::{Affine, Point, Rect};
use pressmenu_gesture::{ConfigError, GestureConfig};

/// Entry factor above which the menu becomes visible.
pub const MENU_REVEAL_FACTOR: f64 = 0.33;

/// Settings for [`ForceMenuController`](crate::ForceMenuController).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PresentationConfig {
    /// Scale the main content shrinks to, and the menu grows to, at full
    /// entry. Default `0.90`.
    pub menu_scale: f64,
    /// Gesture thresholds and timings.
    pub gesture: GestureConfig,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            menu_scale: 0.90,
            gesture: GestureConfig::default(),
        }
    }
}

impl PresentationConfig {
    /// Sets the menu scale.
    #[must_use]
    pub fn with_menu_scale(mut self, menu_scale: f64) -> Self {
        self.menu_scale = menu_scale;
        self
    }

    /// Sets the gesture configuration.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Checks the menu scale and the gesture configuration.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(self.menu_scale > 0.0 && self.menu_scale <= 1.0) {
            return Err(SetupError::MenuScale {
                value: self.menu_scale,
            });
        }
        self.gesture.validate()?;
        Ok(())
    }

    /// Frame of the menu inside `bounds`: centered, `menu_scale` times the
    /// size.
    #[must_use]
    pub fn menu_frame(&self, bounds: Rect) -> Rect {
        let pad_x = bounds.width() * (1.0 - self.menu_scale) * 0.5;
        let pad_y = bounds.height() * (1.0 - self.menu_scale) * 0.5;
        Rect::new(
            bounds.x0 + pad_x,
            bounds.y0 + pad_y,
            bounds.x1 - pad_x,
            bounds.y1 - pad_y,
        )
    }
}

/// How to draw the main content and the menu for one entry factor.
///
/// As the factor goes from 0 to 1 the main content shrinks from 1 to
/// `menu_scale` while the menu shrinks from `1 / menu_scale` to 1, so the menu
/// appears to come forward out of the content. The menu fades in once the
/// factor passes [`MENU_REVEAL_FACTOR`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Uniform scale of the main content.
    pub main_scale: f64,
    /// Uniform scale of the menu.
    pub menu_scale: f64,
    /// Menu opacity in `[0, 1]`.
    pub menu_alpha: f64,
    /// Whether the menu is drawn at all.
    pub menu_visible: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::from_entry(0.0, PresentationConfig::default().menu_scale)
    }
}

impl Presentation {
    /// Computes the presentation for `entry_factor` in `[0, 1]`.
    ///
    /// ```
    /// use pressmenu::Presentation;
    ///
    /// let rest = Presentation::from_entry(0.0, 0.9);
    /// assert_eq!(rest.main_scale, 1.0);
    /// assert!(!rest.menu_visible);
    ///
    /// let open = Presentation::from_entry(1.0, 0.9);
    /// assert_eq!(open.main_scale, 0.9);
    /// assert!((open.menu_scale - 1.0).abs() < 1e-12);
    /// assert_eq!(open.menu_alpha, 1.0);
    /// ```
    #[must_use]
    pub fn from_entry(entry_factor: f64, menu_scale: f64) -> Self {
        let main_scale = menu_scale + (1.0 - menu_scale) * (1.0 - entry_factor);
        let max_menu_scale = 1.0 / menu_scale;
        let menu_scale = max_menu_scale + entry_factor * (1.0 - max_menu_scale);
        let menu_visible = entry_factor > MENU_REVEAL_FACTOR;
        let menu_alpha = if menu_visible {
            (entry_factor - MENU_REVEAL_FACTOR) / (1.0 - MENU_REVEAL_FACTOR)
        } else {
            0.0
        };
        Self {
            main_scale,
            menu_scale,
            menu_alpha,
            menu_visible,
        }
    }

    /// Transform for the main content, scaling about `center`.
    #[must_use]
    pub fn main_transform(&self, center: Point) -> Affine {
        scale_about(self.main_scale, center)
    }

    /// Transform for the menu, scaling about `center`.
    #[must_use]
    pub fn menu_transform(&self, center: Point) -> Affine {
        scale_about(self.menu_scale, center)
    }
}

fn scale_about(scale: f64, center: Point) -> Affine {
    let offset = center.to_vec2();
    Affine::translate(offset) * Affine::scale(scale) * Affine::translate(-offset)
}

/// Reasons a controller cannot be built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SetupError {
    /// The gesture configuration is invalid.
    Gesture(ConfigError),
    /// `menu_scale` is not in `(0, 1]`.
    MenuScale {
        /// The offending scale.
        value: f64,
    },
}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        Self::Gesture(err)
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gesture(err) => write!(f, "invalid gesture configuration: {err}"),
            Self::MenuScale { value } => write!(f, "menu scale {value} is not in (0, 1]"),
        }
    }
}

impl core::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Gesture(err) => Some(err),
            Self::MenuScale { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_fades_in_past_reveal_factor() {
        let hidden = Presentation::from_entry(0.33, 0.9);
        assert!(!hidden.menu_visible);
        assert_eq!(hidden.menu_alpha, 0.0);

        let half = Presentation::from_entry(0.665, 0.9);
        assert!(half.menu_visible);
        assert!((half.menu_alpha - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scales_meet_at_full_entry() {
        let rest = Presentation::from_entry(0.0, 0.8);
        assert!((rest.menu_scale - 1.25).abs() < 1e-9);
        assert_eq!(rest.main_scale, 1.0);

        let open = Presentation::from_entry(1.0, 0.8);
        assert!((open.main_scale - 0.8).abs() < 1e-9);
        assert!((open.menu_scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn transforms_keep_center_fixed() {
        let open = Presentation::from_entry(1.0, 0.9);
        let center = Point::new(160.0, 240.0);
        let moved = open.main_transform(center) * center;
        assert!((moved - center).hypot() < 1e-9);

        let corner = open.main_transform(center) * Point::ZERO;
        assert!((corner.x - 16.0).abs() < 1e-9);
        assert!((corner.y - 24.0).abs() < 1e-9);
    }

    #[test]
    fn menu_frame_is_centered() {
        let config = PresentationConfig::default();
        let frame = config.menu_frame(Rect::new(0.0, 0.0, 200.0, 400.0));
        assert!((frame.x0 - 10.0).abs() < 1e-9);
        assert!((frame.y0 - 20.0).abs() < 1e-9);
        assert!((frame.x1 - 190.0).abs() < 1e-9);
        assert!((frame.y1 - 380.0).abs() < 1e-9);
    }

    #[test]
    fn validate_checks_scale_and_gesture() {
        assert_eq!(PresentationConfig::default().validate(), Ok(()));

        let zero = PresentationConfig::default().with_menu_scale(0.0);
        assert_eq!(zero.validate(), Err(SetupError::MenuScale { value: 0.0 }));

        let bad_gesture = PresentationConfig::default()
            .with_gesture(GestureConfig::default().with_force_thresholds(3.0, 1.0));
        assert!(matches!(
            bad_gesture.validate(),
            Err(SetupError::Gesture(ConfigError::ThresholdOrder { .. }))
        ));
    }
}
