// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.
//!
//! Every curve maps normalized progress `t` in `[0, 1]` onto eased progress in
//! `[0, 1]`, with `f(0) == 0` and `f(1) == 1`. Inputs outside the unit range are
//! clamped first, so a late frame never overshoots the target.

/// A normalized easing curve.
pub type Easing = fn(f64) -> f64;

/// Identity curve.
#[must_use]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Cubic ease-in: slow start, fast end (`t³`).
#[must_use]
pub fn cubic_in(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Cubic ease-out: fast start, slow end (`1 - (1 - t)³`).
#[must_use]
pub fn cubic_out(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out: accelerates through the first half and mirrors it in the
/// second.
#[must_use]
pub fn cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        0.5 * f * f * f + 1.0
    }
}
