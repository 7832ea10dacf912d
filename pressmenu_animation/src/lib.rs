// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press Menu Animation: host-clocked scalar animation.
//!
//! This crate interpolates single floating-point values over time. It is the
//! engine behind the entry factor of a press gesture, but nothing in it knows
//! about gestures:
//!
//! - [`easing`]: normalized curves (`linear`, `cubic_in`, `cubic_out`, `cubic_in_out`).
//! - [`AnimationDriver`]: one interpolation task. Each [`AnimationDriver::advance`]
//!   delivers one value to an [`AnimationSink`]; the end of the task, or its
//!   cancellation, is reported exactly once.
//! - [`AnimatableScalar`]: a value with at most one in-flight animation,
//!   instantaneous [`set`](AnimatableScalar::set), change notification through
//!   a [`ScalarObserver`], and completion tokens.
//!
//! ## Time
//!
//! No type in this crate reads a clock. Every time-dependent call takes a
//! `now: Duration` measured from an arbitrary monotonic epoch chosen by the
//! host, and the host calls `advance` once per display frame. This keeps
//! tests deterministic and lets the crate run under any event loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use pressmenu_animation::{AnimatableScalar, easing};
//!
//! let mut factor: AnimatableScalar = AnimatableScalar::new(0.0);
//! let mut frames = 0;
//! let mut observer = (|_: f64| frames += 1, |(): ()| {});
//!
//! factor.animate(1.0, Duration::from_millis(48), easing::cubic_in, Duration::ZERO, (), &mut observer);
//! let mut now = Duration::ZERO;
//! while factor.is_animating() {
//!     now += Duration::from_millis(16);
//!     factor.advance(now, &mut observer);
//! }
//!
//! drop(observer);
//! assert_eq!(factor.value(), 1.0);
//! assert_eq!(frames, 3);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod driver;
pub mod easing;
mod scalar;

pub use driver::{AnimationDriver, AnimationSink, AnimationSpec};
pub use easing::Easing;
pub use scalar::{AnimatableScalar, ScalarObserver};
