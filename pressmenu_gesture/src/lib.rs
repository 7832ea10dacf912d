// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press Menu Gesture: force-press and long-press phase recognition.
//!
//! [`ForcePressRecognizer`] turns a single-finger touch sequence into a
//! four-phase interaction: press to reveal, drag to select, release to confirm.
//!
//! ```text
//!            force >= enter, or long press fires
//!   None ────────────────────────────────────────▶ Enter
//!    ▲                                               │ entry animation reaches 1.0
//!    │ exit animation reaches 0.0                    ▼
//!   Exit ◀──────────────── last contact lifts ─── Scroll
//! ```
//!
//! - On hardware that reports pressure ([`ForceCapability::Available`]), force
//!   between the start and enter thresholds drives the entry factor directly;
//!   reaching the enter threshold commits to [`GesturePhase::Enter`].
//! - Without pressure sensing, resting the finger for
//!   [`GestureConfig::start_long_touch_delay`] commits instead.
//! - While scrolling, every move adds to the reported translation.
//! - Releasing before the gesture qualifies, a second finger while idle, and
//!   system cancellation all report [`RecognizerOutcome::Failed`].
//!
//! Each observable change is delivered to a [`GestureHost`] as a
//! [`GestureUpdate`], together with [`FeedbackSignal`]s for sound or haptics.
//!
//! ## Time
//!
//! The recognizer never reads a clock. Inputs carry the host's `now`, and the
//! host calls [`ForcePressRecognizer::advance`] every frame while
//! [`ForcePressRecognizer::needs_frames`] returns `true`, and once
//! [`ForcePressRecognizer::next_deadline`] has passed.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Point;
//! use pressmenu_gesture::{
//!     ForceCapability, ForcePressRecognizer, GestureConfig, GesturePhase, GestureUpdate,
//!     RecognizerOutcome,
//! };
//!
//! let mut recognizer =
//!     ForcePressRecognizer::new(GestureConfig::default(), ForceCapability::Unavailable).unwrap();
//! let mut seen = Vec::new();
//! let mut host = |update: &GestureUpdate| seen.push((update.phase, update.outcome));
//!
//! let ms = Duration::from_millis;
//! recognizer.touch_began(1, Point::new(40.0, 300.0), ms(0), &mut host);
//! assert_eq!(recognizer.next_deadline(), Some(ms(300)));
//!
//! // The long press fires, then the entry animation runs for 400 ms.
//! recognizer.advance(ms(300), &mut host);
//! assert_eq!(recognizer.phase(), GesturePhase::Enter);
//! recognizer.advance(ms(700), &mut host);
//! assert_eq!(recognizer.phase(), GesturePhase::Scroll);
//!
//! recognizer.touch_moved(Point::new(40.0, 260.0), 0.0, ms(720), &mut host);
//! assert_eq!(recognizer.translation().y, -40.0);
//!
//! recognizer.touch_ended(ms(740), &mut host);
//! recognizer.advance(ms(940), &mut host);
//!
//! drop(host);
//! assert_eq!(seen.last(), Some(&(GesturePhase::None, RecognizerOutcome::Ended)));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod config;
mod recognizer;
mod touch;
mod types;

pub use config::{ConfigError, ForceCapability, GestureConfig};
pub use recognizer::ForcePressRecognizer;
pub use touch::TouchTracker;
pub use types::{
    FeedbackSignal, GestureHost, GesturePhase, GestureUpdate, RecognizerOutcome, TouchSample,
};
