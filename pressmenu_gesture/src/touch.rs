// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch contact bookkeeping: active contact count and per-sample deltas.
//!
//! ## Usage
//!
//! 1) Begin tracking with [`TouchTracker::begin`] when the first contact lands.
//! 2) On each move sample, call [`TouchTracker::update`] to get the movement
//!    since the previous sample.
//! 3) Count extra fingers with [`TouchTracker::add_contacts`] and lifted ones
//!    with [`TouchTracker::lift`].
//! 4) [`TouchTracker::reset`] forgets everything.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pressmenu_gesture::TouchTracker;
//!
//! let mut touches = TouchTracker::default();
//! touches.begin(Point::new(10.0, 20.0));
//! assert_eq!(touches.active(), 1);
//!
//! let delta = touches.update(Point::new(12.0, 26.0)).unwrap();
//! assert_eq!(delta.y, 6.0);
//! assert_eq!(touches.total_offset(Point::new(12.0, 26.0)).unwrap().x, 2.0);
//!
//! touches.lift();
//! assert!(!touches.is_touching());
//! ```

use kurbo::{Point, Vec2};

/// Tracks the contacts of one gesture attempt.
#[derive(Debug, Clone, Default, Copy)]
pub struct TouchTracker {
    active: usize,
    origin: Option<Point>,
    last: Option<Point>,
}

impl TouchTracker {
    /// Starts a fresh attempt with one contact at `pos`.
    pub fn begin(&mut self, pos: Point) {
        self.active = 1;
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Counts `count` additional contacts joining the attempt.
    pub fn add_contacts(&mut self, count: usize) {
        self.active += count;
    }

    /// Records one lifted contact and returns how many remain.
    pub fn lift(&mut self) -> usize {
        self.active = self.active.saturating_sub(1);
        if self.active == 0 {
            self.origin = None;
            self.last = None;
        }
        self.active
    }

    /// Records a new position, returning the movement since the previous one.
    ///
    /// Returns `None` when no contact is being tracked.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    /// Offset of `current` from the position where the attempt began.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.origin.map(|origin| current - origin)
    }

    /// Number of contacts currently down.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Returns `true` while at least one contact is down.
    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.active > 0
    }

    /// Forgets all contacts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
