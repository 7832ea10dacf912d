// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press Menu Timing: host-agnostic one-shot timers.
//!
//! State machines that need "call me back in 300 ms" do not own a clock or a
//! run loop. Instead they keep a [`TimerQueue`] of deadlines and ask the host to
//! wake them at [`TimerQueue::next_deadline`]. When the host does, the state
//! machine drains [`TimerQueue::pop_expired`] and reacts to each key.
//!
//! Cancelling removes the entry from the queue, so a cancelled timer can never
//! fire late.
//!
//! ```rust
//! use core::time::Duration;
//! use pressmenu_timing::TimerQueue;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Wake {
//!     LongPress,
//!     Blink,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Wake::Blink, Duration::from_millis(500));
//! let long_press = timers.schedule(Wake::LongPress, Duration::from_millis(300));
//! assert_eq!(timers.next_deadline(), Some(Duration::from_millis(300)));
//!
//! timers.cancel(long_press);
//! assert_eq!(timers.pop_expired(Duration::from_millis(400)), None);
//! assert_eq!(timers.pop_expired(Duration::from_millis(500)), Some(Wake::Blink));
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std` and keeps small queues inline.

#![no_std]

use core::time::Duration;

use smallvec::SmallVec;

/// Handle returned by [`TimerQueue::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<K> {
    id: TimerId,
    deadline: Duration,
    key: K,
}

/// A queue of one-shot deadlines keyed by caller-defined values.
///
/// Entries that share a deadline fire in scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: SmallVec<[Entry<K>; 4]>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedules `key` to fire at `deadline`.
    pub fn schedule(&mut self, key: K, deadline: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // Keep entries sorted by deadline, FIFO among equal deadlines.
        let at = self
            .entries
            .iter()
            .position(|entry| entry.deadline > deadline)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, Entry { id, deadline, key });
        id
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// Cancels every pending timer whose key matches `key`, returning how many
    /// were removed.
    pub fn cancel_key(&mut self, key: &K) -> usize
    where
        K: PartialEq,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key != *key);
        before - self.entries.len()
    }

    /// Returns `true` if a timer with `key` is pending.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.entries.iter().any(|entry| entry.key == *key)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.first().map(|entry| entry.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    ///
    /// Call this in a loop to drain everything that has expired.
    pub fn pop_expired(&mut self, now: Duration) -> Option<K> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        Some(self.entries.remove(0).key)
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
