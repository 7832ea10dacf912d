// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press Menu Menu: selection mapping for force-scrolled menus.
//!
//! Once a press gesture commits, vertical drag scrolls a list and hovers over
//! a candidate item; releasing commits the candidate.
//!
//! - [`ScrollMapping`]: pure mapping from `(selection, item count, item height,
//!   drag)` to a content offset and candidate index. Near the ends of the list
//!   the offset is rubber-banded, which is what makes selection feel sticky.
//! - [`ForceMenu`]: items plus committed selection, candidate, and content
//!   offset, driven through the [`MenuListener`] lifecycle.
//!
//! ## Minimal example
//!
//! ```rust
//! use pressmenu_menu::ScrollMapping;
//!
//! let mapping = ScrollMapping::default();
//!
//! // Five 40pt rows, third row selected, no drag yet.
//! let rest = mapping.map(Some(2), 5, 40.0, 0.0);
//! assert_eq!(rest.candidate, Some(2));
//!
//! // Dragging far past the last row never produces an out-of-range index.
//! let overscroll = mapping.map(Some(2), 5, 40.0, -400.0);
//! assert_eq!(overscroll.candidate, Some(4));
//! ```
//!
//! This crate is `no_std` and uses `alloc` for the item list.

#![no_std]

extern crate alloc;

mod mapper;
mod menu;

pub use mapper::{ScrollMapping, SelectionOffset};
pub use menu::{ForceMenu, MenuListener};
