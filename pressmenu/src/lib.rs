// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press Menu: press to reveal a menu, drag to pick, release to confirm.
//!
//! This crate ties the pieces together:
//!
//! - [`pressmenu_gesture`] recognizes the press (force or long press) and
//!   reports phases, entry progress and drag translation.
//! - [`pressmenu_menu`] maps the drag onto a list of items.
//! - [`ForceMenuController`] routes one into the other and derives a
//!   [`Presentation`] (content and menu scales, menu opacity) for the host to
//!   draw.
//!
//! The host feeds touches and frame ticks into the controller and implements
//! [`ControllerHost`] for whatever it wants to hear about.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Point;
//! use pressmenu::{ForceCapability, ForceMenu, ForceMenuController, PresentationConfig};
//!
//! let menu = ForceMenu::new(vec!["Inbox", "Drafts", "Sent", "Archive", "Trash"]);
//! let mut controller = ForceMenuController::new(
//!     PresentationConfig::default(),
//!     ForceCapability::Available,
//!     menu,
//!     (),
//! )
//! .unwrap();
//! controller.menu_mut().select(Some(0));
//!
//! let ms = Duration::from_millis;
//! controller.touch_began(1, Point::new(100.0, 300.0), ms(0));
//! controller.touch_moved(Point::new(100.0, 300.0), 3.2, ms(10));
//! controller.advance(ms(60));
//! assert!(controller.presentation().menu_visible);
//!
//! // Drag up a little and let go.
//! controller.touch_moved(Point::new(100.0, 275.0), 0.4, ms(80));
//! controller.touch_ended(ms(100));
//! controller.advance(ms(300));
//!
//! assert_eq!(controller.menu().selected_item(), Some(&"Drafts"));
//! assert!(!controller.presentation().menu_visible);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod presentation;

pub use controller::{ControllerHost, ForceMenuController};
pub use presentation::{MENU_REVEAL_FACTOR, Presentation, PresentationConfig, SetupError};

pub use pressmenu_gesture::{
    self, ConfigError, FeedbackSignal, ForceCapability, GestureConfig, GesturePhase,
    RecognizerOutcome,
};
pub use pressmenu_menu::{self, ForceMenu, MenuListener, ScrollMapping};
