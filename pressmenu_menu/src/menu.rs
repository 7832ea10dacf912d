// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state of a force-scrolled menu.

use alloc::vec::Vec;

use crate::mapper::{ScrollMapping, SelectionOffset};

/// Lifecycle calls a menu receives while a press gesture runs.
///
/// The calls arrive in this order for one gesture: [`begin`](Self::begin)
/// once, [`did_scroll`](Self::did_scroll) for every drag sample,
/// [`did_select`](Self::did_select) while the gesture concludes normally, and
/// finally [`end`](Self::end).
pub trait MenuListener {
    /// The gesture started.
    fn begin(&mut self);

    /// The accumulated vertical drag is now `y`.
    fn did_scroll(&mut self, y: f64);

    /// The user released over the current candidate.
    fn did_select(&mut self);

    /// The gesture is over; `canceled` means nothing should be committed.
    fn end(&mut self, canceled: bool);
}

/// Ignores all lifecycle calls.
impl MenuListener for () {
    fn begin(&mut self) {}

    fn did_scroll(&mut self, _y: f64) {}

    fn did_select(&mut self) {}

    fn end(&mut self, _canceled: bool) {}
}

/// A list of items with a committed selection and a drag-driven candidate.
///
/// Outside a gesture the menu rests on its [`selected`](Self::selected) item.
/// During a gesture, drags move the [`candidate`](Self::candidate) using the
/// menu's [`ScrollMapping`], anchored at the selection the gesture started
/// from. Ending the gesture commits the candidate unless it was canceled.
///
/// ```
/// use pressmenu_menu::{ForceMenu, MenuListener};
///
/// let mut menu = ForceMenu::new(vec!["small", "medium", "large", "huge"]);
/// menu.select(Some(1));
///
/// menu.begin();
/// menu.did_scroll(-15.0);
/// assert_eq!(menu.candidate_item(), Some(&"large"));
///
/// menu.end(false);
/// assert_eq!(menu.selected_item(), Some(&"large"));
/// assert!(!menu.is_scrolling());
/// ```
#[derive(Clone, Debug)]
pub struct ForceMenu<T> {
    items: Vec<T>,
    selected: Option<usize>,
    anchor: Option<usize>,
    candidate: Option<usize>,
    scrolling: bool,
    scroll_y: f64,
    item_height: f64,
    mapping: ScrollMapping,
    offset: f64,
}

impl<T> Default for ForceMenu<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> ForceMenu<T> {
    /// Default row height in layout units.
    pub const DEFAULT_ITEM_HEIGHT: f64 = 47.0;

    /// Creates a menu over `items` with nothing selected.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            selected: None,
            anchor: None,
            candidate: None,
            scrolling: false,
            scroll_y: 0.0,
            item_height: Self::DEFAULT_ITEM_HEIGHT,
            mapping: ScrollMapping::default(),
            offset: 0.0,
        }
    }

    /// Sets the row height used for offset mapping.
    #[must_use]
    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self.refresh();
        self
    }

    /// Sets the drag mapping constants.
    #[must_use]
    pub fn with_mapping(mut self, mapping: ScrollMapping) -> Self {
        self.mapping = mapping;
        self.refresh();
        self
    }

    /// The items, in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the items.
    ///
    /// Indices that no longer exist are dropped from the selection and the
    /// candidate.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let len = self.items.len();
        for index in [&mut self.selected, &mut self.anchor, &mut self.candidate] {
            if index.is_some_and(|i| i >= len) {
                *index = None;
            }
        }
        self.refresh();
    }

    /// Row height used for offset mapping.
    #[must_use]
    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Drag mapping constants.
    #[must_use]
    pub fn mapping(&self) -> ScrollMapping {
        self.mapping
    }

    /// Committed selection.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Committed selection, as an item.
    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// The item the drag is hovering toward, while scrolling.
    #[must_use]
    pub fn candidate(&self) -> Option<usize> {
        self.candidate
    }

    /// The item the drag is hovering toward, as an item.
    #[must_use]
    pub fn candidate_item(&self) -> Option<&T> {
        self.candidate.and_then(|i| self.items.get(i))
    }

    /// Returns `true` between [`begin`](MenuListener::begin) and
    /// [`end`](MenuListener::end).
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Accumulated drag of the current gesture.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Content offset the list should be scrolled to.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Changes the committed selection from outside a gesture.
    ///
    /// Out-of-range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.items.len());
        if self.selected == index {
            return;
        }
        self.selected = index;
        self.refresh();
    }

    fn refresh(&mut self) -> SelectionOffset {
        let mapped = self.mapping.map(
            self.anchor.or(self.selected),
            self.items.len(),
            self.item_height,
            self.scroll_y,
        );
        self.offset = mapped.offset;
        mapped
    }
}

impl<T> MenuListener for ForceMenu<T> {
    fn begin(&mut self) {
        if self.scrolling {
            return;
        }
        self.scrolling = true;
        self.anchor = self.selected;
        self.candidate = self.selected;
        self.refresh();
        log::debug!("menu scroll began at {:?}", self.selected);
    }

    fn did_scroll(&mut self, y: f64) {
        if !self.scrolling {
            log::trace!("scroll outside a gesture ignored");
            return;
        }
        self.scroll_y = y;
        let mapped = self.refresh();
        if let Some(candidate) = mapped.candidate {
            if self.candidate != Some(candidate) {
                log::trace!("menu candidate -> {candidate}");
                self.candidate = Some(candidate);
            }
        }
    }

    fn did_select(&mut self) {
        if self.scrolling {
            self.selected = self.candidate;
        }
    }

    fn end(&mut self, canceled: bool) {
        if !self.scrolling {
            return;
        }
        self.scrolling = false;
        if !canceled {
            self.selected = self.candidate;
        }
        log::debug!(
            "menu scroll ended (canceled: {canceled}), selection {:?}",
            self.selected
        );
        self.candidate = None;
        self.anchor = None;
        self.scroll_y = 0.0;
        self.refresh();
    }
}
