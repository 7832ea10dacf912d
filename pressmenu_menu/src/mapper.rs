// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-offset mapping with rubber-banding past the list ends.

/// Result of [`ScrollMapping::map`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SelectionOffset {
    /// Content offset to scroll the list to.
    pub offset: f64,
    /// The item the drag currently hovers toward.
    ///
    /// This is distinct from the committed selection; it only becomes the
    /// selection when the gesture is confirmed.
    pub candidate: Option<usize>,
}

/// Constants shaping how drag translation moves through a list.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollMapping {
    /// Content pixels moved per pixel of drag. Default `1.5`.
    pub scroll_speed_factor: f64,
    /// Fraction of the item height that one index step occupies. Default `0.666`.
    pub index_spacing_factor: f64,
}

impl Default for ScrollMapping {
    fn default() -> Self {
        Self {
            scroll_speed_factor: 1.5,
            index_spacing_factor: 0.666,
        }
    }
}

impl ScrollMapping {
    /// Maps a vertical drag to a content offset and a candidate index.
    ///
    /// `drag_y` is the signed vertical drag accumulated since the gesture
    /// committed; dragging up (negative) moves toward later items. Offsets past
    /// either end of the list are compressed with a `0.33` power curve so the
    /// list resists instead of stopping dead.
    ///
    /// ```
    /// use pressmenu_menu::ScrollMapping;
    ///
    /// let mapping = ScrollMapping::default();
    /// let at_rest = mapping.map(Some(2), 5, 40.0, 0.0);
    /// assert_eq!(at_rest.candidate, Some(2));
    ///
    /// let far_up = mapping.map(Some(2), 5, 40.0, -1000.0);
    /// assert_eq!(far_up.candidate, Some(4));
    /// ```
    #[must_use]
    pub fn map(
        &self,
        selected: Option<usize>,
        item_count: usize,
        item_height: f64,
        drag_y: f64,
    ) -> SelectionOffset {
        let Some(selected) = selected else {
            return SelectionOffset::default();
        };
        let spacing = item_height * self.index_spacing_factor;

        let mut y = selected as f64 * spacing - drag_y * self.scroll_speed_factor;
        let min_y = 0.0;
        let max_y = (item_count as f64 - 1.0) * spacing;
        let mut y_factor = 0.0;
        if max_y > min_y {
            y_factor = (y - min_y) / (max_y - min_y);
            if y_factor > 1.0 {
                y_factor = libm::pow(y_factor, 0.33);
            }
            if y_factor < 0.0 {
                y_factor = -(libm::pow(1.0 + libm::fabs(y_factor), 0.33) - 1.0);
            }
            y = min_y + max_y * y_factor;
        } else {
            y = 0.0;
        }

        if item_count == 0 {
            return SelectionOffset {
                offset: y,
                candidate: None,
            };
        }
        let y_factor = y_factor.clamp(0.0, 0.99);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "y_factor is clamped below 1, so the product is a valid index"
        )]
        let candidate = libm::floor(item_count as f64 * y_factor) as usize;
        SelectionOffset {
            offset: y,
            candidate: Some(candidate),
        }
    }
}
