// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Keeps the selected row scrolled into view.
//!
//! Scrolling is two-phase. The host reports a selection change with
//! [`ScrollSync::request`], draws the frame that reflects it, then calls
//! [`ScrollSync::settle`]. Only then are rows looked up through the
//! [`RowLocator`], so the lookup always sees the rows that were just drawn.
//!
//! A row that is not on screen any more (filtered out, list reloaded) is not an
//! error: the scroll is dropped and never retried.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Where the row should land within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScrollAlign {
    Center,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScrollOptions {
    pub(crate) behavior: ScrollBehavior,
    pub(crate) block: ScrollAlign,
    pub(crate) inline: ScrollAlign,
}

impl ScrollOptions {
    /// Smooth scroll that centres the row vertically.
    pub(crate) const CENTERED: ScrollOptions = ScrollOptions {
        behavior: ScrollBehavior::Smooth,
        block: ScrollAlign::Center,
        inline: ScrollAlign::Nearest,
    };
}

/// A row found by a [`RowLocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowHandle {
    /// Index of the item in the results sequence.
    pub(crate) index: usize,
    /// Position of the row in render order.
    pub(crate) position: usize,
}

/// Finds rendered rows by their item index and scrolls them into view.
pub(crate) trait RowLocator {
    fn locate(&self, index: usize) -> Option<RowHandle>;

    fn scroll_into_view(&mut self, row: RowHandle, options: ScrollOptions);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScrollOutcome {
    NoSelection,
    RowMissing,
    Scrolled(usize),
}

/// Scrolls the row for `selected_index` to the middle of the viewport.
pub(crate) fn scroll_to_selected_item(selected_index: i32, locator: &mut dyn RowLocator) -> ScrollOutcome {
    let Ok(index) = usize::try_from(selected_index) else {
        return ScrollOutcome::NoSelection;
    };

    match locator.locate(index) {
        Some(row) => {
            locator.scroll_into_view(row, ScrollOptions::CENTERED);
            ScrollOutcome::Scrolled(index)
        }
        None => {
            debug!("No rendered row for selected index {index}, skipping scroll");
            ScrollOutcome::RowMissing
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ScrollSync {
    pending: bool,
}

impl ScrollSync {
    /// Records that the selection changed.
    ///
    /// Negative indices mean nothing is selected and never schedule a scroll.
    /// Repeated requests before the next settle collapse into one.
    pub(crate) fn request(&mut self, selected_index: i32) {
        if selected_index >= 0 {
            self.pending = true;
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    /// Runs the pending scroll, if any, against the rows just drawn.
    ///
    /// The selection is read again here, so the latest index wins when it
    /// changed several times between frames.
    pub(crate) fn settle(&mut self, selected_index: i32, locator: &mut dyn RowLocator) -> Option<ScrollOutcome> {
        if !std::mem::take(&mut self.pending) {
            return None;
        }

        Some(scroll_to_selected_item(selected_index, locator))
    }
}
