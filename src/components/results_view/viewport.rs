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

//! Scroll position of the drawn result rows.
//!
//! The viewport remembers which item indices were drawn, in order, during the
//! last frame. That record is what the results list searches when it needs to
//! scroll a row into view, and what mouse clicks are mapped against.

use std::ops::Range;

use ratatui::layout::{Position, Rect};

use crate::components::results_list::{
    RowLocator,
    scroll::{RowHandle, ScrollAlign, ScrollBehavior, ScrollOptions},
};

#[derive(Debug, Default)]
pub(crate) struct RowViewport {
    area: Rect,
    rows: Vec<usize>,
    offset: usize,
    target: Option<usize>,
}

impl RowViewport {
    /// Records the rows drawn into `area` for the current frame.
    pub(crate) fn set_rows(&mut self, area: Rect, rows: Vec<usize>) {
        self.area = area;
        self.rows = rows;
        self.offset = self.offset.min(self.max_offset());
        self.target = self.target.map(|target| target.min(self.max_offset()));
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    fn height(&self) -> usize {
        self.area.height as usize
    }

    fn max_offset(&self) -> usize {
        self.rows.len().saturating_sub(self.height())
    }

    /// Positions of the rows that fit on screen at the current offset.
    pub(crate) fn visible(&self) -> Range<usize> {
        let end = (self.offset + self.height()).min(self.rows.len());
        self.offset.min(end)..end
    }

    /// Item indices of the rows that fit on screen.
    pub(crate) fn visible_rows(&self) -> &[usize] {
        &self.rows[self.visible()]
    }

    /// Item index of the row under a screen position.
    pub(crate) fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }

        let position = self.offset + (row - self.area.y) as usize;
        self.visible().contains(&position).then(|| self.rows[position])
    }

    /// Moves one step towards the smooth scroll target.
    pub(crate) fn advance(&mut self) {
        let Some(target) = self.target else {
            return;
        };

        let distance = target.abs_diff(self.offset);
        let step = distance.div_ceil(2).max(1);

        self.offset = if target > self.offset {
            self.offset + step.min(distance)
        } else {
            self.offset - step.min(distance)
        };

        if self.offset == target {
            self.target = None;
        }
    }

    /// Scrolls immediately, cancelling any smooth scroll in progress.
    pub(crate) fn scroll_by(&mut self, delta: isize) {
        self.target = None;
        self.offset = self.offset.saturating_add_signed(delta).min(self.max_offset());
    }

    fn aligned_offset(&self, position: usize, align: ScrollAlign) -> usize {
        let height = self.height().max(1);
        let offset = match align {
            ScrollAlign::Center => position.saturating_sub(height / 2),
            ScrollAlign::Nearest => {
                if position < self.offset {
                    position
                } else if position >= self.offset + height {
                    position + 1 - height
                } else {
                    self.offset
                }
            }
        };

        offset.min(self.max_offset())
    }
}

impl RowLocator for RowViewport {
    fn locate(&self, index: usize) -> Option<RowHandle> {
        self.rows
            .iter()
            .position(|&row| row == index)
            .map(|position| RowHandle { index, position })
    }

    // Rows always span the full width, so the inline alignment has nothing
    // to act on.
    fn scroll_into_view(&mut self, row: RowHandle, options: ScrollOptions) {
        let offset = self.aligned_offset(row.position, options.block);

        match options.behavior {
            ScrollBehavior::Instant => {
                self.offset = offset;
                self.target = None;
            }
            ScrollBehavior::Smooth => {
                self.target = (offset != self.offset).then_some(offset);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(rows: usize, height: u16) -> RowViewport {
        let mut viewport = RowViewport::default();
        viewport.set_rows(Rect::new(0, 2, 40, height), (0..rows).collect());
        viewport
    }

    fn settle(viewport: &mut RowViewport) {
        while viewport.is_animating() {
            viewport.advance();
        }
    }

    #[test]
    fn centres_row_smoothly() {
        let mut viewport = viewport(100, 10);
        let row = viewport.locate(50).unwrap();

        viewport.scroll_into_view(row, ScrollOptions::CENTERED);
        assert_eq!(viewport.offset(), 0);
        assert!(viewport.is_animating());

        viewport.advance();
        assert!(viewport.offset() > 0 && viewport.offset() < 45);

        settle(&mut viewport);
        assert_eq!(viewport.offset(), 45);
        assert!(viewport.visible().contains(&50));
    }

    #[test]
    fn centring_is_clamped_to_the_list() {
        let mut viewport = viewport(12, 10);
        let row = viewport.locate(11).unwrap();
        viewport.scroll_into_view(row, ScrollOptions::CENTERED);
        settle(&mut viewport);
        assert_eq!(viewport.offset(), 2);

        let row = viewport.locate(0).unwrap();
        viewport.scroll_into_view(row, ScrollOptions::CENTERED);
        settle(&mut viewport);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn new_request_retargets_running_scroll() {
        let mut viewport = viewport(100, 10);
        viewport.scroll_into_view(viewport.locate(80).unwrap(), ScrollOptions::CENTERED);
        viewport.advance();
        viewport.scroll_into_view(viewport.locate(30).unwrap(), ScrollOptions::CENTERED);
        settle(&mut viewport);
        assert_eq!(viewport.offset(), 25);
    }

    #[test]
    fn instant_and_nearest() {
        let mut viewport = viewport(100, 10);
        let options = ScrollOptions {
            behavior: ScrollBehavior::Instant,
            block: ScrollAlign::Nearest,
            inline: ScrollAlign::Nearest,
        };

        viewport.scroll_into_view(viewport.locate(5).unwrap(), options);
        assert_eq!(viewport.offset(), 0);

        viewport.scroll_into_view(viewport.locate(15).unwrap(), options);
        assert_eq!(viewport.offset(), 6);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn missing_rows_are_not_located() {
        let viewport = viewport(3, 10);
        assert!(viewport.locate(5).is_none());
    }

    #[test]
    fn maps_screen_rows_to_items() {
        let mut viewport = viewport(20, 5);
        viewport.scroll_by(3);

        assert_eq!(viewport.row_at(1, 2), Some(3));
        assert_eq!(viewport.row_at(1, 6), Some(7));
        assert_eq!(viewport.row_at(1, 7), None);
        assert_eq!(viewport.row_at(1, 1), None);
    }

    #[test]
    fn shrinking_list_clamps_offset() {
        let mut viewport = viewport(50, 10);
        viewport.scroll_by(30);
        viewport.set_rows(Rect::new(0, 2, 40, 10), (0..12).collect());
        assert_eq!(viewport.offset(), 2);
        assert_eq!(viewport.visible(), 2..12);
    }
}
