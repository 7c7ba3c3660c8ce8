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

//! Input handling for the results view.
//!
//! This module maps terminal mouse and keyboard events onto the results list
//! handlers. Events that the view does not use are reported back as
//! unhandled so the caller can route them elsewhere.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::layout::Position;

use crate::components::{
    ResultsView,
    results_list::{ContextAction, PointerEvent, ResultsListDelegate, ResultsListProps},
};

const WHEEL_ROWS: isize = 3;

impl ResultsView {
    /// Returns `true` if the event was consumed.
    pub(crate) fn process_mouse(
        &mut self,
        mouse: MouseEvent,
        props: &ResultsListProps,
        delegate: &dyn ResultsListDelegate,
    ) -> bool {
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.viewport.scroll_by(WHEEL_ROWS);
                true
            }
            MouseEventKind::ScrollUp => {
                self.viewport.scroll_by(-WHEEL_ROWS);
                true
            }

            MouseEventKind::Down(MouseButton::Right) => {
                let Some(item) = self.viewport.row_at(column, row).and_then(|index| props.item_at(index)) else {
                    return false;
                };

                let mut event = PointerEvent::new(column, row);
                self.list.handle_context_menu(&mut event, item);
                event.default_prevented()
            }

            MouseEventKind::Down(MouseButton::Left) => {
                if self.list.context_menu().visible() {
                    self.click_menu(column, row, delegate);
                    return true;
                }

                if self.retry_button.is_some_and(|area| area.contains(Position::new(column, row))) {
                    self.list.handle_retry(delegate);
                    return true;
                }

                match self.viewport.row_at(column, row).and_then(|index| props.item_at(index)) {
                    Some(item) => {
                        self.list.handle_item_click(item, delegate);
                        true
                    }
                    None => false,
                }
            }

            _ => false,
        }
    }

    /// Picks the menu entry under the pointer, or dismisses the menu when the
    /// click landed outside it.
    fn click_menu(&mut self, column: u16, row: u16, delegate: &dyn ResultsListDelegate) {
        let Some(menu) = self.menu.as_ref() else {
            self.list.close_context_menu();
            return;
        };

        if !menu.area.contains(Position::new(column, row)) {
            self.list.close_context_menu();
            return;
        }

        // Entries start below the top border.
        let entry = (row - menu.area.y).checked_sub(1).map(usize::from);
        if let Some(action) = entry.and_then(|entry| menu.actions.get(entry).copied()) {
            self.choose(action, delegate);
        }
    }

    fn choose(&mut self, action: ContextAction, delegate: &dyn ResultsListDelegate) {
        if let Some(item) = self.list.context_menu().item().cloned() {
            debug!("Context action {:?} chosen for {:?}", action, item.key());
            self.list.handle_context_action(action, &item, delegate);
        }
    }

    /// Returns `true` if the key was consumed.
    pub(crate) fn process_key(
        &mut self,
        key: KeyEvent,
        props: &ResultsListProps,
        delegate: &dyn ResultsListDelegate,
    ) -> bool {
        if self.list.context_menu().visible() {
            return self.process_menu_key(key, delegate);
        }

        match key.code {
            KeyCode::Enter => {
                let selected = usize::try_from(props.selected_index).ok().and_then(|index| props.item_at(index));
                if let Some(item) = selected {
                    self.list.handle_item_click(item, delegate);
                }
                true
            }

            KeyCode::Char('r') if props.error.is_some() => {
                self.list.handle_retry(delegate);
                true
            }

            // Recentre on the selected row.
            KeyCode::Char('z') => {
                let outcome = self.list.scroll_to_selected_item(props.selected_index, &mut self.viewport);
                debug!("Recentre: {:?}", outcome);
                true
            }

            _ => false,
        }
    }

    // Keys 1..=n pick the numbered menu entries.
    fn process_menu_key(&mut self, key: KeyEvent, delegate: &dyn ResultsListDelegate) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.list.close_context_menu();
                true
            }

            KeyCode::Char(c @ '1'..='9') => {
                let entry = c as usize - '1' as usize;
                let action = self.menu.as_ref().and_then(|menu| menu.actions.get(entry).copied());
                if let Some(action) = action {
                    self.choose(action, delegate);
                }
                true
            }

            _ => false,
        }
    }
}
