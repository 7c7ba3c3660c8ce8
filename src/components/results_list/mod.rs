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

//! Interaction controller for the results list.
//!
//! The controller sits between the host, which owns the items and the
//! selected index, and whatever draws the rows. It owns the context menu and
//! the pending scroll, derives row presentation, and reports what the user
//! wants through a [`ResultsListDelegate`]. It never changes an item itself.
//!
//! # Organization
//!
//! * [`context_menu`]: open/closed menu state and the actions it offers.
//! * [`scroll`]: two-phase scrolling of the selected row into view.
//! * [`presentation`]: row and tag descriptors, text highlighting.
//! * [`icon`]: fallback chain for icons that fail to load.

pub(crate) mod context_menu;
pub(crate) mod icon;
pub(crate) mod presentation;
pub(crate) mod scroll;

use std::borrow::Cow;

use log::debug;

pub(crate) use context_menu::{ContextAction, ContextMenuState, PointerEvent};
pub(crate) use icon::{FallbackStep, IconElement, IconResolver};
pub(crate) use presentation::{Highlighter, classify, tag_of};
pub(crate) use scroll::{RowLocator, ScrollOutcome};

use crate::model::SearchItem;

/// Receives the intents raised by the results list.
///
/// Calls are fire-and-forget; the list does not wait for, or learn about, the
/// outcome.
pub(crate) trait ResultsListDelegate {
    fn on_select(&self, item: &SearchItem);

    fn on_retry(&self);

    fn on_context_action(&self, action: ContextAction, item: &SearchItem);
}

/// Host-owned state the list reads on every frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResultsListProps<'a> {
    pub(crate) items: &'a [SearchItem],
    pub(crate) selected_index: i32,
    pub(crate) is_loading: bool,
    pub(crate) error: Option<&'a str>,
    pub(crate) search_query: Option<&'a str>,
}

impl<'a> ResultsListProps<'a> {
    pub(crate) fn item_at(&self, index: usize) -> Option<&'a SearchItem> {
        self.items.get(index)
    }
}

pub(crate) struct ResultsList {
    context_menu: ContextMenuState,
    scroll: scroll::ScrollSync,
    highlighter: Box<dyn Highlighter>,
    icon_resolver: Option<Box<dyn IconResolver>>,
}

impl ResultsList {
    pub(crate) fn new(highlighter: Box<dyn Highlighter>, icon_resolver: Option<Box<dyn IconResolver>>) -> Self {
        Self {
            context_menu: ContextMenuState::Closed,
            scroll: scroll::ScrollSync::default(),
            highlighter,
            icon_resolver,
        }
    }

    pub(crate) fn context_menu(&self) -> &ContextMenuState {
        &self.context_menu
    }

    pub(crate) fn highlight<'t>(&self, text: &'t str, query: Option<&str>) -> Cow<'t, str> {
        presentation::highlight(self.highlighter.as_ref(), text, query)
    }

    pub(crate) fn handle_item_click(&self, item: &SearchItem, delegate: &dyn ResultsListDelegate) {
        if item.is_deleted() {
            return;
        }

        delegate.on_select(item);
    }

    /// Opens the context menu for `item` at the event position.
    ///
    /// The event's default is suppressed even when the item is deleted and
    /// the menu stays as it was.
    pub(crate) fn handle_context_menu(&mut self, event: &mut PointerEvent, item: &SearchItem) {
        event.prevent_default();

        if self.context_menu.open_at(event.x, event.y, item) {
            debug!("Context menu opened at ({}, {}) for {:?}", event.x, event.y, item.key());
        }
    }

    pub(crate) fn close_context_menu(&mut self) {
        self.context_menu.close();
    }

    /// Reports the chosen action. The menu stays open; closing it is up to
    /// the caller.
    pub(crate) fn handle_context_action(&self, action: ContextAction, item: &SearchItem, delegate: &dyn ResultsListDelegate) {
        delegate.on_context_action(action, item);
    }

    pub(crate) fn handle_retry(&self, delegate: &dyn ResultsListDelegate) {
        delegate.on_retry();
    }

    pub(crate) fn handle_image_error(&self, element: &mut IconElement) -> FallbackStep {
        icon::handle_image_error(element, self.icon_resolver.as_deref())
    }

    pub(crate) fn scroll_to_selected_item(&self, selected_index: i32, locator: &mut dyn RowLocator) -> ScrollOutcome {
        scroll::scroll_to_selected_item(selected_index, locator)
    }

    /// Must be called by the host whenever its selected index changes.
    pub(crate) fn on_selection_changed(&mut self, selected_index: i32) {
        self.scroll.request(selected_index);
    }

    /// Must be called by the host once the frame for the current selection
    /// has been drawn.
    pub(crate) fn on_render_settled(&mut self, selected_index: i32, locator: &mut dyn RowLocator) -> Option<ScrollOutcome> {
        self.scroll.settle(selected_index, locator)
    }
}
