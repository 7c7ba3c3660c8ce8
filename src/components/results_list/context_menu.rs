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

//! Context menu state for the results list.
//!
//! The menu is either closed or open at a pointer position for exactly one
//! item. A closed menu never refers to an item.

use crate::model::{ItemKind, SearchItem};

/// Actions offered by the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ContextAction {
    Navigate,
    Close,
    Remove,
}

impl ContextAction {
    pub(crate) const ALL: [ContextAction; 3] = [
        ContextAction::Navigate,
        ContextAction::Close,
        ContextAction::Remove,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ContextAction::Navigate => "Open",
            ContextAction::Close => "Close tab",
            ContextAction::Remove => "Remove",
        }
    }

    /// The actions worth offering for an item; closing only applies to tabs.
    pub(crate) fn available_for(item: &SearchItem) -> Vec<ContextAction> {
        Self::ALL
            .into_iter()
            .filter(|action| match action {
                ContextAction::Close => item.kind() == ItemKind::Tab,
                ContextAction::Remove => item.kind() != ItemKind::Tab,
                ContextAction::Navigate => true,
            })
            .collect()
    }
}

/// A secondary-button pointer event.
///
/// Handlers call [`PointerEvent::prevent_default`] when the host should not
/// run its own behaviour for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PointerEvent {
    pub(crate) x: u16,
    pub(crate) y: u16,
    default_prevented: bool,
}

impl PointerEvent {
    pub(crate) fn new(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            default_prevented: false,
        }
    }

    pub(crate) fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub(crate) fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum ContextMenuState {
    #[default]
    Closed,
    Open {
        x: u16,
        y: u16,
        item: SearchItem,
    },
}

impl ContextMenuState {
    pub(crate) fn visible(&self) -> bool {
        matches!(self, ContextMenuState::Open { .. })
    }

    pub(crate) fn x(&self) -> u16 {
        match self {
            ContextMenuState::Open { x, .. } => *x,
            ContextMenuState::Closed => 0,
        }
    }

    pub(crate) fn y(&self) -> u16 {
        match self {
            ContextMenuState::Open { y, .. } => *y,
            ContextMenuState::Closed => 0,
        }
    }

    pub(crate) fn item(&self) -> Option<&SearchItem> {
        match self {
            ContextMenuState::Open { item, .. } => Some(item),
            ContextMenuState::Closed => None,
        }
    }

    /// Opens the menu for `item`, replacing any menu already open.
    ///
    /// Deleted items are rejected and leave the state unchanged.
    pub(crate) fn open_at(&mut self, x: u16, y: u16, item: &SearchItem) -> bool {
        if item.is_deleted() {
            return false;
        }

        *self = ContextMenuState::Open {
            x,
            y,
            item: item.clone(),
        };
        true
    }

    pub(crate) fn close(&mut self) {
        *self = ContextMenuState::Closed;
    }
}
