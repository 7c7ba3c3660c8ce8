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

//! Terminal binding for the results list.
//!
//! This module couples the [`ResultsList`] controller to the terminal: it
//! records the rows drawn each frame so the controller can find them again,
//! keeps the icon slot of every item, and maps mouse and key input onto the
//! controller's handlers.

mod event;
mod render;
mod viewport;

use std::collections::HashMap;

use log::debug;
use ratatui::layout::Rect;

use viewport::RowViewport;

use crate::{
    assets::IconLoader,
    components::results_list::{ContextAction, IconElement, ResultsList, ResultsListProps},
    model::ItemKey,
    render::icons::{ICON_BROKEN, ICON_PENDING},
};

/// Where the open context menu was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MenuLayout {
    area: Rect,
    actions: Vec<ContextAction>,
}

pub(crate) struct ResultsView {
    pub(crate) list: ResultsList,
    viewport: RowViewport,
    icons: HashMap<ItemKey, IconElement>,
    loader: IconLoader,
    menu: Option<MenuLayout>,
    retry_button: Option<Rect>,
}

impl ResultsView {
    pub(crate) fn new(list: ResultsList) -> Self {
        Self {
            list,
            viewport: RowViewport::default(),
            icons: HashMap::new(),
            loader: IconLoader,
            menu: None,
            retry_button: None,
        }
    }

    /// Forgets per-item state after the items were reloaded.
    pub(crate) fn reset(&mut self) {
        self.icons.clear();
        self.list.close_context_menu();
        self.viewport = RowViewport::default();
    }

    /// Advances a smooth scroll in progress by one step.
    pub(crate) fn tick(&mut self) {
        self.viewport.advance();
    }

    /// Runs the work that has to wait until the frame has been drawn.
    ///
    /// Returns `true` if an icon changed and the frame should be drawn again.
    pub(crate) fn after_render(&mut self, props: &ResultsListProps) -> bool {
        if let Some(outcome) = self.list.on_render_settled(props.selected_index, &mut self.viewport) {
            debug!("Scroll after render: {:?}", outcome);
        }

        self.load_icons(props)
    }

    fn load_icons(&mut self, props: &ResultsListProps) -> bool {
        let mut changed = false;

        for &index in self.viewport.visible_rows() {
            let Some(item) = props.item_at(index) else {
                continue;
            };

            let element = self
                .icons
                .entry(item.key())
                .or_insert_with(|| IconElement::new(item.fav_icon_url().unwrap_or_default()));

            if !element.needs_load() {
                continue;
            }

            match self.loader.load(&element.src) {
                Ok(glyph) => element.loaded = Some(glyph),
                Err(e) => {
                    debug!("Icon for {:?} failed: {}", item.key(), e);
                    self.list.handle_image_error(element);
                }
            }

            changed = true;
        }

        changed
    }

    fn icon_glyph(&self, key: &ItemKey) -> &'static str {
        match self.icons.get(key) {
            Some(IconElement { loaded: Some(glyph), .. }) => *glyph,
            Some(IconElement { broken: true, .. }) => ICON_BROKEN,
            _ => ICON_PENDING,
        }
    }
}
