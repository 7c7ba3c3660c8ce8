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

//! Search state.
//!
//! This module owns every loaded item and the filtered view of them that
//! matches the current query. Items removed or closed by the user stay in the
//! results, flagged as deleted, until the next reload.

use log::debug;

use crate::model::{ItemKey, SearchItem};

pub(crate) struct Search {
    items: Vec<SearchItem>,
    results: Vec<SearchItem>,
    query: String,
    min_query_len: usize,
}

impl Search {
    pub(crate) fn new(min_query_len: usize) -> Self {
        Self {
            items: vec![],
            results: vec![],
            query: String::new(),
            min_query_len,
        }
    }

    pub(crate) fn set_items(&mut self, items: Vec<SearchItem>) {
        self.items = items;
        self.refresh();
    }

    pub(crate) fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.refresh();
        }
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    /// The query that should drive highlighting, if it is long enough to
    /// filter on.
    pub(crate) fn effective_query(&self) -> Option<&str> {
        let query = self.query.trim();
        (query.chars().count() >= self.min_query_len).then_some(query)
    }

    pub(crate) fn results(&self) -> &[SearchItem] {
        &self.results
    }

    /// Makes the tab the active one in its window.
    ///
    /// Returns `false` when the item is not a live tab.
    pub(crate) fn activate(&mut self, key: ItemKey) -> bool {
        let window_id = match self.find(key) {
            Some(SearchItem::Tab(tab)) if !tab.is_deleted => tab.window_id,
            _ => return false,
        };

        for item in self.items.iter_mut() {
            if let SearchItem::Tab(tab) = item {
                if tab.window_id == window_id {
                    tab.active = tab.id == key.id;
                }
            }
        }

        self.refresh();
        true
    }

    /// Flags the item as deleted, returning `false` if it was not found or
    /// already deleted.
    pub(crate) fn delete(&mut self, key: ItemKey) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.key() == key) else {
            return false;
        };

        if item.is_deleted() {
            return false;
        }

        item.mark_deleted();
        self.refresh();
        true
    }

    fn find(&self, key: ItemKey) -> Option<&SearchItem> {
        self.items.iter().find(|item| item.key() == key)
    }

    fn refresh(&mut self) {
        self.results = match self.effective_query() {
            Some(query) => {
                let needle = query.to_lowercase();
                self.items
                    .iter()
                    .filter(|item| {
                        item.title().to_lowercase().contains(&needle)
                            || item.url().to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect()
            }
            None => self.items.clone(),
        };

        debug!("Search '{}' matched {} of {} items", self.query, self.results.len(), self.items.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemKind, TabItem, fixtures::{bookmark, tab}};

    fn search_with(items: Vec<SearchItem>) -> Search {
        let mut search = Search::new(2);
        search.set_items(items);
        search
    }

    #[test]
    fn short_queries_show_everything() {
        let mut search = search_with(vec![tab(1, false, false), bookmark(2, false)]);
        search.set_query("b");
        assert_eq!(search.results().len(), 2);
        assert_eq!(search.effective_query(), None);
    }

    #[test]
    fn filters_on_title_and_url() {
        let mut search = search_with(vec![tab(1, false, false), bookmark(2, false)]);
        search.set_query("BOOKMARK");
        assert_eq!(search.results().len(), 1);
        assert_eq!(search.results()[0].kind(), ItemKind::Bookmark);

        search.set_query("example.com/tab");
        assert_eq!(search.results().len(), 1);
        assert_eq!(search.results()[0].kind(), ItemKind::Tab);
    }

    #[test]
    fn deleted_items_stay_in_results() {
        let mut search = search_with(vec![bookmark(2, false)]);
        assert!(search.delete(bookmark(2, false).key()));
        assert!(search.results()[0].is_deleted());
        assert!(!search.delete(bookmark(2, false).key()));
    }

    #[test]
    fn activate_switches_active_tab_within_window() {
        let other_window = SearchItem::Tab(TabItem {
            id: 3,
            title: "Other".into(),
            url: "https://other.example".into(),
            fav_icon_url: None,
            is_deleted: false,
            active: true,
            window_id: 2,
        });
        let mut search = search_with(vec![tab(1, true, false), tab(2, false, false), other_window]);

        assert!(search.activate(tab(2, false, false).key()));

        let results = search.results();
        assert!(!results[0].is_active_tab());
        assert!(results[1].is_active_tab());
        assert!(results[2].is_active_tab());
    }

    #[test]
    fn activate_rejects_bookmarks_and_closed_tabs() {
        let mut search = search_with(vec![tab(1, false, true), bookmark(2, false)]);
        assert!(!search.activate(tab(1, false, true).key()));
        assert!(!search.activate(bookmark(2, false).key()));
    }
}
