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

//! Domain models and core data structures.
//!
//! This module defines the entries shown in the results list (open tabs,
//! bookmarks and history entries) as read from a browser snapshot file.
//!
//! Items are owned by the [`search::Search`] state. The results list only ever
//! reads them; deletion and activation are applied here on behalf of the user
//! intents the list emits.

pub(crate) mod search;
pub(crate) mod store;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ItemKind {
    Tab,
    Bookmark,
    History,
}

/// Identity of an item across reloads and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ItemKey {
    pub(crate) kind: ItemKind,
    pub(crate) id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TabItem {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) fav_icon_url: Option<String>,
    #[serde(default)]
    pub(crate) is_deleted: bool,
    #[serde(default)]
    pub(crate) active: bool,
    #[serde(default)]
    pub(crate) window_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookmarkItem {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) fav_icon_url: Option<String>,
    #[serde(default)]
    pub(crate) is_deleted: bool,
    #[serde(default)]
    pub(crate) folder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HistoryItem {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) fav_icon_url: Option<String>,
    #[serde(default)]
    pub(crate) is_deleted: bool,
    #[serde(default)]
    pub(crate) visit_count: u32,
}

/// One entry of the results sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum SearchItem {
    Tab(TabItem),
    Bookmark(BookmarkItem),
    History(HistoryItem),
}

impl SearchItem {
    pub(crate) fn kind(&self) -> ItemKind {
        match self {
            SearchItem::Tab(_) => ItemKind::Tab,
            SearchItem::Bookmark(_) => ItemKind::Bookmark,
            SearchItem::History(_) => ItemKind::History,
        }
    }

    pub(crate) fn id(&self) -> i64 {
        match self {
            SearchItem::Tab(tab) => tab.id,
            SearchItem::Bookmark(bookmark) => bookmark.id,
            SearchItem::History(entry) => entry.id,
        }
    }

    pub(crate) fn key(&self) -> ItemKey {
        ItemKey {
            kind: self.kind(),
            id: self.id(),
        }
    }

    pub(crate) fn title(&self) -> &str {
        match self {
            SearchItem::Tab(tab) => &tab.title,
            SearchItem::Bookmark(bookmark) => &bookmark.title,
            SearchItem::History(entry) => &entry.title,
        }
    }

    pub(crate) fn url(&self) -> &str {
        match self {
            SearchItem::Tab(tab) => &tab.url,
            SearchItem::Bookmark(bookmark) => &bookmark.url,
            SearchItem::History(entry) => &entry.url,
        }
    }

    pub(crate) fn fav_icon_url(&self) -> Option<&str> {
        match self {
            SearchItem::Tab(tab) => tab.fav_icon_url.as_deref(),
            SearchItem::Bookmark(bookmark) => bookmark.fav_icon_url.as_deref(),
            SearchItem::History(entry) => entry.fav_icon_url.as_deref(),
        }
    }

    pub(crate) fn is_deleted(&self) -> bool {
        match self {
            SearchItem::Tab(tab) => tab.is_deleted,
            SearchItem::Bookmark(bookmark) => bookmark.is_deleted,
            SearchItem::History(entry) => entry.is_deleted,
        }
    }

    /// The `active` flag only has meaning for tabs.
    pub(crate) fn is_active_tab(&self) -> bool {
        matches!(self, SearchItem::Tab(tab) if tab.active)
    }

    pub(crate) fn mark_deleted(&mut self) {
        match self {
            SearchItem::Tab(tab) => {
                tab.is_deleted = true;
                tab.active = false;
            }
            SearchItem::Bookmark(bookmark) => bookmark.is_deleted = true,
            SearchItem::History(entry) => entry.is_deleted = true,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{BookmarkItem, HistoryItem, SearchItem, TabItem};

    pub(crate) fn tab(id: i64, active: bool, is_deleted: bool) -> SearchItem {
        SearchItem::Tab(TabItem {
            id,
            title: format!("Tab {id}"),
            url: format!("https://example.com/tab/{id}"),
            fav_icon_url: None,
            is_deleted,
            active,
            window_id: 1,
        })
    }

    pub(crate) fn bookmark(id: i64, is_deleted: bool) -> SearchItem {
        SearchItem::Bookmark(BookmarkItem {
            id,
            title: format!("Bookmark {id}"),
            url: format!("https://example.com/bookmark/{id}"),
            fav_icon_url: None,
            is_deleted,
            folder: None,
        })
    }

    pub(crate) fn history(id: i64, is_deleted: bool) -> SearchItem {
        SearchItem::History(HistoryItem {
            id,
            title: format!("Visited {id}"),
            url: format!("https://example.com/history/{id}"),
            fav_icon_url: None,
            is_deleted,
            visit_count: 3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{bookmark, history, tab};
    use super::*;

    #[test]
    fn active_flag_only_counts_for_tabs() {
        assert!(tab(1, true, false).is_active_tab());
        assert!(!tab(1, false, false).is_active_tab());
        assert!(!bookmark(2, false).is_active_tab());
        assert!(!history(3, false).is_active_tab());
    }

    #[test]
    fn deleting_a_tab_also_clears_active() {
        let mut item = tab(1, true, false);
        item.mark_deleted();
        assert!(item.is_deleted());
        assert!(!item.is_active_tab());
    }

    #[test]
    fn deserializes_tagged_items() {
        let json = r#"[
            {"type": "tab", "id": 7, "title": "Docs", "url": "https://docs.rs", "active": true, "windowId": 2},
            {"type": "bookmark", "id": 9, "title": "Rust", "url": "https://rust-lang.org", "isDeleted": true, "favIconUrl": "file:///tmp/r.png"}
        ]"#;

        let items: Vec<SearchItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind(), ItemKind::Tab);
        assert!(items[0].is_active_tab());
        assert_eq!(items[1].kind(), ItemKind::Bookmark);
        assert!(items[1].is_deleted());
        assert_eq!(items[1].fav_icon_url(), Some("file:///tmp/r.png"));
    }
}
