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

//! Presentation of individual result rows.
//!
//! Everything here is a pure function of an item and the current selection.
//! Descriptors are rebuilt on every frame and describe a row in terms of
//! utility classes and theme colour tokens; the [`Theme`](crate::theme::Theme)
//! turns the tokens into terminal colours when drawing.

use std::{borrow::Cow, collections::BTreeMap, fmt};

use crate::model::{ItemKind, SearchItem};

const ROW_CLASSES: &str = "flex items-center p-3 my-0.5 rounded-lg transition-all duration-150 border";
const TAG_CLASSES: &str = "px-2 py-0.5 rounded text-xs font-medium uppercase tracking-wider";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum StyleProperty {
    BackgroundColor,
    BorderColor,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ColorToken {
    BackgroundSecondary,
    BackgroundTertiary,
    BackgroundHover,
    Primary,
    Info,
    Amber,
    AmberDark,
    TextQuaternary,
}

impl ColorToken {
    pub(crate) fn name(self) -> &'static str {
        match self {
            ColorToken::BackgroundSecondary => "background-secondary",
            ColorToken::BackgroundTertiary => "background-tertiary",
            ColorToken::BackgroundHover => "background-hover",
            ColorToken::Primary => "primary",
            ColorToken::Info => "info",
            ColorToken::Amber => "amber",
            ColorToken::AmberDark => "amber-dark",
            ColorToken::TextQuaternary => "text-quaternary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum StyleValue {
    Transparent,
    Token(ColorToken),
    /// A token drawn at reduced opacity over the background.
    Tint(ColorToken, f32),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Transparent => write!(f, "transparent"),
            StyleValue::Token(token) => write!(f, "rgb(var(--color-{}))", token.name()),
            StyleValue::Tint(token, alpha) => write!(f, "rgb(var(--color-{}) / {})", token.name(), alpha),
        }
    }
}

pub(crate) type StyleMap = BTreeMap<StyleProperty, StyleValue>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RowPresentation {
    pub(crate) classes: String,
    pub(crate) style: StyleMap,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TagPresentation {
    pub(crate) classes: String,
    pub(crate) style: StyleMap,
    pub(crate) text: &'static str,
}

/// Which of the mutually exclusive row treatments applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowState {
    Deleted,
    Selected,
    ActiveTab,
    Normal,
}

impl RowState {
    pub(crate) fn of(item: &SearchItem, index: usize, selected_index: i32) -> Self {
        let is_selected = usize::try_from(selected_index).is_ok_and(|selected| selected == index);

        if item.is_deleted() {
            RowState::Deleted
        } else if is_selected {
            RowState::Selected
        } else if item.is_active_tab() {
            RowState::ActiveTab
        } else {
            RowState::Normal
        }
    }
}

pub(crate) fn has_class(classes: &str, class: &str) -> bool {
    classes.split_whitespace().any(|c| c == class)
}

pub(crate) fn classify(item: &SearchItem, index: usize, selected_index: i32) -> RowPresentation {
    let (extra, background, border) = match RowState::of(item, index, selected_index) {
        RowState::Deleted => (
            "opacity-50 cursor-not-allowed",
            StyleValue::Token(ColorToken::BackgroundSecondary),
            StyleValue::Transparent,
        ),
        RowState::Selected => (
            "cursor-pointer",
            StyleValue::Token(ColorToken::BackgroundHover),
            StyleValue::Token(ColorToken::Primary),
        ),
        RowState::ActiveTab => (
            "cursor-pointer",
            StyleValue::Tint(ColorToken::BackgroundHover, 0.5),
            StyleValue::Token(ColorToken::Info),
        ),
        RowState::Normal => ("cursor-pointer", StyleValue::Transparent, StyleValue::Transparent),
    };

    RowPresentation {
        classes: format!("{ROW_CLASSES} {extra}"),
        style: BTreeMap::from([
            (StyleProperty::BackgroundColor, background),
            (StyleProperty::BorderColor, border),
        ]),
    }
}

pub(crate) fn tag_of(item: &SearchItem) -> TagPresentation {
    let is_tab = item.kind() == ItemKind::Tab;

    let (text, background, color) = if item.is_deleted() {
        (
            if is_tab { "closed" } else { "removed" },
            StyleValue::Token(ColorToken::BackgroundTertiary),
            StyleValue::Token(ColorToken::TextQuaternary),
        )
    } else if is_tab && item.is_active_tab() {
        ("current page", StyleValue::Tint(ColorToken::Info, 0.2), StyleValue::Token(ColorToken::Info))
    } else if is_tab {
        ("tab", StyleValue::Tint(ColorToken::Primary, 0.2), StyleValue::Token(ColorToken::Primary))
    } else {
        ("saved", StyleValue::Tint(ColorToken::Amber, 0.2), StyleValue::Token(ColorToken::AmberDark))
    };

    TagPresentation {
        classes: TAG_CLASSES.to_string(),
        style: BTreeMap::from([
            (StyleProperty::BackgroundColor, background),
            (StyleProperty::Color, color),
        ]),
        text,
    }
}

/// Renders match spans for a query.
///
/// Implementations wrap matched runs in `<mark>` and `</mark>`. The text
/// around them is escaped (`&amp;`, `&lt;`, `&gt;`) and otherwise untouched.
pub(crate) trait Highlighter {
    fn highlight(&self, text: &str, query: &str) -> String;
}

/// Highlights `text` for `query`, or hands the text back as-is when there is
/// no query.
pub(crate) fn highlight<'a>(highlighter: &dyn Highlighter, text: &'a str, query: Option<&str>) -> Cow<'a, str> {
    match query {
        Some(query) if !query.is_empty() => Cow::Owned(highlighter.highlight(text, query)),
        _ => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{bookmark, history, tab};

    fn items() -> Vec<SearchItem> {
        let mut all = vec![];
        for deleted in [false, true] {
            all.push(tab(1, true, deleted));
            all.push(tab(2, false, deleted));
            all.push(bookmark(3, deleted));
            all.push(history(4, deleted));
        }
        all
    }

    fn background(p: &RowPresentation) -> StyleValue {
        p.style[&StyleProperty::BackgroundColor]
    }

    fn border(p: &RowPresentation) -> StyleValue {
        p.style[&StyleProperty::BorderColor]
    }

    #[test]
    fn deleted_wins_over_selection() {
        let item = tab(1, true, true);
        let row = classify(&item, 0, 0);

        assert!(has_class(&row.classes, "opacity-50"));
        assert!(has_class(&row.classes, "cursor-not-allowed"));
        assert_eq!(background(&row), StyleValue::Token(ColorToken::BackgroundSecondary));
        assert_eq!(border(&row), StyleValue::Transparent);
    }

    #[test]
    fn selected_wins_over_active_tab() {
        let row = classify(&tab(1, true, false), 3, 3);
        assert!(has_class(&row.classes, "cursor-pointer"));
        assert_eq!(background(&row), StyleValue::Token(ColorToken::BackgroundHover));
        assert_eq!(border(&row), StyleValue::Token(ColorToken::Primary));
    }

    #[test]
    fn active_tab_when_not_selected() {
        let row = classify(&tab(1, true, false), 3, 4);
        assert_eq!(background(&row), StyleValue::Tint(ColorToken::BackgroundHover, 0.5));
        assert_eq!(border(&row), StyleValue::Token(ColorToken::Info));
    }

    #[test]
    fn everything_else_is_transparent() {
        for item in [tab(2, false, false), bookmark(3, false), history(4, false)] {
            let row = classify(&item, 0, -1);
            assert!(has_class(&row.classes, "cursor-pointer"));
            assert_eq!(background(&row), StyleValue::Transparent);
            assert_eq!(border(&row), StyleValue::Transparent);
        }
    }

    #[test]
    fn classify_is_total_and_deterministic() {
        for item in items() {
            for (index, selected_index) in [(0, 0), (0, 1), (2, -1)] {
                let state = RowState::of(&item, index, selected_index);
                let first = classify(&item, index, selected_index);
                assert_eq!(first, classify(&item, index, selected_index));

                let expected = if item.is_deleted() {
                    RowState::Deleted
                } else if index as i32 == selected_index {
                    RowState::Selected
                } else if item.is_active_tab() {
                    RowState::ActiveTab
                } else {
                    RowState::Normal
                };
                assert_eq!(state, expected, "{item:?} at {index} with {selected_index}");
                assert!(first.classes.starts_with(ROW_CLASSES));
            }
        }
    }

    #[test]
    fn tag_labels_cover_every_combination() {
        let labels: Vec<&str> = items().iter().map(|item| tag_of(item).text).collect();
        assert_eq!(
            labels,
            vec!["current page", "tab", "saved", "saved", "closed", "closed", "removed", "removed"]
        );
    }

    #[test]
    fn tag_colours() {
        let saved = tag_of(&bookmark(1, false));
        assert_eq!(saved.style[&StyleProperty::Color], StyleValue::Token(ColorToken::AmberDark));
        assert_eq!(saved.style[&StyleProperty::BackgroundColor].to_string(), "rgb(var(--color-amber) / 0.2)");

        let closed = tag_of(&tab(1, true, true));
        assert_eq!(closed.style[&StyleProperty::Color], StyleValue::Token(ColorToken::TextQuaternary));
        assert!(has_class(&closed.classes, "uppercase"));
    }

    struct Brackets;

    impl Highlighter for Brackets {
        fn highlight(&self, text: &str, query: &str) -> String {
            text.replace(query, &format!("<mark>{query}</mark>"))
        }
    }

    #[test]
    fn highlight_without_query_is_identity() {
        assert_eq!(highlight(&Brackets, "Rust docs", None), "Rust docs");
        assert_eq!(highlight(&Brackets, "Rust docs", Some("")), "Rust docs");
        assert!(matches!(highlight(&Brackets, "Rust docs", Some("")), Cow::Borrowed(_)));
    }

    #[test]
    fn highlight_returns_highlighter_output_verbatim() {
        assert_eq!(highlight(&Brackets, "Rust docs", Some("docs")), "Rust <mark>docs</mark>");
    }
}
