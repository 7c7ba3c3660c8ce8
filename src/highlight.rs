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

//! Query highlighting.
//!
//! [`SmartHighlighter`] marks every case-insensitive occurrence of each query
//! word. When no word occurs literally it falls back to fuzzy matching, so
//! abbreviations like `gh` still light up `GitHub`.
//!
//! Matched runs are wrapped in `<mark>` tags and the text itself is escaped,
//! so a title containing markup of its own draws as written. [`parse_markup`]
//! splits such a string back into plain and matched fragments for drawing.

use std::borrow::Cow;

use nucleo_matcher::{
    Config, Matcher, Utf32Str,
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
};

use crate::components::results_list::Highlighter;

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

pub(crate) struct SmartHighlighter;

impl Highlighter for SmartHighlighter {
    fn highlight(&self, text: &str, query: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut marked = vec![false; chars.len()];

        let literal = mark_literal(&chars, query, &mut marked);
        if !literal {
            mark_fuzzy(&chars, query, &mut marked);
        }

        render(&chars, &marked)
    }
}

fn chars_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn mark_literal(chars: &[char], query: &str, marked: &mut [bool]) -> bool {
    let mut found = false;

    for word in query.split_whitespace() {
        let needle: Vec<char> = word.chars().collect();
        if needle.is_empty() || needle.len() > chars.len() {
            continue;
        }

        for start in 0..=chars.len() - needle.len() {
            let window = &chars[start..start + needle.len()];
            if window.iter().zip(&needle).all(|(&a, &b)| chars_eq(a, b)) {
                marked[start..start + needle.len()].fill(true);
                found = true;
            }
        }
    }

    found
}

fn mark_fuzzy(chars: &[char], query: &str, marked: &mut [bool]) {
    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(query, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy);

    // One haystack slot per char, so match indices line up with `marked`.
    let haystack = Utf32Str::Unicode(chars);
    let mut indices = Vec::new();

    if pattern.indices(haystack, &mut matcher, &mut indices).is_none() {
        return;
    }

    for index in indices {
        if let Some(slot) = marked.get_mut(index as usize) {
            *slot = true;
        }
    }
}

fn render(chars: &[char], marked: &[bool]) -> String {
    let mut out = String::with_capacity(chars.len() + MARK_OPEN.len() + MARK_CLOSE.len());
    let mut open = false;

    for (&c, &is_match) in chars.iter().zip(marked) {
        if is_match != open {
            out.push_str(if is_match { MARK_OPEN } else { MARK_CLOSE });
            open = is_match;
        }
        push_escaped(&mut out, c);
    }

    if open {
        out.push_str(MARK_CLOSE);
    }

    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        c => out.push(c),
    }
}

/// Escapes text that is drawn without highlighting, so it parses back to
/// itself.
pub(crate) fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    Cow::Owned(out)
}

fn unescape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&"))
}

/// A run of highlighted or plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment<'a> {
    pub(crate) text: Cow<'a, str>,
    pub(crate) matched: bool,
}

pub(crate) fn parse_markup(markup: &str) -> Vec<Fragment<'_>> {
    let mut fragments = vec![];
    let mut rest = markup;
    let mut matched = false;

    while !rest.is_empty() {
        let tag = if matched { MARK_CLOSE } else { MARK_OPEN };
        let (text, next) = match rest.find(tag) {
            Some(at) => (&rest[..at], &rest[at + tag.len()..]),
            None => (rest, ""),
        };

        if !text.is_empty() {
            fragments.push(Fragment { text: unescape_markup(text), matched });
        }

        rest = next;
        matched = !matched;
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hl(text: &str, query: &str) -> String {
        SmartHighlighter.highlight(text, query)
    }

    #[test]
    fn marks_literal_words_case_insensitively() {
        assert_eq!(hl("Rust Docs", "docs"), "Rust <mark>Docs</mark>");
        assert_eq!(hl("rust docs rust", "RUST"), "<mark>rust</mark> docs <mark>rust</mark>");
    }

    #[test]
    fn adjacent_words_merge_into_one_mark() {
        assert_eq!(hl("abcd", "ab cd"), "<mark>abcd</mark>");
    }

    #[test]
    fn falls_back_to_fuzzy() {
        assert_eq!(hl("GitHub", "gh"), "<mark>G</mark>it<mark>H</mark>ub");
    }

    #[test]
    fn no_match_leaves_text_alone() {
        assert_eq!(hl("Rust", "zzz"), "Rust");
    }

    #[test]
    fn parses_markup_into_fragments() {
        let fragments = parse_markup("Rust <mark>Docs</mark>!");
        assert_eq!(
            fragments,
            vec![
                Fragment { text: "Rust ".into(), matched: false },
                Fragment { text: "Docs".into(), matched: true },
                Fragment { text: "!".into(), matched: false },
            ]
        );
    }

    #[test]
    fn plain_text_is_one_fragment() {
        assert_eq!(parse_markup("plain"), vec![Fragment { text: "plain".into(), matched: false }]);
        assert!(parse_markup("").is_empty());
    }

    fn drawn(markup: &str) -> (String, String) {
        let fragments = parse_markup(markup);
        let text = fragments.iter().map(|f| f.text.as_ref()).collect();
        let matched = fragments.iter().filter(|f| f.matched).map(|f| f.text.as_ref()).collect();
        (text, matched)
    }

    #[test]
    fn titles_with_markup_draw_as_written() {
        let title = "<mark>: The Mark Text element - HTML";

        assert_eq!(drawn(&escape_markup(title)), (title.to_string(), String::new()));
        assert_eq!(drawn(&hl(title, "html")), (title.to_string(), "HTML".to_string()));
        assert_eq!(drawn(&hl("Q&A <b>", "a")), ("Q&A <b>".to_string(), "A".to_string()));
    }

    #[test]
    fn escaping_leaves_plain_text_borrowed() {
        assert!(matches!(escape_markup("Rust Docs"), Cow::Borrowed("Rust Docs")));
        assert_eq!(escape_markup("a<b>&c"), "a&lt;b&gt;&amp;c");
    }

    #[test]
    fn fuzzy_marks_land_on_chars_after_combining_marks() {
        assert_eq!(hl("Cafe\u{301} Bar", "cb"), "<mark>C</mark>afe\u{301} <mark>B</mark>ar");
    }
}
