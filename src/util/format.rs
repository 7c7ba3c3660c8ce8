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

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Formats a URL for a column `width` characters wide.
///
/// The web scheme is dropped and anything that does not fit is cut with an
/// ellipsis.
///
/// # Examples
///
/// ```
/// assert_eq!(display_url("https://docs.rs/ratatui", 40), "docs.rs/ratatui");
/// assert_eq!(display_url("https://docs.rs/ratatui", 8), "docs.rs\u{2026}");
/// ```
pub(crate) fn display_url(url: &str, width: usize) -> String {
    let url = SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .unwrap_or(url);

    if url.chars().count() <= width {
        return url.to_string();
    }

    if width == 0 {
        return String::new();
    }

    let mut cut: String = url.chars().take(width - 1).collect();
    cut.push('\u{2026}');
    cut
}
