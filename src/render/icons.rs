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

//! Unicode symbols for the TUI.
//!
//! Item icons are drawn as single glyphs picked by where the icon was loaded
//! from. These are selected for compatibility with most modern terminal
//! emulators and fonts.

// Item icons
pub(crate) const ICON_EMBEDDED: &str = "\u{2726}";
pub(crate) const ICON_INLINE: &str = "\u{25AA}";
pub(crate) const ICON_FILE: &str = "\u{25CF}";
pub(crate) const ICON_PENDING: &str = "\u{00B7}";
pub(crate) const ICON_BROKEN: &str = " ";

// Row border, drawn in the row's border colour
pub(crate) const ROW_EDGE: &str = "\u{258C}";

pub(crate) const SPINNER: [&str; 4] = ["\u{25D0}", "\u{25D3}", "\u{25D1}", "\u{25D2}"];

pub(crate) const WARNING: &str = "\u{26A0}\u{FE0E}";
