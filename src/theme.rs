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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and maps the colour
//! tokens used by row and tag descriptors onto terminal colours. Tinted values
//! are blended over the background, since terminals have no alpha channel.

use ratatui::style::Color;

use crate::components::results_list::presentation::{ColorToken, StyleValue};

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) background_secondary: Color,
    pub(crate) background_tertiary: Color,
    pub(crate) background_hover: Color,

    pub(crate) primary_colour: Color,
    pub(crate) info_colour: Color,
    pub(crate) amber_colour: Color,
    pub(crate) amber_dark_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) text_colour: Color,
    pub(crate) text_muted: Color,
    pub(crate) text_quaternary: Color,
    pub(crate) match_colour: Color,
    pub(crate) border_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 24, 32),
            background_secondary: Color::Rgb(34, 34, 44),
            background_tertiary: Color::Rgb(48, 48, 60),
            background_hover: Color::Rgb(58, 58, 80),

            primary_colour: Color::Rgb(99, 102, 241),
            info_colour: Color::Rgb(56, 189, 248),
            amber_colour: Color::Rgb(245, 158, 11),
            amber_dark_colour: Color::Rgb(217, 119, 6),
            error_colour: Color::Rgb(239, 68, 68),

            text_colour: Color::Rgb(235, 235, 240),
            text_muted: Color::Rgb(148, 148, 160),
            text_quaternary: Color::Rgb(110, 110, 122),
            match_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
        }
    }

    pub(crate) fn token(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::BackgroundSecondary => self.background_secondary,
            ColorToken::BackgroundTertiary => self.background_tertiary,
            ColorToken::BackgroundHover => self.background_hover,
            ColorToken::Primary => self.primary_colour,
            ColorToken::Info => self.info_colour,
            ColorToken::Amber => self.amber_colour,
            ColorToken::AmberDark => self.amber_dark_colour,
            ColorToken::TextQuaternary => self.text_quaternary,
        }
    }

    /// Resolves a style value to a colour, `None` meaning transparent.
    pub(crate) fn resolve(&self, value: StyleValue) -> Option<Color> {
        match value {
            StyleValue::Transparent => None,
            StyleValue::Token(token) => Some(self.token(token)),
            StyleValue::Tint(token, alpha) => Some(Self::blend(self.token(token), self.background_colour, alpha)),
        }
    }

    /// Mixes `colour` over `background` at the given opacity.
    ///
    /// Non-RGB colours cannot be mixed and are returned unchanged.
    pub(crate) fn blend(colour: Color, background: Color, alpha: f32) -> Color {
        let alpha = alpha.clamp(0.0, 1.0);
        match (colour, background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let mix = |c: u8, base: u8| (c as f32 * alpha + base as f32 * (1.0 - alpha)).round() as u8;
                Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
            }
            _ => colour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_has_no_colour() {
        assert_eq!(Theme::default().resolve(StyleValue::Transparent), None);
    }

    #[test]
    fn tokens_map_to_palette() {
        let theme = Theme::default();
        assert_eq!(theme.resolve(StyleValue::Token(ColorToken::Info)), Some(theme.info_colour));
    }

    #[test]
    fn tint_blends_over_background() {
        let blended = Theme::blend(Color::Rgb(200, 100, 0), Color::Rgb(0, 0, 0), 0.5);
        assert_eq!(blended, Color::Rgb(100, 50, 0));

        assert_eq!(Theme::blend(Color::Rgb(10, 20, 30), Color::Rgb(0, 0, 0), 1.0), Color::Rgb(10, 20, 30));
        assert_eq!(Theme::blend(Color::Blue, Color::Rgb(0, 0, 0), 0.2), Color::Blue);
    }
}
