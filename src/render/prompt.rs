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

//! Render the query line.
//!
//! This module renders the visual representation of the query prompt, the
//! current text, the cursor and a placeholder while it is empty.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const PROMPT: &str = "/ ";
const PLACEHOLDER: &str = "Search tabs, bookmarks and history";

pub(crate) fn draw_prompt(f: &mut Frame, area: Rect, app: &App) {
    let prompt = &app.prompt;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let marker_colour = if prompt.active() { app.theme.primary_colour } else { app.theme.text_muted };

    let text = if prompt.value().is_empty() && !prompt.active() {
        Span::styled(PLACEHOLDER, Style::default().fg(app.theme.text_quaternary))
    } else {
        Span::styled(prompt.value(), Style::default().fg(app.theme.text_colour))
    };

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(PROMPT, Style::default().fg(marker_colour)), text])),
        container[0],
    );

    if prompt.active() {
        let cursor_x = container[0].x + PROMPT.len() as u16 + prompt.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
