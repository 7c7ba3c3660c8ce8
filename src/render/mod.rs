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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

pub(crate) mod icons;
mod prompt;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{App, render::prompt::draw_prompt};

const KEY_HINTS: &str = "/ search  \u{2191}\u{2193} move  z centre  \u{23CE} open  right-click menu  q quit ";

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the query line, the results and a status line.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the
///   results view to record where rows and the context menu were drawn.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_prompt(f, outer[0], app);

    let props = app.results.props(&app.search);
    app.results_view.draw(f, outer[2], &props, &app.theme, app.tick);

    draw_status(f, outer[3], app);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let [left, right] = Layout::horizontal([Constraint::Min(0), Constraint::Length(KEY_HINTS.chars().count() as u16)])
        .areas(area);

    let message = match &app.status {
        Some(status) => status.clone(),
        None => format!("{} results", app.search.results().len()),
    };

    let style = Style::default().fg(app.theme.text_muted).bg(app.theme.background_secondary);

    f.render_widget(Paragraph::new(Line::from(Span::raw(format!(" {message}")))).style(style), left);
    f.render_widget(Paragraph::new(KEY_HINTS).style(style), right);
}
