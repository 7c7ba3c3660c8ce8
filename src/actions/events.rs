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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard and mouse), background worker
//! updates (item loading), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state,
//!    triggers commands to the background worker and applies the intents
//!    raised by the results list.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal, and work that waits for a drawn frame is run.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::{debug, error, info, warn};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::commands::AppCommand,
    components::results_list::{ContextAction, ResultsListDelegate},
    model::{ItemKind, SearchItem},
    render::draw,
};

/// Upper bound on redraws for a single event while icons settle.
const MAX_SETTLE_PASSES: usize = 4;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    Select(SearchItem),
    Retry,
    ContextAction(ContextAction, SearchItem),

    ItemsLoading,
    ItemsLoaded(Vec<SearchItem>),
    LoadFailed(String),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    render(terminal, app)?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        process_event(app, event)?;

        // Render after every event processed
        render(terminal, app)?;
    }

    Ok(())
}

/// Draws a frame, then lets the results view react to what was drawn.
///
/// Icon failures step through their fallbacks one frame at a time, so the
/// frame is drawn again while icons keep changing.
fn render(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    for _ in 0..MAX_SETTLE_PASSES {
        let props = app.results.props(&app.search);
        if !app.results_view.after_render(&props) {
            break;
        }
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

pub(crate) fn process_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => {
            let props = app.results.props(&app.search);
            app.results_view.process_mouse(mouse, &props, &app.event_tx);
        }

        AppEvent::Select(item) => navigate(app, &item),
        AppEvent::Retry => app.command_tx.send(AppCommand::LoadItems)?,
        AppEvent::ContextAction(action, item) => {
            process_context_action(app, action, &item);
            app.results_view.list.close_context_menu();
        }

        AppEvent::ItemsLoading => {
            app.results.is_loading = true;
            app.results.error = None;
        }
        AppEvent::ItemsLoaded(items) => {
            app.results.is_loading = false;
            app.search.set_items(items);
            app.results_view.reset();
            app.reset_selection();
        }
        AppEvent::LoadFailed(message) => {
            app.results.is_loading = false;
            app.results.error = Some(message);
        }

        AppEvent::Tick => {
            app.tick = app.tick.wrapping_add(1);
            app.results_view.tick();
        }

        AppEvent::Error(message) => {
            error!("{}", message);
            app.status = Some(message);
        }

        AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Switches to a tab, or opens a bookmark or history entry.
fn navigate(app: &mut App, item: &SearchItem) {
    let status = match item.kind() {
        ItemKind::Tab if app.search.activate(item.key()) => format!("Switched to {}", item.title()),
        ItemKind::Tab => format!("Tab is no longer open: {}", item.title()),
        ItemKind::Bookmark | ItemKind::History => format!("Opened {}", item.url()),
    };

    info!("{}", status);
    app.status = Some(status);
}

fn process_context_action(app: &mut App, action: ContextAction, item: &SearchItem) {
    match action {
        ContextAction::Navigate => navigate(app, item),

        ContextAction::Close | ContextAction::Remove => {
            let status = if !app.search.delete(item.key()) {
                format!("Already gone: {}", item.title())
            } else if action == ContextAction::Close {
                format!("Closed tab {}", item.title())
            } else {
                format!("Removed {}", item.title())
            };

            info!("{}", status);
            app.status = Some(status);
        }
    }
}

/// Maps keyboard input to application actions.
///
/// The query prompt sees keys first while it has focus, then the results view
/// (context menu, activation, retry), then the global bindings.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let handled = app.prompt.handle_event(&Event::Key(key));
    if handled {
        if app.prompt.value() != app.search.query() {
            app.search.set_query(app.prompt.value());
            debug!("Query changed, {} results", app.search.results().len());
            app.reset_selection();
        }
        return Ok(());
    }

    let props = app.results.props(&app.search);
    if app.results_view.process_key(key, &props, &app.event_tx) {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // Navigation: Down / j
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(1),

        // Navigation: Up / k
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-1),

        KeyCode::Home => app.select(0),
        KeyCode::End => app.select(app.search.results().len() as i32 - 1),

        _ => {}
    }

    Ok(())
}

impl ResultsListDelegate for Sender<AppEvent> {
    fn on_select(&self, item: &SearchItem) {
        if let Err(e) = self.send(AppEvent::Select(item.clone())) {
            warn!("Dropped select event: {}", e);
        }
    }

    fn on_retry(&self) {
        if let Err(e) = self.send(AppEvent::Retry) {
            warn!("Dropped retry event: {}", e);
        }
    }

    fn on_context_action(&self, action: ContextAction, item: &SearchItem) {
        if let Err(e) = self.send(AppEvent::ContextAction(action, item.clone())) {
            warn!("Dropped context action event: {}", e);
        }
    }
}
