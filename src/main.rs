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

//! # Tab Search TUI.
//!
//! A terminal search over open tabs, bookmarks and history entries read from a
//! browser snapshot.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Workers** load the snapshot via asynchronous command
//!   processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod assets;
mod components;
mod config;
mod highlight;
mod logging;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    assets::AssetResolver,
    components::{
        Prompt, ResultsView,
        results_list::{IconResolver, ResultsList, ResultsListProps},
    },
    config::AppConfig,
    highlight::SmartHighlighter,
    model::search::Search,
    theme::Theme,
};

/// Host-owned state handed to the results list on every frame.
#[derive(Debug)]
struct ResultsState {
    selected_index: i32,
    is_loading: bool,
    error: Option<String>,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self {
            selected_index: -1,
            is_loading: false,
            error: None,
        }
    }
}

impl ResultsState {
    fn props<'a>(&'a self, search: &'a Search) -> ResultsListProps<'a> {
        ResultsListProps {
            items: search.results(),
            selected_index: self.selected_index,
            is_loading: self.is_loading,
            error: self.error.as_deref(),
            search_query: search.effective_query(),
        }
    }
}

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub search: Search,
    pub results: ResultsState,
    pub status: Option<String>,
    pub tick: usize,

    pub prompt: Prompt,
    pub results_view: ResultsView,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let icon_resolver = config
            .asset_dir
            .as_ref()
            .map(|dir| Box::new(AssetResolver::new(dir)) as Box<dyn IconResolver>);

        let list = ResultsList::new(Box::new(SmartHighlighter), icon_resolver);

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            search: Search::new(config.min_query_len),
            results: ResultsState::default(),
            status: None,
            tick: 0,
            prompt: Prompt::new(),
            results_view: ResultsView::new(list),
        }
    }

    /// Changes the selected row; `-1` clears the selection.
    pub fn select(&mut self, index: i32) {
        let last = self.search.results().len() as i32 - 1;
        let index = index.clamp(-1, last);

        if index != self.results.selected_index {
            self.results.selected_index = index;
            self.results_view.list.on_selection_changed(index);
        }
    }

    pub fn move_selection(&mut self, delta: i32) {
        let index = match self.results.selected_index {
            i if i < 0 => 0,
            i => (i + delta).max(0),
        };
        self.select(index);
    }

    /// Selects the first result, after the results were replaced.
    pub fn reset_selection(&mut self) {
        let first = if self.search.results().is_empty() { -1 } else { 0 };
        self.select(first);
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let mut config = config::load_config();
    if let Some(items_file) = std::env::args().nth(1) {
        config.items_file = items_file;
    }

    logging::init_logging(&config)?;
    info!("Starting with items from {}", config.items_file);

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config.clone(), command_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, &config, command_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture so clicks reach the results list.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It also ensures the
/// cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A command worker to process asynchronous [`AppCommand`]s.
/// * An input thread to poll for keyboard and mouse events.
/// * A tick thread to drive the spinner and smooth scrolling.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    // Spawn a background worker to process application commands asynchronously.
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(config, command_rx, command_event_tx);

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                // A resize only needs a redraw.
                Ok(event::Event::Resize(_, _)) => AppEvent::Tick,
                _ => continue,
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    // Initial trigger to populate the results from the snapshot file
    app.command_tx.send(AppCommand::LoadItems).context("Failed to request items")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
