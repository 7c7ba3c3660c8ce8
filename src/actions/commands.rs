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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload potentially
//! blocking file access from the main UI thread. It provides a dedicated
//! worker loop that translates [`AppCommand`] requests into store operations
//! and broadcasts the results back to the application via [`AppEvent`]s.

use std::{
    path::{Path, PathBuf},
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use log::{info, warn};

use crate::{actions::events::AppEvent, config::AppConfig, model::store};

#[derive(Debug)]
pub(crate) enum AppCommand {
    LoadItems,
}

/// Spawns a background thread to process application commands.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let items_file = PathBuf::from(&config.items_file);

    thread::spawn(move || {
        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&items_file, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single command.
///
/// A failed load is not an error of the command itself: it is reported as
/// [`AppEvent::LoadFailed`] so the results list can offer a retry.
fn handle_command(items_file: &Path, command: AppCommand, event_tx: &Sender<AppEvent>) -> Result<()> {
    match command {
        AppCommand::LoadItems => {
            event_tx.send(AppEvent::ItemsLoading)?;

            match store::load_items(items_file) {
                Ok(items) => {
                    info!("Loaded {} items from {}", items.len(), items_file.display());
                    event_tx.send(AppEvent::ItemsLoaded(items))?;
                }
                Err(e) => {
                    warn!("Loading items failed: {}", e);
                    event_tx.send(AppEvent::LoadFailed(e.to_string()))?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::mpsc};

    use super::*;

    #[test]
    fn load_reports_progress_then_items() {
        let path = std::env::temp_dir().join(format!("tabseek-commands-{}.json", std::process::id()));
        fs::write(&path, r#"[{"type": "history", "id": 3, "title": "News", "url": "https://news.example"}]"#).unwrap();

        let (tx, rx) = mpsc::channel();
        handle_command(&path, AppCommand::LoadItems, &tx).unwrap();
        fs::remove_file(&path).ok();

        assert!(matches!(rx.try_recv(), Ok(AppEvent::ItemsLoading)));
        match rx.try_recv() {
            Ok(AppEvent::ItemsLoaded(items)) => assert_eq!(items.len(), 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let (tx, rx) = mpsc::channel();
        handle_command(Path::new("/nonexistent/tabseek/items.json"), AppCommand::LoadItems, &tx).unwrap();

        assert!(matches!(rx.try_recv(), Ok(AppEvent::ItemsLoading)));
        assert!(matches!(rx.try_recv(), Ok(AppEvent::LoadFailed(_))));
    }
}
