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
//! bridging the gap between user input (keyboard), background worker updates
//! (submission responses, pushed queue snapshots), and the UI rendering
//! pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and triggers commands to the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! A submission response and an interleaved push update both arrive here as
//! [`AppEvent::QueueUpdated`]; whichever is processed last wins.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, actions::commands::AppCommand, model::QueueSnapshot, render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// A fresh queue snapshot, from a submission response or the changes
    /// channel.
    QueueUpdated(QueueSnapshot),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::QueueUpdated(snapshot) => {
                log::debug!(
                    "applying queue snapshot: {} tracks (etag {:?})",
                    snapshot.tracks.len(),
                    snapshot.etag
                );
                app.queue.set_snapshot(snapshot);
                app.upcoming_view.sync_selection();
            }

            // The UI has no error surface, failures are only logged
            AppEvent::Error(message) => log::warn!("{message}"),

            AppEvent::Tick => {}

            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions and service commands.
///
/// This function acts as the primary input router for the TUI. While the
/// query bar is active it consumes the keystroke; otherwise the key is
/// interpreted as a global shortcut.
///
/// # Errors
///
/// Returns an error if a command fails to send to the background worker.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    let handled = app.query_bar.handle_event(event, &mut app.command_tx);
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        KeyCode::Char('r') => {
            app.command_tx.send(AppCommand::FetchQueue)?;
        }

        // Navigation in the upcoming table
        KeyCode::Char('j') | KeyCode::Down => app.upcoming_view.next(),
        KeyCode::Char('k') | KeyCode::Up => app.upcoming_view.previous(),

        // Remove the selected upcoming track, the refreshed queue arrives
        // over the changes channel
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(position) = app.upcoming_view.selected_queue_index() {
                app.command_tx.send(AppCommand::RemoveTrack(position))?;
            }
        }

        _ => {}
    }

    Ok(())
}
