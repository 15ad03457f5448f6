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
//! This module implements the command pattern used to offload blocking
//! service requests from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppCommand`] requests into HTTP calls against the
//! jukebox service and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! The worker is serial, so at most one submission is in flight at a time;
//! there is no cancellation of an earlier request when a new one is queued.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{actions::events::AppEvent, config::AppConfig, remote::RemoteClient};

#[derive(Debug)]
pub(crate) enum AppCommand {
    /// Submit a search query; the service appends the resolved track.
    Search(String),
    /// Re-read the full queue state.
    FetchQueue,
    /// Remove the track at a queue position, position 0 being current.
    RemoveTrack(usize),
}

/// Spawns a background thread to process application commands.
///
/// This worker thread initializes its own HTTP client and enters a blocking
/// loop, listening for incoming [`AppCommand`]s. Failed requests surface as
/// [`AppEvent::Error`]; per the service contract they are logged and
/// otherwise dropped.
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
    let config = config.clone();

    thread::spawn(move || {
        let client = RemoteClient::new(&config);

        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&client, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single command.
///
/// This function implements the logic for each command and sends the result
/// back through the application event channel.
fn handle_command(
    client: &RemoteClient,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Search(query) => {
            let snapshot = client.search(&query)?;
            event_tx.send(AppEvent::QueueUpdated(snapshot))?;
        }
        AppCommand::FetchQueue => {
            let snapshot = client.fetch_queue()?;
            event_tx.send(AppEvent::QueueUpdated(snapshot))?;
        }
        AppCommand::RemoveTrack(position) => {
            // Status-only response, the updated queue is pushed over the
            // changes channel
            client.remove_track(position)?;
        }
    }

    Ok(())
}
