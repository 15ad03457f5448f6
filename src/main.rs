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

//! # Jukebox Queue Remote TUI.
//!
//! A terminal remote control for a jukebox playback-queue service.
//!
//! The service resolves free-text search queries to tracks and owns the
//! playback queue; this application submits queries, shows the current
//! track plus the upcoming tracks, and re-renders whenever the service
//! pushes a fresh queue snapshot over its server-sent-events channel.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Command Worker** owns the HTTP client and performs all service
//!   requests off the UI thread.
//! * A **Changes Listener** holds the live-update subscription open and
//!   feeds pushed snapshots into the event loop.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels. Snapshots replace the view state wholesale; when a submission
//! response and a pushed update race, the last one processed wins.

mod actions;
mod components;
mod config;
mod model;
mod remote;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
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
    components::{QueryBar, UpcomingView},
    config::AppConfig,
    model::queue::Queue,
    remote::changes,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub queue: Queue,

    pub query_bar: QueryBar,
    pub upcoming_view: UpcomingView,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let queue = Queue::new();
        let upcoming_tracks = queue.upcoming_tracks();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            queue,
            query_bar: QueryBar::new(),
            upcoming_view: UpcomingView::new(upcoming_tracks),
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error
/// if any part of the execution fails.
fn main() -> Result<()> {
    init_logging();

    let config = config::load_config();

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, command_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Initializes the logging backend and a panic hook that records the
/// panicking thread.
///
/// Must run before the terminal is switched to the alternate screen so that
/// early startup failures remain visible.
fn init_logging() {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Info);
    clog.init();

    std::panic::set_hook(Box::new(|panic_info| {
        let current_thread = thread::current();
        let thread_name = current_thread.name().unwrap_or("unnamed");
        log::error!("panic in thread '{}': {}", thread_name, panic_info);
    }));
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A command worker to process asynchronous [`AppCommand`]s against the
///   jukebox service.
/// * A listener holding the live-update subscription open.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
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
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    // Spawn a background worker to process application commands asynchronously.
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(&app.config, command_rx, command_event_tx);

    // Spawn the live-update listener, the service pushes a queue snapshot on
    // every change.
    let changes_event_tx = app.event_tx.clone();
    changes::spawn_changes_listener(&app.config, changes_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to populate the view before the first push arrives
    app.command_tx.send(AppCommand::FetchQueue)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
