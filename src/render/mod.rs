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
//! terminal tick or state change. The whole frame is rebuilt from the latest
//! queue snapshot each time; no widget state survives an update beyond the
//! table selection.

mod current;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::App;

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`]:
///
/// * The query bar on the top line.
/// * The current track panel, blank while the queue is empty.
/// * The upcoming tracks table, blank while fewer than two tracks are
///   queued.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to reflect changes and update internal view state (like the table
///   selection).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: query bar, current track, upcoming tracks
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    app.query_bar.draw(f, outer[0], &app.theme);

    current::draw_current(f, outer[1], app);

    app.upcoming_view.draw(f, outer[2], &app.theme);
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use ratatui::{Terminal, backend::TestBackend};

    use crate::{
        App,
        config::AppConfig,
        model::{QueueSnapshot, Track},
    };

    use super::*;

    fn track(title: &str) -> Track {
        Track {
            id: title.to_lowercase(),
            title: title.to_string(),
            caption: None,
        }
    }

    fn app_with_tracks(titles: &[&str]) -> App {
        let (command_tx, _command_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), command_tx);
        app.queue.set_snapshot(QueueSnapshot {
            etag: None,
            tracks: titles.iter().map(|t| track(t)).collect(),
        });
        app
    }

    fn rendered_lines(app: &mut App) -> Vec<String> {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        let cells: Vec<String> = buffer
            .content
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        cells
            .chunks(width)
            .map(|line| line.concat())
            .collect()
    }

    fn screen_text(app: &mut App) -> String {
        rendered_lines(app).join("\n")
    }

    #[test]
    fn an_empty_queue_shows_neither_panel() {
        let mut app = app_with_tracks(&[]);

        let text = screen_text(&mut app);

        assert!(!text.contains("Up Next"));
        assert!(!text.contains("queued"));
    }

    #[test]
    fn a_single_track_shows_only_the_current_panel() {
        let mut app = app_with_tracks(&["Lonely Mountain Song"]);

        let text = screen_text(&mut app);

        assert!(text.contains("Lonely Mountain Song"));
        assert!(!text.contains("Up Next"));
    }

    #[test]
    fn a_full_queue_numbers_upcoming_rows_from_slot_two() {
        let mut app = app_with_tracks(&["Alpha Song", "Bravo Song", "Charlie Song"]);

        let lines = rendered_lines(&mut app);
        let text = lines.join("\n");

        assert!(text.contains("Alpha Song"));
        assert!(text.contains("Up Next | 2 tracks"));

        let bravo = lines.iter().find(|l| l.contains("Bravo Song")).unwrap();
        assert!(bravo.contains('2'));
        let charlie = lines.iter().find(|l| l.contains("Charlie Song")).unwrap();
        assert!(charlie.contains('3'));
    }

    #[test]
    fn a_new_snapshot_fully_replaces_the_rendered_queue() {
        let mut app = app_with_tracks(&["Alpha Song", "Bravo Song", "Charlie Song"]);
        let _ = screen_text(&mut app);

        app.queue.set_snapshot(QueueSnapshot {
            etag: None,
            tracks: vec![track("Delta Song")],
        });
        app.upcoming_view.sync_selection();

        let text = screen_text(&mut app);
        assert!(text.contains("Delta Song"));
        assert!(!text.contains("Bravo Song"));
        assert!(!text.contains("Up Next"));
    }
}
