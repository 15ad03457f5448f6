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

//! Upcoming tracks view and selection management.
//!
//! This module coordinates the table of tracks queued behind the current
//! one, providing wrapping selection movement and translating the selection
//! into a queue position for removal requests. The track list itself is
//! shared with the queue model and replaced wholesale on every snapshot.

mod render;

use std::sync::{Arc, Mutex};

use ratatui::widgets::TableState;

use crate::model::Track;

pub(crate) struct UpcomingView {
    tracks: Arc<Mutex<Vec<Track>>>,
    pub(crate) table_state: TableState,
}

impl UpcomingView {
    pub(crate) fn new(tracks: Arc<Mutex<Vec<Track>>>) -> Self {
        Self {
            tracks,
            table_state: TableState::default(),
        }
    }

    pub(crate) fn next(&mut self) {
        let len = self.tracks.lock().unwrap().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn previous(&mut self) {
        let len = self.tracks.lock().unwrap().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Index of the selected track within the full queue, the current track
    /// being index 0.
    pub(crate) fn selected_queue_index(&self) -> Option<usize> {
        let len = self.tracks.lock().unwrap().len();
        self.table_state.selected().filter(|i| *i < len).map(|i| i + 1)
    }

    /// Clamps the selection after the track list was replaced.
    pub(crate) fn sync_selection(&mut self) {
        let len = self.tracks.lock().unwrap().len();
        match self.table_state.selected() {
            Some(_) if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(titles: &[&str]) -> UpcomingView {
        let tracks = titles
            .iter()
            .map(|title| Track {
                id: title.to_lowercase(),
                title: title.to_string(),
                caption: None,
            })
            .collect();
        UpcomingView::new(Arc::new(Mutex::new(tracks)))
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut view = view(&["A", "B"]);

        view.next();
        assert_eq!(view.table_state.selected(), Some(0));
        view.next();
        assert_eq!(view.table_state.selected(), Some(1));
        view.next();
        assert_eq!(view.table_state.selected(), Some(0));

        view.previous();
        assert_eq!(view.table_state.selected(), Some(1));
    }

    #[test]
    fn selection_is_inert_while_the_table_is_empty() {
        let mut view = view(&[]);

        view.next();
        view.previous();

        assert_eq!(view.table_state.selected(), None);
        assert_eq!(view.selected_queue_index(), None);
    }

    #[test]
    fn the_selected_row_maps_to_its_queue_position() {
        let mut view = view(&["A", "B", "C"]);

        view.next();
        view.next();

        // Row 1 of the upcoming table is queue index 2, the current track
        // occupies index 0
        assert_eq!(view.selected_queue_index(), Some(2));
    }

    #[test]
    fn sync_clamps_the_selection_to_a_shrunken_list() {
        let mut view = view(&["A", "B", "C"]);
        view.next();
        view.next();
        view.next();
        assert_eq!(view.table_state.selected(), Some(2));

        view.tracks.lock().unwrap().pop();
        view.tracks.lock().unwrap().pop();
        view.sync_selection();
        assert_eq!(view.table_state.selected(), Some(0));

        view.tracks.lock().unwrap().clear();
        view.sync_selection();
        assert_eq!(view.table_state.selected(), None);
    }
}
