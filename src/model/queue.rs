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

//! Queue view state.
//!
//! This module holds the most recently applied queue snapshot and shares the
//! upcoming portion with the table view. The service owns queue ordering;
//! the client never merges, every applied snapshot replaces the previous one
//! in full.

use std::sync::{Arc, Mutex};

use crate::model::{QueueSnapshot, Track};

pub(crate) struct Queue {
    snapshot: QueueSnapshot,
    upcoming: Arc<Mutex<Vec<Track>>>,
}

impl Queue {
    pub(crate) fn new() -> Self {
        Self {
            snapshot: QueueSnapshot::default(),
            upcoming: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Replaces the queue state with a freshly received snapshot.
    pub(crate) fn set_snapshot(&mut self, snapshot: QueueSnapshot) {
        self.snapshot = snapshot;

        self.sync_upcoming();
    }

    pub(crate) fn current(&self) -> Option<&Track> {
        self.snapshot.current()
    }

    pub(crate) fn track_count(&self) -> usize {
        self.snapshot.tracks.len()
    }

    pub(crate) fn upcoming_tracks(&self) -> Arc<Mutex<Vec<Track>>> {
        Arc::clone(&self.upcoming)
    }

    fn sync_upcoming(&self) {
        let mut locked_tracks = self.upcoming.lock().unwrap();
        locked_tracks.clear();
        locked_tracks.extend(self.snapshot.upcoming().iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(titles: &[&str]) -> QueueSnapshot {
        QueueSnapshot {
            etag: None,
            tracks: titles
                .iter()
                .map(|title| Track {
                    id: title.to_lowercase(),
                    title: title.to_string(),
                    caption: None,
                })
                .collect(),
        }
    }

    #[test]
    fn applying_a_snapshot_shares_only_the_upcoming_tracks() {
        let mut queue = Queue::new();
        let shared = queue.upcoming_tracks();

        queue.set_snapshot(snapshot(&["First", "Second", "Third"]));

        assert_eq!(queue.current().map(|t| t.title.as_str()), Some("First"));
        let titles: Vec<String> = shared.lock().unwrap().iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["Second", "Third"]);
    }

    #[test]
    fn a_new_snapshot_replaces_prior_state_wholesale() {
        let mut queue = Queue::new();
        let shared = queue.upcoming_tracks();

        queue.set_snapshot(snapshot(&["First", "Second", "Third"]));
        queue.set_snapshot(snapshot(&["Other"]));

        assert_eq!(queue.current().map(|t| t.title.as_str()), Some("Other"));
        assert_eq!(queue.track_count(), 1);
        assert!(shared.lock().unwrap().is_empty());
    }

    #[test]
    fn an_empty_snapshot_clears_the_queue() {
        let mut queue = Queue::new();
        let shared = queue.upcoming_tracks();

        queue.set_snapshot(snapshot(&["First", "Second"]));
        queue.set_snapshot(snapshot(&[]));

        assert!(queue.current().is_none());
        assert!(shared.lock().unwrap().is_empty());
    }
}
