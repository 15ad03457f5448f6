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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the track
//! records announced by the jukebox service and the queue snapshot grouping
//! them. A snapshot is transient view state, replaced wholesale whenever the
//! service responds to a submission or pushes a change.

pub(crate) mod queue;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Track {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) caption: Option<String>,
}

/// One complete state of the service's playback queue.
///
/// Index 0 of `tracks` is the track currently playing, the remainder are
/// upcoming. The `etag` changes whenever the service regenerates the queue.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct QueueSnapshot {
    pub(crate) etag: Option<String>,
    pub(crate) tracks: Vec<Track>,
}

impl QueueSnapshot {
    pub(crate) fn current(&self) -> Option<&Track> {
        self.tracks.first()
    }

    pub(crate) fn upcoming(&self) -> &[Track] {
        self.tracks.get(1..).unwrap_or(&[])
    }
}
