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

//! HTTP access to the jukebox queue service.
//!
//! The service exposes the playback queue as a small HTTP surface: `GET
//! /tracks` reads the queue, `POST /tracks` resolves a search query to a
//! track and appends it, `DELETE /tracks/{position}` removes an entry, and
//! `/changes` pushes snapshots (see [`changes`]). All business logic lives
//! in the service; this client only moves snapshots back and forth.

pub(crate) mod changes;
pub(crate) mod wire;

use std::time::Duration;

use thiserror::Error;

use crate::{config::AppConfig, model::QueueSnapshot};

#[derive(Debug, Error)]
pub(crate) enum RemoteError {
    #[error("jukebox request failed: {0}")]
    Request(#[from] ureq::Error),

    #[error("malformed queue snapshot: {0}")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Blocking client for the queue endpoints, owned by the command worker.
pub(crate) struct RemoteClient {
    agent: ureq::Agent,
    base_url: String,
}

impl RemoteClient {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(15))
            .timeout_write(Duration::from_secs(15))
            .build();

        Self {
            agent,
            base_url: endpoint_base(&config.server_url),
        }
    }

    /// Reads the full queue state.
    pub(crate) fn fetch_queue(&self) -> Result<QueueSnapshot, RemoteError> {
        let response = self.agent.get(&self.url("/tracks")).call()?;

        Self::snapshot_from(response)
    }

    /// Submits a search query.
    ///
    /// The service resolves the query to a track, appends it to the queue,
    /// and responds with the resulting snapshot.
    pub(crate) fn search(&self, query: &str) -> Result<QueueSnapshot, RemoteError> {
        let body = wire::encode_query(query)?;
        let response = self
            .agent
            .post(&self.url("/tracks"))
            .set("Content-Type", "application/json")
            .send_string(&body)?;

        Self::snapshot_from(response)
    }

    /// Removes the track at the given queue position, position 0 being the
    /// current track.
    ///
    /// The service answers with a bare status; the updated queue arrives
    /// through the changes channel.
    pub(crate) fn remove_track(&self, position: usize) -> Result<(), RemoteError> {
        self.agent
            .delete(&format!("{}/tracks/{}", self.base_url, position))
            .call()?;

        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn snapshot_from(response: ureq::Response) -> Result<QueueSnapshot, RemoteError> {
        let etag = response.header("ETag").map(ToOwned::to_owned);
        let body = response.into_string()?;

        Ok(wire::parse_snapshot(&body, etag)?)
    }
}

pub(crate) fn endpoint_base(endpoint: &str) -> String {
    endpoint.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_base_strips_trailing_slashes_and_whitespace() {
        assert_eq!(endpoint_base(" http://localhost:8080/ "), "http://localhost:8080");
        assert_eq!(endpoint_base("http://jukebox.local"), "http://jukebox.local");
    }
}
