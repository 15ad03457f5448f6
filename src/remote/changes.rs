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

//! Live-update subscription.
//!
//! The service pushes a full queue snapshot over a server-sent-events stream
//! at `/changes` whenever the queue changes. A background thread holds the
//! stream open, decodes the SSE framing, and forwards each snapshot to the
//! event loop. When the stream drops the thread reconnects after a fixed
//! delay, matching the default behavior of a browser `EventSource`.

use std::{
    io::{self, BufRead, BufReader},
    sync::mpsc::Sender,
    thread,
    time::Duration,
};

use crate::{actions::events::AppEvent, config::AppConfig, remote, remote::wire};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const RECONNECT_DELAY: Duration = Duration::from_secs(3);

/// Spawns the background thread holding the `/changes` subscription open.
///
/// Each pushed snapshot is sent to the event loop as
/// [`AppEvent::QueueUpdated`]. The thread exits only when the event channel
/// is closed, meaning the application has shut down.
pub(crate) fn spawn_changes_listener(config: &AppConfig, event_tx: Sender<AppEvent>) {
    let url = format!("{}/changes", remote::endpoint_base(&config.server_url));

    thread::spawn(move || {
        // No read timeout here, the stream stays silent while the queue is
        // unchanged.
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .build();

        loop {
            match agent.get(&url).set("Accept", "text/event-stream").call() {
                Ok(response) => {
                    let mut reader = BufReader::new(response.into_reader());
                    if !pump_events(&mut reader, &event_tx) {
                        return;
                    }
                }
                Err(err) => log::warn!("changes subscription failed: {err}"),
            }

            thread::sleep(RECONNECT_DELAY);
        }
    });
}

/// Decodes events off an open stream until it ends.
///
/// Returns `false` when the application side of the event channel has hung
/// up and the listener should stop entirely.
fn pump_events<R: BufRead>(reader: &mut R, event_tx: &Sender<AppEvent>) -> bool {
    loop {
        match read_event(reader) {
            Ok(Some(data)) => match wire::parse_snapshot(&data, None) {
                Ok(snapshot) => {
                    if event_tx.send(AppEvent::QueueUpdated(snapshot)).is_err() {
                        return false;
                    }
                }
                Err(err) => log::warn!("skipping malformed change payload: {err}"),
            },
            Ok(None) => {
                log::info!("changes stream closed by server");
                return true;
            }
            Err(err) => {
                log::warn!("changes stream read failed: {err}");
                return true;
            }
        }
    }
}

/// Reads one server-sent event and returns its data payload.
///
/// `data:` lines accumulate, joined with newlines, until a blank line
/// dispatches the event. Other fields (`event:`, `id:`, `retry:`) and
/// comment lines are ignored. Returns `Ok(None)` at end of stream; an event
/// truncated by the end of the stream is discarded.
fn read_event<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut data: Vec<String> = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let field = line.trim_end_matches(['\r', '\n']);

        if field.is_empty() {
            if !data.is_empty() {
                return Ok(Some(data.join("\n")));
            }
            continue;
        }

        if let Some(value) = field.strip_prefix("data:") {
            data.push(value.strip_prefix(' ').unwrap_or(value).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::mpsc};

    use super::*;

    #[test]
    fn reads_a_single_event() {
        let mut stream = Cursor::new("data: {\"etag\": \"a\", \"tracks\": []}\n\n");

        let event = read_event(&mut stream).unwrap();

        assert_eq!(event.as_deref(), Some("{\"etag\": \"a\", \"tracks\": []}"));
    }

    #[test]
    fn joins_multi_line_data_with_newlines() {
        let mut stream = Cursor::new("data: first\ndata: second\n\n");

        let event = read_event(&mut stream).unwrap();

        assert_eq!(event.as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn ignores_comments_and_non_data_fields() {
        let mut stream = Cursor::new(": keep-alive\nevent: change\nid: 7\nretry: 3000\ndata: payload\n\n");

        let event = read_event(&mut stream).unwrap();

        assert_eq!(event.as_deref(), Some("payload"));
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let mut stream = Cursor::new("data: payload\r\n\r\n");

        let event = read_event(&mut stream).unwrap();

        assert_eq!(event.as_deref(), Some("payload"));
    }

    #[test]
    fn discards_an_event_truncated_by_end_of_stream() {
        let mut stream = Cursor::new("data: partial");

        assert!(read_event(&mut stream).unwrap().is_none());
    }

    #[test]
    fn reads_consecutive_events_in_order() {
        let mut stream = Cursor::new("data: one\n\ndata: two\n\n");

        assert_eq!(read_event(&mut stream).unwrap().as_deref(), Some("one"));
        assert_eq!(read_event(&mut stream).unwrap().as_deref(), Some("two"));
        assert!(read_event(&mut stream).unwrap().is_none());
    }

    #[test]
    fn pumps_snapshots_and_skips_malformed_payloads() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut stream = Cursor::new(
            "data: [{\"id\": \"a\", \"title\": \"First\"}]\n\n\
             data: broken\n\n\
             data: {\"etag\": \"e2\", \"tracks\": []}\n\n",
        );

        assert!(pump_events(&mut stream, &event_tx));

        match event_rx.try_recv() {
            Ok(AppEvent::QueueUpdated(snapshot)) => {
                assert_eq!(snapshot.tracks[0].title, "First")
            }
            other => panic!("expected a queue update, got {other:?}"),
        }
        match event_rx.try_recv() {
            Ok(AppEvent::QueueUpdated(snapshot)) => {
                assert_eq!(snapshot.etag.as_deref(), Some("e2"))
            }
            other => panic!("expected a queue update, got {other:?}"),
        }
        assert!(event_rx.try_recv().is_err());
    }
}
