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

//! Wire format of the jukebox queue service.
//!
//! The service announces queue state in two shapes: the `/tracks` endpoint
//! responds with a bare JSON array of tracks and carries the entity tag in
//! the `ETag` response header, while the `/changes` push channel wraps the
//! same array in an `{"etag": ..., "tracks": [...]}` envelope. Both shapes
//! are accepted on every path and normalized into [`QueueSnapshot`].

use serde::Deserialize;

use crate::model::{QueueSnapshot, Track};

#[derive(Debug, Deserialize)]
struct TrackPayload {
    id: String,
    title: String,
    #[serde(default)]
    caption: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotPayload {
    Envelope {
        etag: String,
        tracks: Vec<TrackPayload>,
    },
    Tracks(Vec<TrackPayload>),
}

impl From<TrackPayload> for Track {
    fn from(payload: TrackPayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            caption: payload.caption,
        }
    }
}

/// Parses a queue snapshot from a response or push payload.
///
/// The envelope's own entity tag wins over `header_etag`, which is only
/// consulted for the bare-array shape.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON in either shape.
pub(crate) fn parse_snapshot(
    body: &str,
    header_etag: Option<String>,
) -> serde_json::Result<QueueSnapshot> {
    let payload: SnapshotPayload = serde_json::from_str(body)?;

    let (etag, tracks) = match payload {
        SnapshotPayload::Envelope { etag, tracks } => (Some(etag), tracks),
        SnapshotPayload::Tracks(tracks) => (header_etag, tracks),
    };

    Ok(QueueSnapshot {
        etag,
        tracks: tracks.into_iter().map(Track::from).collect(),
    })
}

/// Encodes a search query as the submission request body.
///
/// The service reads the raw body text, so the query must arrive as a single
/// valid JSON string literal.
pub(crate) fn encode_query(query: &str) -> serde_json::Result<String> {
    serde_json::to_string(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_bare_array_shape_with_a_header_etag() {
        let body = r#"[
            {"id": "uE-1RPDqJAY", "title": "Taking the Hobbits", "caption": "https://example.org/hq.jpg"},
            {"id": "dQw4w9WgXcQ", "title": "Second Track"}
        ]"#;

        let snapshot = parse_snapshot(body, Some("abc123".to_string())).unwrap();

        assert_eq!(snapshot.etag.as_deref(), Some("abc123"));
        assert_eq!(snapshot.tracks.len(), 2);
        assert_eq!(snapshot.tracks[0].id, "uE-1RPDqJAY");
        assert_eq!(
            snapshot.tracks[0].caption.as_deref(),
            Some("https://example.org/hq.jpg")
        );
        assert_eq!(snapshot.tracks[1].caption, None);
    }

    #[test]
    fn parses_the_envelope_shape() {
        let body = r#"{
            "etag": "deadbeef",
            "tracks": [{"id": "a", "title": "Only Track", "caption": null}]
        }"#;

        let snapshot = parse_snapshot(body, None).unwrap();

        assert_eq!(snapshot.etag.as_deref(), Some("deadbeef"));
        assert_eq!(snapshot.tracks[0].title, "Only Track");
    }

    #[test]
    fn envelope_etag_wins_over_the_header() {
        let body = r#"{"etag": "fresh", "tracks": []}"#;

        let snapshot = parse_snapshot(body, Some("stale".to_string())).unwrap();

        assert_eq!(snapshot.etag.as_deref(), Some("fresh"));
    }

    #[test]
    fn parses_an_empty_queue() {
        let snapshot = parse_snapshot("[]", None).unwrap();

        assert!(snapshot.etag.is_none());
        assert!(snapshot.tracks.is_empty());
    }

    #[test]
    fn rejects_a_malformed_payload() {
        assert!(parse_snapshot("{\"tracks\": 7}", None).is_err());
        assert!(parse_snapshot("not json", None).is_err());
    }

    #[test]
    fn encodes_the_query_as_one_json_string_literal() {
        assert_eq!(
            encode_query("taking the hobbits").unwrap(),
            r#""taking the hobbits""#
        );
        assert_eq!(
            encode_query(r#"say "hello""#).unwrap(),
            r#""say \"hello\"""#
        );
    }
}
