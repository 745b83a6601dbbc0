//! Adapter layer: convert payload DTOs into a [`ListeningSnapshot`].
//!
//! This is the ONLY place where wire shapes become canonical entities, and
//! the only place field-level defaulting happens ("Unknown" artist names,
//! zero-valued features, skipped falsy feature records).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;

use super::dto;
use crate::error::{Error, Result};
use crate::model::{
    ArtistCredit, AudioFeatures, Credits, ListeningSnapshot, PlayEvent, PlayTime, TopTrack, UNKNOWN,
};

/// Timestamp layouts accepted when the value is not RFC 3339. Read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Build the canonical snapshot from a decoded payload.
pub fn to_snapshot(payload: dto::SnapshotPayload) -> Result<ListeningSnapshot> {
    let plays: Vec<PlayEvent> = payload
        .recent_tracks
        .unwrap_or_default()
        .into_iter()
        .map(to_play)
        .collect();

    let top_tracks: Vec<TopTrack> = payload
        .top_tracks
        .unwrap_or_default()
        .into_iter()
        .map(to_top_track)
        .collect();

    let mut features = Vec::new();
    let mut skipped = 0usize;
    for (track_id, value) in payload.audio_features.unwrap_or_default() {
        if is_falsy(&value) {
            skipped += 1;
            continue;
        }
        features.push(to_features(track_id, value)?);
    }

    tracing::debug!(
        plays = plays.len(),
        top_tracks = top_tracks.len(),
        features = features.len(),
        skipped_features = skipped,
        "Normalized listening snapshot"
    );

    Ok(ListeningSnapshot::new(plays, top_tracks, features))
}

fn to_play(record: dto::TrackRecord) -> PlayEvent {
    let played_at = match record.played_at {
        None => PlayTime::Missing,
        Some(raw) if raw.trim().is_empty() => PlayTime::Missing,
        Some(raw) => match parse_timestamp(&raw) {
            Some(at) => PlayTime::At(at),
            None => {
                tracing::debug!(track_id = ?record.track_id, raw = %raw, "Unparseable play timestamp");
                PlayTime::Unparseable(raw)
            }
        },
    };

    PlayEvent {
        track_id: record.track_id,
        name: record.name,
        artists: to_credits(record.artists),
        played_at,
    }
}

fn to_top_track(record: dto::TrackRecord) -> TopTrack {
    TopTrack {
        track_id: record.track_id,
        name: record.name,
        artists: to_credits(record.artists),
    }
}

fn to_credits(artists: Option<Vec<dto::ArtistRecord>>) -> Credits {
    artists
        .unwrap_or_default()
        .into_iter()
        .map(|artist| {
            ArtistCredit::new(
                artist.name.unwrap_or_else(|| UNKNOWN.to_string()),
                artist.genres.unwrap_or_default(),
            )
        })
        .collect()
}

fn to_features(track_id: String, value: Value) -> Result<AudioFeatures> {
    if !value.is_object() {
        return Err(Error::invalid_input(format!(
            "audio_features[{track_id:?}] must be an object or a falsy value"
        )));
    }

    let record: dto::FeatureRecord = serde_json::from_value(value)?;
    Ok(AudioFeatures {
        track_id,
        energy: record.energy.unwrap_or(0.0),
        valence: record.valence.unwrap_or(0.0),
        danceability: record.danceability.unwrap_or(0.0),
        tempo: record.tempo.unwrap_or(0.0),
        acousticness: record.acousticness.unwrap_or(0.0),
        instrumentalness: record.instrumentalness.unwrap_or(0.0),
        speechiness: record.speechiness.unwrap_or(0.0),
        liveness: record.liveness.unwrap_or(0.0),
    })
}

/// JSON truthiness: null, false, 0, "", [] and {} are falsy.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Parse a play timestamp.
///
/// RFC 3339 keeps its offset; naive date-times and bare dates are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::json;

    fn payload(value: Value) -> dto::SnapshotPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_payload_gives_empty_tables() {
        let snapshot = to_snapshot(dto::SnapshotPayload::default()).unwrap();
        assert!(snapshot.plays().is_empty());
        assert!(snapshot.top_tracks().is_empty());
        assert!(snapshot.features().is_empty());
    }

    #[test]
    fn test_falsy_feature_records_are_skipped() {
        let snapshot = to_snapshot(payload(json!({
            "audio_features": {
                "a": {"energy": 0.8},
                "b": null,
                "c": {},
                "d": false,
                "e": 0,
                "f": ""
            }
        })))
        .unwrap();

        assert_eq!(snapshot.features().len(), 1);
        let a = snapshot.features_for("a").unwrap();
        assert_eq!(a.energy, 0.8);
        assert_eq!(a.valence, 0.0);
        assert_eq!(a.tempo, 0.0);
    }

    #[test]
    fn test_truthy_non_object_feature_is_rejected() {
        let err = to_snapshot(payload(json!({"audio_features": {"a": [0.5]}}))).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_missing_artist_name_defaults_to_unknown() {
        let snapshot = to_snapshot(payload(json!({
            "top_tracks": [{"artists": [{"genres": ["jazz"]}, {"name": "Nina Simone"}]}]
        })))
        .unwrap();

        let artists = &snapshot.top_tracks()[0].artists;
        assert_eq!(artists[0].name, UNKNOWN);
        assert_eq!(artists[0].genres, vec!["jazz".to_string()]);
        assert!(artists[1].genres.is_empty());
    }

    #[test]
    fn test_play_timestamps() {
        let snapshot = to_snapshot(payload(json!({
            "recent_tracks": [
                {"track_id": "a", "played_at": "2024-03-04T10:15:00.000Z"},
                {"track_id": "b", "played_at": "not a date"},
                {"track_id": "c", "played_at": ""},
                {"track_id": "d"}
            ]
        })))
        .unwrap();

        let plays = snapshot.plays();
        assert!(matches!(plays[0].played_at, PlayTime::At(_)));
        assert_eq!(plays[1].played_at, PlayTime::Unparseable("not a date".into()));
        assert_eq!(plays[2].played_at, PlayTime::Missing);
        assert_eq!(plays[3].played_at, PlayTime::Missing);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let with_offset = parse_timestamp("2024-03-04T22:15:00+02:00").unwrap();
        assert_eq!(with_offset.hour(), 22);

        let naive = parse_timestamp("2024-03-04 08:30:00").unwrap();
        assert_eq!(naive.hour(), 8);
        assert_eq!(naive.offset().local_minus_utc(), 0);

        let date_only = parse_timestamp("2024-03-04").unwrap();
        assert_eq!(date_only.hour(), 0);

        assert!(parse_timestamp("04/03/2024").is_none());
    }
}
