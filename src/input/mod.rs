//! Input decoding: JSON payload to [`ListeningSnapshot`].
//!
//! - **DTOs** (`dto.rs`) - exact payload shapes
//! - **Adapter** (`adapter.rs`) - normalization into the canonical model
//!
//! A payload that is not a JSON object, or whose fields have the wrong
//! shape, is a hard error. Missing collections are not.

pub mod adapter;
pub mod dto;

use std::io::Read;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::ListeningSnapshot;

/// Decode a snapshot from an already-parsed JSON value.
pub fn from_value(value: Value) -> Result<ListeningSnapshot> {
    if !value.is_object() {
        return Err(Error::invalid_input("payload must be a JSON object"));
    }
    let payload: dto::SnapshotPayload = serde_json::from_value(value)?;
    adapter::to_snapshot(payload)
}

/// Decode a snapshot from a JSON string.
pub fn from_json_str(json: &str) -> Result<ListeningSnapshot> {
    from_value(serde_json::from_str(json)?)
}

/// Decode a snapshot from a reader, consuming it entirely.
pub fn from_reader(mut reader: impl Read) -> Result<ListeningSnapshot> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    from_json_str(&buf)
}
