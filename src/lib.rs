//! Listening Insights - descriptive statistics over a music-listening history.
//!
//! Given a snapshot of recently played tracks, top tracks and per-track audio
//! features, the engine derives a fixed report: audio-feature summaries, top
//! artists and genres, temporal habits, mood profile, collaboration pairs,
//! listening velocity, genre evolution, artist loyalty and track repetition.
//!
//! The computation is a pure function of its input. Every intermediate table
//! is local to a single [`analytics::analyze`] call.
//!
//! # Example
//!
//! ```ignore
//! use listening_insights::{analytics, config::AnalysisSettings, input};
//!
//! let snapshot = input::from_json_str(r#"{"top_tracks": []}"#)?;
//! let report = analytics::analyze(&snapshot, &AnalysisSettings::default());
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
#[cfg(test)]
pub mod test_utils;
