//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\listening-insights\config.toml
//! - macOS: ~/Library/Application Support/listening-insights/config.toml
//! - Linux: ~/.config/listening-insights/config.toml
//!
//! Every setting has a default, and the defaults reproduce the standard
//! report exactly. A missing or broken file never stops an analysis.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Metric tuning
    pub analysis: AnalysisSettings,

    /// Report output settings
    pub output: OutputConfig,
}

/// Knobs for the metric calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// How many artists `top_artists` lists (also the diversity population)
    pub top_artists: usize,

    /// How many genres `top_genres` lists
    pub top_genres: usize,

    /// How many artist pairs `collaboration_network` lists
    pub top_collaborations: usize,

    /// How many of the most recent ISO weeks `genre_evolution` keeps
    pub genre_weeks: usize,

    /// Mood classification thresholds
    pub mood: MoodThresholds,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_artists: 10,
            top_genres: 10,
            top_collaborations: 5,
            genre_weeks: 4,
            mood: MoodThresholds::default(),
        }
    }
}

/// Strict bounds for the mood categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodThresholds {
    /// energy > this is "energetic"
    pub energetic_above: f64,
    /// energy < this is "calm"
    pub calm_below: f64,
    /// valence > this is "happy"
    pub happy_above: f64,
    /// valence < this is "sad"
    pub sad_below: f64,
    /// danceability > this is "danceable"
    pub danceable_above: f64,
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            energetic_above: 0.6,
            calm_below: 0.4,
            happy_above: 0.6,
            sad_below: 0.4,
            danceable_above: 0.7,
        }
    }
}

impl MoodThresholds {
    /// Every threshold must be a finite value in [0, 1].
    pub fn validate(&self) -> crate::error::Result<()> {
        let named = [
            ("energetic_above", self.energetic_above),
            ("calm_below", self.calm_below),
            ("happy_above", self.happy_above),
            ("sad_below", self.sad_below),
            ("danceable_above", self.danceable_above),
        ];
        for (name, value) in named {
            if !(0.0..=1.0).contains(&value) {
                return Err(crate::error::Error::config(format!(
                    "analysis.mood.{name} must be between 0 and 1, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent the JSON report
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("listening-insights"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if the file doesn't exist or can't be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from an explicit path
///
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to an explicit path
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("Failed to write config file {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to rename {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, #[source] std::io::Error),
}
