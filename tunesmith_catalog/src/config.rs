// Data-driven catalogue configuration.
//
// Tunables for page generation live in `CatalogConfig`, loadable from JSON.
// Every field has a default, so a config file only needs the keys it
// overrides (`{}` is a valid config). The page size is not configurable:
// pagination arithmetic and item-seed offsets assume 20 items per page.
//
// Changing any value changes generated pages; two processes must share a
// config to produce identical output.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Largest accepted word or sentence count.
pub const MAX_COUNT: usize = 64;

/// Inclusive `[min, max]` count bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        CountRange { min, max }
    }
}

/// All tunable catalogue parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the cover-art service, without trailing slash.
    pub cover_base_url: String,
    /// Requested cover edge length in pixels.
    pub cover_size: u32,
    /// Probability that an album title is replaced with the single label.
    pub single_probability: f64,
    /// Words per song title.
    pub title_words: CountRange,
    /// Words per album title.
    pub album_words: CountRange,
    /// Sentences per review.
    pub review_sentences: CountRange,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            cover_base_url: "https://api.dicebear.com/9.x".to_string(),
            cover_size: 300,
            single_probability: 0.1,
            title_words: CountRange::new(2, 4),
            album_words: CountRange::new(1, 2),
            review_sentences: CountRange::new(2, 4),
        }
    }
}

impl CatalogConfig {
    /// Parse a config from a JSON string; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.single_probability) {
            return Err(ConfigError::Invalid(format!(
                "single_probability {} is outside [0, 1]",
                self.single_probability
            )));
        }
        for (name, range) in [
            ("title_words", self.title_words),
            ("album_words", self.album_words),
            ("review_sentences", self.review_sentences),
        ] {
            if range.min > range.max {
                return Err(ConfigError::Invalid(format!(
                    "{name}: min {} exceeds max {}",
                    range.min, range.max
                )));
            }
            if range.max > MAX_COUNT {
                return Err(ConfigError::Invalid(format!(
                    "{name}: max {} exceeds {MAX_COUNT}",
                    range.max
                )));
            }
        }
        Ok(())
    }
}
