//! Tunables of the site core, loadable from JSON.
//!
//! Every field is optional in the file; missing ones keep their defaults.
//!
//! ```json
//! { "min_query_chars": 3, "advance_delay_ms": 1500, "tiers": { "excellent_percent": 90 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::favorites::DEFAULT_FAVORITES_KEY;
use crate::quiz::{ScoreTiers, DEFAULT_ADVANCE_DELAY};
use crate::search::DEFAULT_MIN_QUERY_CHARS;
use crate::theme::DEFAULT_THEME_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site config")]
    Parse(#[source] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shorter search queries do not filter.
    pub min_query_chars: usize,
    /// Pause between answering a quiz question and moving on.
    pub advance_delay_ms: u64,
    pub favorites_key: String,
    pub theme_key: String,
    pub tiers: ScoreTiers,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            advance_delay_ms: DEFAULT_ADVANCE_DELAY.as_millis() as u64,
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            tiers: ScoreTiers::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}
