//! Runtime configuration for client apps.
//!
//! Values come from defaults, then an optional JSON file, then `TAKENOTE_*`
//! environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::activation::SYNC_INTERVAL;
use crate::error::{Error, Result};
use crate::util::normalize_text_option;

pub const ENV_DB_PATH: &str = "TAKENOTE_DB_PATH";
pub const ENV_SYNC_INTERVAL_MS: &str = "TAKENOTE_SYNC_INTERVAL_MS";
pub const ENV_LOG: &str = "TAKENOTE_LOG";

const DEFAULT_LOG_FILTER: &str = "takenote=info";
const DB_FILE_NAME: &str = "takenote.db";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub sync_interval_ms: u64,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            sync_interval_ms: u64::try_from(SYNC_INTERVAL.as_millis()).unwrap_or(20_000),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load config from an optional JSON file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        if config.sync_interval_ms == 0 {
            return Err(Error::InvalidInput(
                "sync_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    /// Apply overrides looked up by environment variable name.
    ///
    /// Blank values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(path) = normalize_text_option(lookup(ENV_DB_PATH)) {
            self.db_path = PathBuf::from(path);
        }

        if let Some(raw) = normalize_text_option(lookup(ENV_SYNC_INTERVAL_MS)) {
            self.sync_interval_ms = parse_interval(&raw)?;
        }

        if let Some(filter) = normalize_text_option(lookup(ENV_LOG)) {
            self.log_filter = filter;
        }

        Ok(self)
    }

    pub const fn sync_interval(&self) -> Duration {
        Duration::from_millis(self.sync_interval_ms)
    }
}

/// `<data dir>/takenote/takenote.db`, or the working directory when the
/// platform has no data directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("takenote"))
        .unwrap_or_default()
        .join(DB_FILE_NAME)
}

fn parse_interval(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(0) => Err(Error::InvalidInput(format!(
            "{ENV_SYNC_INTERVAL_MS} must be greater than zero"
        ))),
        Ok(value) => Ok(value),
        Err(_) => Err(Error::InvalidInput(format!(
            "{ENV_SYNC_INTERVAL_MS} must be a number of milliseconds, got '{raw}'"
        ))),
    }
}
