//! # Storage Configuration
//!
//! Unit counts and capacities for the three storage groups, plus the period of
//! the background reallocation loop. Loaded from a JSON file:
//!
//! ```json
//! {
//!   "num_coolers": 1,
//!   "cooler_cap": 6,
//!   "num_heaters": 1,
//!   "heater_cap": 6,
//!   "num_shelves": 1,
//!   "shelf_cap": 12,
//!   "reallocation_interval_ms": 1000
//! }
//! ```
//!
//! Loading never blocks the facility from starting: a missing file is created
//! with the defaults, and an unreadable or malformed one falls back to them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while reading or writing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file or its directory could not be accessed.
    #[error("Config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid configuration.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Storage layout of the facility. Zero units for a class means that class
/// never accepts orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FulfillmentConfig {
    pub num_coolers: usize,
    pub cooler_cap: usize,
    pub num_heaters: usize,
    pub heater_cap: usize,
    pub num_shelves: usize,
    pub shelf_cap: usize,
    pub reallocation_interval_ms: u64,
}

impl Default for FulfillmentConfig {
    fn default() -> Self {
        Self {
            num_coolers: 1,
            cooler_cap: 6,
            num_heaters: 1,
            heater_cap: 6,
            num_shelves: 1,
            shelf_cap: 12,
            reallocation_interval_ms: 1000,
        }
    }
}

impl FulfillmentConfig {
    /// Period of the background reallocation loop (at least 1ms).
    pub fn reallocation_interval(&self) -> Duration {
        Duration::from_millis(self.reallocation_interval_ms.max(1))
    }
}

/// Loads the configuration at `path`, falling back to defaults.
///
/// A missing file is created with the default configuration.
pub fn load_config(path: impl AsRef<Path>) -> FulfillmentConfig {
    let path = path.as_ref();
    match try_load_config(path) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded storage configuration");
            config
        }
        Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            let config = FulfillmentConfig::default();
            if let Err(e) = save_config(path, &config) {
                warn!(error = %e, "Could not write default configuration");
            } else {
                info!(path = %path.display(), "Wrote default storage configuration");
            }
            config
        }
        Err(e) => {
            warn!(error = %e, "Using default storage configuration");
            FulfillmentConfig::default()
        }
    }
}

/// Reads and parses the configuration at `path` without any fallback.
pub fn try_load_config(path: impl AsRef<Path>) -> Result<FulfillmentConfig, ConfigError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}

/// Writes `config` as pretty JSON, creating the parent directory if needed.
pub fn save_config(path: impl AsRef<Path>, config: &FulfillmentConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(io_error)?;
    }
    let data = serde_json::to_string_pretty(config)?;
    std::fs::write(path, data).map_err(io_error)
}
