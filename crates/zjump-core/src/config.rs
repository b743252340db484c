//! Engine configuration.
//!
//! The configuration is an immutable value: when the host's preferences
//! change, a fresh `Config` replaces the old one wholesale instead of
//! mutating live fields.

use crate::error::{Error, Result};
use crate::path_utils::expand_tilde;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_PATH: &str = "~/.z";
pub const DEFAULT_MAX_RESULTS: usize = 9;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the z database; a leading `~` is expanded at load time.
    pub store_path: PathBuf,
    /// Upper bound on entries returned per search.
    pub max_results: usize,
    /// Whether a selection feeds its rank bump back into the database.
    pub update_store: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: expand_tilde(DEFAULT_STORE_PATH),
            max_results: DEFAULT_MAX_RESULTS,
            update_store: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// defaults above.
    pub fn load(path: &Path) -> Result<Config> {
        let raw = std::fs::read_to_string(path).map_err(Error::ConfigRead)?;
        let mut config: Config = toml::from_str(&raw)?;
        config.store_path = expand_tilde(&config.store_path);
        Ok(config)
    }
}
