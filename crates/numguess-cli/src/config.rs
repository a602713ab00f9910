//! Game configuration loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use numguess_core::DEFAULT_LEADERBOARD_SIZE;
use serde::Deserialize;

const APP_DIR: &str = "numguess";
const STORE_FILE: &str = "players.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the player store
    pub data_path: PathBuf,
    /// Rows shown on the leaderboard
    pub leaderboard_size: usize,
    /// Clear the terminal before each screen
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            clear_screen: true,
        }
    }
}

impl Config {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// `<config_dir>/numguess/config.toml`, or `config.toml` when the platform
/// has no config directory
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(STORE_FILE))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE))
}
