// src/config/options.rs
use std::path::PathBuf;

use super::consts::{DEFAULT_LOG_PATH, MAIN_STATS_URL};

/// Options for one watcher pass. Defaults match the tracked site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Main stats page to discover active players from.
    pub main_url: String,
    /// Append-only run log.
    pub log_path: PathBuf,
    /// Fire a desktop notification per suspicious player.
    pub notify: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            main_url: MAIN_STATS_URL.to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            notify: true,
        }
    }
}
