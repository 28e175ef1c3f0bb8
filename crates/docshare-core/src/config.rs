//! Configuration module
//!
//! Settings come from the environment (a `.env` file is loaded first if present).
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DOCSHARE_TREE_PATH` | unset |
//! | `DOCSHARE_DOCUMENTS_DIR` | `documents` |
//! | `DOCSHARE_RECENT_LIMIT` | `3` |
//! | `DOCSHARE_WATCH_INTERVAL_MS` | `1000` |

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    DEFAULT_DOCUMENTS_DIR, DEFAULT_RECENT_LIMIT, DEFAULT_WATCH_INTERVAL_MS, ENV_DOCUMENTS_DIR,
    ENV_RECENT_LIMIT, ENV_TREE_PATH, ENV_WATCH_INTERVAL_MS, MIN_WATCH_INTERVAL_MS,
};

#[derive(Clone, Debug)]
pub struct Config {
    /// Exported document tree read by the CLI when `--tree` is not given
    pub tree_path: Option<PathBuf>,
    pub documents_dir: PathBuf,
    pub recent_limit: usize,
    pub watch_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tree_path: None,
            documents_dir: PathBuf::from(DEFAULT_DOCUMENTS_DIR),
            recent_limit: DEFAULT_RECENT_LIMIT,
            watch_interval_ms: DEFAULT_WATCH_INTERVAL_MS,
        }
    }
}

/// Variable lookup over the process environment, with `.env` loaded first.
pub fn env_lookup() -> impl Fn(&str) -> Option<String> {
    dotenvy::dotenv().ok();
    |key| env::var(key).ok()
}

impl Config {
    /// Parse settings from an arbitrary variable lookup.
    ///
    /// Only malformed values fail here. Range checks are left to
    /// [`Config::validate`] so callers can apply their own overrides first.
    pub fn from_vars<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tree_path = lookup(ENV_TREE_PATH)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let documents_dir = lookup(ENV_DOCUMENTS_DIR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENTS_DIR));

        let recent_limit = match lookup(ENV_RECENT_LIMIT) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                anyhow::anyhow!("{} must be a positive number, got {:?}", ENV_RECENT_LIMIT, raw)
            })?,
            None => DEFAULT_RECENT_LIMIT,
        };

        let watch_interval_ms = match lookup(ENV_WATCH_INTERVAL_MS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!(
                    "{} must be a number of milliseconds, got {:?}",
                    ENV_WATCH_INTERVAL_MS,
                    raw
                )
            })?,
            None => DEFAULT_WATCH_INTERVAL_MS,
        };

        Ok(Config {
            tree_path,
            documents_dir,
            recent_limit,
            watch_interval_ms,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.recent_limit == 0 {
            return Err(anyhow::anyhow!("{} must be at least 1", ENV_RECENT_LIMIT));
        }
        if self.watch_interval_ms < MIN_WATCH_INTERVAL_MS {
            return Err(anyhow::anyhow!(
                "{} must be at least {}",
                ENV_WATCH_INTERVAL_MS,
                MIN_WATCH_INTERVAL_MS
            ));
        }
        Ok(())
    }

    pub fn tree_path(&self) -> Option<&Path> {
        self.tree_path.as_deref()
    }

    pub fn watch_interval(&self) -> Duration {
        Duration::from_millis(self.watch_interval_ms)
    }
}
