//! Player configuration loaded from environment variables
//!
//! On desktop `main` loads `.env.local` / `.env` first, so these can live in
//! a file next to the workspace. On wasm the environment is empty and every
//! value falls back to its default.
//!
//! # Environment Variables
//!
//! - `CHAOSHUB_STORAGE_PATH` - Override for the desktop storage file (default: platform config dir)
//! - `CHAOSHUB_HISTORY_LIMIT` - History entries shown in the log panel (default: 10)
//! - `CHAOSHUB_SERVICE_WORKER` - Offline cache worker script URL (default: `./service-worker.js`)

use std::path::PathBuf;

/// Default number of history entries rendered.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Default offline cache worker script.
pub const DEFAULT_SERVICE_WORKER_URL: &str = "./service-worker.js";

/// Runtime configuration for the player binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Explicit storage file; `None` means the per-user config directory.
    pub storage_path: Option<PathBuf>,
    /// How many history entries the log panel renders.
    pub history_limit: usize,
    /// Script registered with the offline cache provider.
    pub service_worker_url: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            service_worker_url: DEFAULT_SERVICE_WORKER_URL.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing or blank values keep their defaults. Unparseable numbers are
    /// logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let storage_path = read("CHAOSHUB_STORAGE_PATH").map(PathBuf::from);

        let history_limit = match read("CHAOSHUB_HISTORY_LIMIT") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                Ok(_) | Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        "Invalid CHAOSHUB_HISTORY_LIMIT, using default {}",
                        defaults.history_limit
                    );
                    defaults.history_limit
                }
            },
            None => defaults.history_limit,
        };

        let service_worker_url =
            read("CHAOSHUB_SERVICE_WORKER").unwrap_or(defaults.service_worker_url);

        Self {
            storage_path,
            history_limit,
            service_worker_url,
        }
    }
}
