//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::infrastructure::config::PlayerConfig;
use crate::ports::outbound::platform::{
    DocumentProvider, OfflineCacheProvider, RandomProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use anyhow::Context;
use chrono::{DateTime, Local, NaiveDate, Utc};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Desktop time provider using the system clock
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Desktop random provider using rand crate
#[derive(Clone, Default)]
pub struct DesktopRandomProvider;

impl RandomProvider for DesktopRandomProvider {
    fn random_f64(&self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen()
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/chaoshub/storage.json
/// - macOS: ~/Library/Application Support/io.chaoshub.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\chaoshub\player\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider in the per-user config directory
    pub fn new() -> Self {
        let storage_path = match ProjectDirs::from("io", "chaoshub", "player") {
            Some(dirs) => dirs.config_dir().join("storage.json"),
            // Fallback to current directory if project dirs unavailable
            None => PathBuf::from("chaoshub_storage.json"),
        };
        Self::with_path(storage_path)
    }

    /// Create a storage provider backed by an explicit file
    ///
    /// Loads existing data from the file if it exists. An unreadable or
    /// corrupt file starts an empty store and is overwritten on next save.
    pub fn with_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = match read_store(&storage_path) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Failed to load storage file: {:#}", e);
                HashMap::new()
            }
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("creating storage directory {}", parent.display())
                })?;
            }
        }

        let data = {
            let cache = self
                .cache
                .read()
                .map_err(|e| anyhow::anyhow!("storage lock poisoned: {e}"))?;
            serde_json::to_string_pretty(&*cache).context("serializing storage data")?
        };

        fs::write(&self.storage_path, data)
            .with_context(|| format!("writing {}", self.storage_path.display()))
    }

    fn persist_or_log(&self) {
        if let Err(e) = self.persist() {
            tracing::error!("Failed to persist storage: {:#}", e);
        }
    }
}

fn read_store(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist_or_log();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist_or_log();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Desktop offline cache provider (no-op, assets ship with the binary)
#[derive(Clone, Default)]
pub struct DesktopOfflineCacheProvider;

impl OfflineCacheProvider for DesktopOfflineCacheProvider {
    fn register(&self, script_url: &str) {
        tracing::debug!(script_url, "Offline cache not needed on desktop");
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is set through the desktop launch config
    }
}

/// Create platform services for desktop
pub fn create_platform(config: &PlayerConfig) -> Platform {
    let storage = match &config.storage_path {
        Some(path) => DesktopStorageProvider::with_path(path.clone()),
        None => DesktopStorageProvider::new(),
    };

    Platform::new(
        DesktopTimeProvider,
        DesktopRandomProvider,
        storage,
        DesktopOfflineCacheProvider,
        DesktopDocumentProvider,
    )
}
