//! Hub Store - JSON persistence of the hub over a `StorageProvider`
//!
//! Each part of the hub lives under its own key, in the same JSON shapes the
//! web build stored, so a browser profile with existing data loads as-is.
//! Reads fail soft: anything missing or unreadable becomes the default value.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::ports::outbound::{storage_keys, StorageProvider};
use chaoshub_domain::{catalog, ChaosHub, Profile, QuestLog};

/// Persistence failures. Never fatal for the UI.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored value for '{key}' is not valid JSON for its type: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn key(&self) -> &str {
        match self {
            Self::Malformed { key, .. } | Self::Serialize { key, .. } => key,
        }
    }
}

/// Typed JSON access to a key-value storage backend
#[derive(Clone)]
pub struct HubStore {
    storage: Arc<dyn StorageProvider>,
}

impl HubStore {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    /// Decode the value under `key`.
    ///
    /// `Ok(None)` when nothing is stored or the stored JSON is `null`.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.storage.load(key) else {
            return Ok(None);
        };
        serde_json::from_str::<Option<T>>(&raw).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })
    }

    /// Decode the value under `key`, substituting `default` for anything
    /// missing, `null` or malformed.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding unreadable stored value");
                default
            }
        }
    }

    /// Encode `value` as JSON under `key`
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.storage.save(key, &json);
        Ok(())
    }

    /// Assemble the hub from its four keys
    pub fn load_hub(&self) -> ChaosHub {
        let profile = self.load(storage_keys::PROFILE, Profile::default());
        let history = self.load(storage_keys::HISTORY, QuestLog::new());
        let rewards = self.load(storage_keys::REWARDS, catalog::default_rewards());
        let drops = self.load(storage_keys::DROPS, Vec::new());

        tracing::debug!(
            xp = profile.xp,
            history = history.len(),
            rewards = rewards.len(),
            drops = drops.len(),
            "Loaded hub from storage"
        );

        ChaosHub::from_parts(profile, history, rewards, drops)
    }

    /// Write all four keys. Stops at the first serialization failure.
    pub fn save_hub(&self, hub: &ChaosHub) -> Result<(), StoreError> {
        self.save(storage_keys::PROFILE, hub.profile())?;
        self.save(storage_keys::HISTORY, hub.history())?;
        self.save(storage_keys::REWARDS, hub.rewards())?;
        self.save(storage_keys::DROPS, hub.drops())?;
        Ok(())
    }
}
