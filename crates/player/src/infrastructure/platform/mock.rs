//! In-memory platform for tests
//!
//! Deterministic fakes for every platform port. Available to this crate's
//! unit tests and, through the `testing` feature, to downstream crates.
//!
//! ```ignore
//! let (platform, handles) = mock_platform();
//! handles.random.push_rolls(&[0.1, 0.9]);
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::ports::outbound::platform::{
    DocumentProvider, OfflineCacheProvider, RandomProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;

/// Clock that only moves when told to
#[derive(Clone)]
pub struct FixedTimeProvider {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedTimeProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Move the clock; `today()` follows the UTC date of `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }
}

impl Default for FixedTimeProvider {
    fn default() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 5, 10, 12, 0, 0)
            .single()
            .unwrap_or_default();
        Self::new(start)
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Random source that replays queued rolls, then repeats a fallback
#[derive(Clone)]
pub struct ScriptedRandomProvider {
    rolls: Arc<Mutex<VecDeque<f64>>>,
    fallback: f64,
}

impl ScriptedRandomProvider {
    pub fn new(fallback: f64) -> Self {
        Self {
            rolls: Arc::new(Mutex::new(VecDeque::new())),
            fallback,
        }
    }

    pub fn push_rolls(&self, rolls: &[f64]) {
        self.rolls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(rolls.iter().copied());
    }

    /// Rolls queued but not yet consumed
    pub fn remaining(&self) -> usize {
        self.rolls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for ScriptedRandomProvider {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl RandomProvider for ScriptedRandomProvider {
    fn random_f64(&self) -> f64 {
        self.rolls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

/// HashMap-backed storage shared between clones
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Records registrations and titles instead of touching a browser
#[derive(Clone, Default)]
pub struct RecordingDocumentProvider {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingDocumentProvider {
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: String) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl OfflineCacheProvider for RecordingDocumentProvider {
    fn register(&self, script_url: &str) {
        self.record(format!("register:{script_url}"));
    }
}

impl DocumentProvider for RecordingDocumentProvider {
    fn set_page_title(&self, title: &str) {
        self.record(format!("title:{title}"));
    }
}

/// Handles onto the fakes inside a mock [`Platform`]
#[derive(Clone, Default)]
pub struct MockPlatformHandles {
    pub time: FixedTimeProvider,
    pub random: ScriptedRandomProvider,
    pub storage: MemoryStorageProvider,
    pub document: RecordingDocumentProvider,
}

/// Build a platform from fresh fakes, returning handles to drive them.
pub fn mock_platform() -> (Platform, MockPlatformHandles) {
    let handles = MockPlatformHandles::default();
    (platform_from(&handles), handles)
}

/// Build a platform over existing fakes, e.g. to simulate a restart with the same storage.
pub fn platform_from(handles: &MockPlatformHandles) -> Platform {
    Platform::new(
        handles.time.clone(),
        handles.random.clone(),
        handles.storage.clone(),
        handles.document.clone(),
        handles.document.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_rolls_then_fallback() {
        let random = ScriptedRandomProvider::new(0.75);
        random.push_rolls(&[0.1, 0.2]);
        assert_eq!(random.random_f64(), 0.1);
        assert_eq!(random.random_f64(), 0.2);
        assert_eq!(random.remaining(), 0);
        assert_eq!(random.random_f64(), 0.75);
    }

    #[test]
    fn platform_shares_state_with_handles() {
        let (platform, handles) = mock_platform();
        platform.storage().save("profile", "{}");
        platform.set_page_title("Chaos Hub");
        platform.register_offline_cache("./sw.js");

        assert_eq!(handles.storage.get("profile").as_deref(), Some("{}"));
        assert_eq!(
            handles.document.calls(),
            vec!["title:Chaos Hub".to_string(), "register:./sw.js".to_string()]
        );
    }

    #[test]
    fn clock_moves_on_set() {
        let time = FixedTimeProvider::default();
        let later = Utc.with_ymd_and_hms(2024, 5, 11, 8, 0, 0).unwrap();
        time.set(later);
        assert_eq!(time.now(), later);
        assert_eq!(time.today(), NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
    }
}
