//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.
//! Ports layer contains only trait definitions.

use chrono::{DateTime, NaiveDate, Utc};

/// Clock abstraction
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day in the user's local time zone.
    ///
    /// This is the single source of "today" for streak bookkeeping.
    fn today(&self) -> NaiveDate;
}

/// Random number generation abstraction
pub trait RandomProvider: Send + Sync {
    /// Generate random f64 in range [0.0, 1.0)
    fn random_f64(&self) -> f64;
}

/// Persistent storage abstraction (localStorage/file-based)
#[cfg_attr(test, mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Background asset caching (service worker on the web)
pub trait OfflineCacheProvider: Send + Sync {
    /// Register the caching worker script. Failures are logged, never raised.
    fn register(&self, script_url: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Send + Sync {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Storage key constants
///
/// These match the keys the previous web build wrote to `localStorage`,
/// so existing browser data is picked up as-is.
pub mod storage_keys {
    pub const PROFILE: &str = "profile";
    pub const HISTORY: &str = "quests";
    pub const REWARDS: &str = "rewards";
    pub const DROPS: &str = "drops";
}
