//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Injected into Dioxus context by `main`
//! - Accessed in UI via `use_platform()`

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::ports::outbound::{
    DocumentProvider, OfflineCacheProvider, RandomProvider, StorageProvider, TimeProvider,
};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
/// Use via Dioxus context: `use_context::<Platform>()`
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProvider>,
    random: Arc<dyn RandomProvider>,
    storage: Arc<dyn StorageProvider>,
    offline_cache: Arc<dyn OfflineCacheProvider>,
    document: Arc<dyn DocumentProvider>,
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, R, S, O, D>(time: Tm, random: R, storage: S, offline_cache: O, document: D) -> Self
    where
        Tm: TimeProvider + 'static,
        R: RandomProvider + 'static,
        S: StorageProvider + 'static,
        O: OfflineCacheProvider + 'static,
        D: DocumentProvider + 'static,
    {
        Self {
            time: Arc::new(time),
            random: Arc::new(random),
            storage: Arc::new(storage),
            offline_cache: Arc::new(offline_cache),
            document: Arc::new(document),
        }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Current instant
    pub fn now(&self) -> DateTime<Utc> {
        self.time.now()
    }

    /// Current local calendar day
    pub fn today(&self) -> NaiveDate {
        self.time.today()
    }

    // -------------------------------------------------------------------------
    // Random operations
    // -------------------------------------------------------------------------

    /// Generate random f64 in range [0.0, 1.0)
    pub fn random_f64(&self) -> f64 {
        self.random.random_f64()
    }

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Shared handle to the storage backend, for application services.
    pub fn storage(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.storage)
    }

    // -------------------------------------------------------------------------
    // Offline cache
    // -------------------------------------------------------------------------

    /// Register the offline caching worker (no-op on desktop)
    pub fn register_offline_cache(&self, script_url: &str) {
        self.offline_cache.register(script_url)
    }

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}
