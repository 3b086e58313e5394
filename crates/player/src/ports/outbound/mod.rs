//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the host platform without
//! depending on concrete implementations.

pub mod platform;

pub use platform::{
    storage_keys, DocumentProvider, OfflineCacheProvider, RandomProvider, StorageProvider,
    TimeProvider,
};

#[cfg(test)]
pub use platform::{MockStorageProvider, MockTimeProvider};
