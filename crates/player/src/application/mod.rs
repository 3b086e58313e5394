//! Application layer - use cases over the domain hub

pub mod services;

pub use services::{HubService, HubStore, StoreError};
