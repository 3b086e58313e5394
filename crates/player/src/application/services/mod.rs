//! Application services
//!
//! This module contains application services that implement use cases
//! for the Chaos Hub player. Services depend on port traits and the
//! `Platform` container, not concrete infrastructure implementations.

pub mod hub_service;
pub mod hub_store;

pub use hub_service::HubService;
pub use hub_store::{HubStore, StoreError};
