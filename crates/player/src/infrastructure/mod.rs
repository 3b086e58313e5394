//! Infrastructure layer - configuration and platform adapters

pub mod config;
pub mod platform;

pub use config::PlayerConfig;
