//! Presentation layer - Dioxus UI components and view state

pub mod components;
pub mod format;
pub mod state;
