//! Unified error types for the domain layer
//!
//! Every progression rule reports failure through [`DomainError`] so the
//! application layer can surface a notice without reaching for strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A uniform pick was requested from a catalog with no entries
    #[error("Cannot pick from empty {catalog} catalog")]
    EmptyCatalog { catalog: &'static str },

    /// Temptation needs a previous history entry to act on
    #[error("No prior quest to tempt fate with")]
    NoPriorQuest,

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create an empty catalog error naming the catalog that was empty
    pub fn empty_catalog(catalog: &'static str) -> Self {
        Self::EmptyCatalog { catalog }
    }

    /// Creates a validation error for rejected input.
    ///
    /// # Example
    /// ```ignore
    /// if title.trim().is_empty() {
    ///     return Err(DomainError::validation("Design title cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
