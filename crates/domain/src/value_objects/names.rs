//! Validated name newtypes
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// DesignTitle
// ============================================================================

/// A validated design drop title (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DesignTitle(String);

impl DesignTitle {
    /// Create a new validated design title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the title is empty after trimming.
    /// Length is not limited.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Design title cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesignTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DesignTitle {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<DesignTitle> for String {
    fn from(title: DesignTitle) -> String {
        title.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_title() {
        let title = DesignTitle::new("Moth cryptid sticker").unwrap();
        assert_eq!(title.as_str(), "Moth cryptid sticker");
        assert_eq!(title.to_string(), "Moth cryptid sticker");
    }

    #[test]
    fn empty_title_rejected() {
        let err = DesignTitle::new("").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn whitespace_only_rejected() {
        assert!(DesignTitle::new("   \t").is_err());
    }

    #[test]
    fn title_is_trimmed() {
        let title = DesignTitle::new("  Goblin tote bag  ").unwrap();
        assert_eq!(title.as_str(), "Goblin tote bag");
    }

    #[test]
    fn long_title_accepted() {
        let long = "a".repeat(250);
        assert_eq!(DesignTitle::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn long_title_deserializes() {
        let long = "b".repeat(250);
        let title: DesignTitle = serde_json::from_str(&format!("\"{long}\"")).unwrap();
        assert_eq!(title.as_str(), long);
    }
}
