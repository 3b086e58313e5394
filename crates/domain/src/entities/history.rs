//! Quest history - append-only, newest first

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One past award.
///
/// # Simple Data Struct
///
/// Entries are never edited after creation. Aliases accept the key names
/// written by the previous web build (`date`, `text`, `xp`, `mischief`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "text")]
    pub label: String,
    #[serde(alias = "xp", default)]
    pub xp_delta: u32,
    #[serde(alias = "mischief", default)]
    pub mischief_delta: u32,
}

impl HistoryEntry {
    pub fn new(
        label: impl Into<String>,
        xp_delta: u32,
        mischief_delta: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            label: label.into(),
            xp_delta,
            mischief_delta,
        }
    }
}

/// Reverse-chronological list of [`HistoryEntry`] values.
///
/// Storage keeps the whole log; [`QuestLog::recent`] truncates for display only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestLog(Vec<HistoryEntry>);

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new entry as the most recent one
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.0.insert(0, entry);
    }

    /// The most recent entry, if any
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.0.first()
    }

    /// Up to `limit` most recent entries
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        &self.0[..limit.min(self.0.len())]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.0.iter()
    }
}

impl From<Vec<HistoryEntry>> for QuestLog {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self(entries)
    }
}
