//! Display strings for hub outcomes

use chaoshub_domain::DomainError;
use chrono::{DateTime, Local, Utc};

/// Shown when temptation is tried before any quest
pub const NO_PRIOR_QUEST_NOTICE: &str = "Do a quest first!";

pub const EMPTY_HISTORY_TEXT: &str = "No entries yet.";
pub const EMPTY_DROPS_TEXT: &str = "No designs queued. Add one above.";

/// Gain line under a freshly drawn quest
pub fn quest_gain(xp: u32, mischief: u32) -> String {
    format!("+{xp} XP, +{mischief} ✦ mischief")
}

/// Gain line in the history list; mischief is omitted when zero
pub fn history_gain(xp: u32, mischief: u32) -> String {
    if mischief > 0 {
        format!("+{xp} XP, +{mischief} mischief")
    } else {
        format!("+{xp} XP")
    }
}

pub fn reward_result(name: &str, star_value: u32) -> String {
    format!("Won: {name} ({star_value}★ value)")
}

/// Timestamp in the viewer's local time zone
pub fn local_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// User-facing notice for a refused operation, if it warrants one.
///
/// Blank design titles are ignored silently and catalog errors are
/// reported generically.
pub fn notice_for(error: &DomainError) -> Option<String> {
    match error {
        DomainError::NoPriorQuest => Some(NO_PRIOR_QUEST_NOTICE.to_string()),
        DomainError::Validation(_) => None,
        DomainError::EmptyCatalog { catalog } => {
            Some(format!("Nothing to pick: the {catalog} list is empty."))
        }
    }
}
