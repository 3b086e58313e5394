//! Quest template - a task offering fixed XP and mischief

use serde::Serialize;

/// A task the hub can hand out. Templates live in a static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestTemplate {
    pub label: &'static str,
    pub xp_reward: u32,
    pub mischief_reward: u32,
}

impl QuestTemplate {
    pub const fn new(label: &'static str, xp_reward: u32, mischief_reward: u32) -> Self {
        Self {
            label,
            xp_reward,
            mischief_reward,
        }
    }
}
