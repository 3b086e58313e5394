//! Domain entities
//!
//! Plain data carried between the progression rules and storage.

mod design_drop;
mod history;
mod profile;
mod quest;
mod reward;

pub use design_drop::DesignDrop;
pub use history::{HistoryEntry, QuestLog};
pub use profile::Profile;
pub use quest::QuestTemplate;
pub use reward::RewardTemplate;
