extern crate self as chaoshub_domain;

pub mod aggregates;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{DesignDrop, HistoryEntry, Profile, QuestLog, QuestTemplate, RewardTemplate};

pub use aggregates::{
    random_caption, ChaosHub, QuestDrawn, RewardSpun, TemptationOutcome, TEMPTATION_RESIST_BELOW,
};

pub use error::DomainError;

pub use ids::DesignDropId;

pub use value_objects::{DesignTitle, Odds, StreakChange};
