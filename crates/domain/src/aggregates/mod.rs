//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns outcome values from mutations
//!
//! | Concern | Rustic Equivalent |
//! |---------|-------------------|
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Value Object immutability | `#[derive(Clone)]` + no `&mut` methods |
//! | Ambient randomness | `FnMut() -> f64` passed per call |
//! | Domain Events | Return values from mutations |

pub mod hub;

pub use hub::{
    random_caption, ChaosHub, QuestDrawn, RewardSpun, TemptationOutcome, TEMPTATION_RESIST_BELOW,
};
