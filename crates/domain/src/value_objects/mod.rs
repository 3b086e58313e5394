//! Value objects for the progression rules

mod names;
mod odds;
mod streak;

pub use names::DesignTitle;
pub use odds::{Odds, DEFAULT_JACKPOT_ODDS};
pub use streak::StreakChange;
