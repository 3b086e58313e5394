//! Daily streak rule
//!
//! A streak counts consecutive calendar days with at least one quest drawn.
//! Comparison happens on [`NaiveDate`] values only, so the time of day and
//! month or year boundaries never affect the outcome.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a quest draw on a given day changes the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// A quest was already drawn today
    Unchanged,
    /// The previous quest was drawn yesterday
    Extended,
    /// First quest ever, a gap of two or more days, or a last date in the future
    Started,
}

impl StreakChange {
    /// Classify a draw made on `today` given the date of the previous draw.
    pub fn evaluate(last: Option<NaiveDate>, today: NaiveDate) -> Self {
        match last {
            Some(last) if last == today => Self::Unchanged,
            Some(last) if last.succ_opt() == Some(today) => Self::Extended,
            _ => Self::Started,
        }
    }

    /// Apply the change to the current streak count
    pub fn apply(self, streak: u32) -> u32 {
        match self {
            Self::Unchanged => streak,
            Self::Extended => streak.saturating_add(1),
            Self::Started => 1,
        }
    }

    /// Whether the last quest date moves to today
    pub fn touches_date(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_draw_starts_streak() {
        let change = StreakChange::evaluate(None, date(2024, 3, 10));
        assert_eq!(change, StreakChange::Started);
        assert_eq!(change.apply(0), 1);
    }

    #[test]
    fn same_day_is_unchanged() {
        let change = StreakChange::evaluate(Some(date(2024, 3, 10)), date(2024, 3, 10));
        assert_eq!(change, StreakChange::Unchanged);
        assert_eq!(change.apply(4), 4);
        assert!(!change.touches_date());
    }

    #[test]
    fn consecutive_day_extends() {
        let change = StreakChange::evaluate(Some(date(2024, 3, 10)), date(2024, 3, 11));
        assert_eq!(change, StreakChange::Extended);
        assert_eq!(change.apply(4), 5);
    }

    #[test]
    fn gap_resets() {
        let change = StreakChange::evaluate(Some(date(2024, 3, 10)), date(2024, 3, 12));
        assert_eq!(change, StreakChange::Started);
        assert_eq!(change.apply(9), 1);
    }

    #[test]
    fn future_last_date_resets() {
        let change = StreakChange::evaluate(Some(date(2024, 3, 15)), date(2024, 3, 12));
        assert_eq!(change, StreakChange::Started);
    }

    #[test]
    fn month_and_year_boundaries_extend() {
        assert_eq!(
            StreakChange::evaluate(Some(date(2024, 1, 31)), date(2024, 2, 1)),
            StreakChange::Extended
        );
        assert_eq!(
            StreakChange::evaluate(Some(date(2023, 12, 31)), date(2024, 1, 1)),
            StreakChange::Extended
        );
        assert_eq!(
            StreakChange::evaluate(Some(date(2024, 2, 28)), date(2024, 2, 29)),
            StreakChange::Extended
        );
        assert_eq!(
            StreakChange::evaluate(Some(date(2024, 2, 29)), date(2024, 3, 1)),
            StreakChange::Extended
        );
    }

    #[test]
    fn extend_saturates() {
        assert_eq!(StreakChange::Extended.apply(u32::MAX), u32::MAX);
    }
}
