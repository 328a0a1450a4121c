use chrono::NaiveDate;
use serde::Serialize;

use super::derive::DEFAULT_ROLLING_WINDOW;

/// Inclusive date range. An inverted range is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The user's current choice of entity and date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub entity: String,
    pub range: Option<DateRange>,
}

impl Selection {
    #[must_use]
    pub fn new(entity: impl Into<String>, range: Option<DateRange>) -> Self {
        Self {
            entity: entity.into(),
            range,
        }
    }

    #[must_use]
    pub fn entity(entity: impl Into<String>) -> Self {
        Self::new(entity, None)
    }
}

/// Rendering toggles that also drive which derived series get computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewOptions {
    pub show_trends: bool,
    pub moving_average: bool,
    pub rolling_window: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_trends: true,
            moving_average: false,
            rolling_window: DEFAULT_ROLLING_WINDOW,
        }
    }
}
