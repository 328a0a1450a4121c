use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::{Observation, Record};

/// A display value plus whether the underlying observation existed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotField {
    /// Zero when the observation is absent.
    pub value: f64,
    pub present: bool,
}

impl SnapshotField {
    #[must_use]
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(value) => Self {
                value,
                present: true,
            },
            None => Self::missing(),
        }
    }

    #[must_use]
    pub const fn missing() -> Self {
        Self {
            value: 0.0,
            present: false,
        }
    }

    #[must_use]
    pub const fn as_option(&self) -> Option<f64> {
        if self.present { Some(self.value) } else { None }
    }
}

/// Most recent record of a filtered series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Snapshot<'data> {
    NoData,
    Latest(&'data Record),
}

impl<'data> Snapshot<'data> {
    #[must_use]
    pub const fn record(&self) -> Option<&'data Record> {
        match self {
            Snapshot::NoData => None,
            Snapshot::Latest(record) => Some(*record),
        }
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.record().map(|record| record.date)
    }

    #[must_use]
    pub fn field(&self, field: Observation) -> SnapshotField {
        SnapshotField::from_option(self.record().and_then(|record| record.value(field)))
    }
}

#[must_use]
pub fn snapshot<'data>(series: &[&'data Record]) -> Snapshot<'data> {
    series
        .last()
        .copied()
        .map_or(Snapshot::NoData, Snapshot::Latest)
}
