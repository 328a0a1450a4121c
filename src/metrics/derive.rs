use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::{Observation, Record};

use super::selection::ViewOptions;

pub const DEFAULT_ROLLING_WINDOW: usize = 7;
const PERCENT: f64 = 100.0;

/// `numerator / denominator * 100`, or `None` when it cannot be computed.
///
/// Undefined when either side is absent or the denominator is not strictly
/// positive. Never returns NaN or infinity.
#[must_use]
pub fn derive_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let numerator = numerator.filter(|value| value.is_finite())?;
    let denominator = denominator.filter(|value| value.is_finite() && *value > 0.0)?;
    let ratio = numerator / denominator * PERCENT;
    ratio.is_finite().then_some(ratio)
}

#[must_use]
pub fn case_fatality_ratio(record: &Record) -> Option<f64> {
    derive_ratio(
        record.value(Observation::TotalDeaths),
        record.value(Observation::TotalCases),
    )
}

#[must_use]
pub fn vaccination_rate(record: &Record) -> Option<f64> {
    derive_ratio(
        record.value(Observation::PeopleVaccinated),
        record.value(Observation::Population),
    )
}

/// Trailing mean of `field` over `window` records, one entry per record.
///
/// An index is undefined until `window` records are available, and whenever
/// any value inside its window is absent. Absent values are never skipped,
/// so every defined mean covers exactly `window` observations.
#[must_use]
pub fn rolling_average(
    series: &[&Record],
    field: Observation,
    window: usize,
) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; series.len()];
    }
    let divisor = window as f64;
    (0..series.len())
        .map(|idx| {
            let end = idx.checked_add(1)?;
            let start = end.checked_sub(window)?;
            let sum = series
                .get(start..end)?
                .iter()
                .map(|record| record.value(field))
                .sum::<Option<f64>>()?;
            Some(sum / divisor)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedPoint {
    pub date: NaiveDate,
    pub case_fatality_ratio: Option<f64>,
    pub vaccination_rate: Option<f64>,
    pub new_cases_average: Option<f64>,
    pub new_deaths_average: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedSeries {
    /// Set when rolling averages were requested.
    pub rolling_window: Option<usize>,
    pub points: Vec<DerivedPoint>,
}

#[must_use]
pub fn derive(series: &[&Record], options: &ViewOptions) -> DerivedSeries {
    let rolling_window = options.moving_average.then_some(options.rolling_window);
    let (cases_avg, deaths_avg) = match rolling_window {
        Some(window) => (
            rolling_average(series, Observation::NewCases, window),
            rolling_average(series, Observation::NewDeaths, window),
        ),
        None => (vec![None; series.len()], vec![None; series.len()]),
    };

    let points = series
        .iter()
        .zip(cases_avg)
        .zip(deaths_avg)
        .map(|((record, new_cases_average), new_deaths_average)| DerivedPoint {
            date: record.date,
            case_fatality_ratio: case_fatality_ratio(record),
            vaccination_rate: vaccination_rate(record),
            new_cases_average,
            new_deaths_average,
        })
        .collect();

    DerivedSeries {
        rolling_window,
        points,
    }
}
