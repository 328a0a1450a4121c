use std::ops::Range;

use chrono::{Days, NaiveDate};

use crate::dataset::Observation;
use crate::metrics::{DashboardView, DerivedPoint};

/// Headroom above the largest plotted value.
const HEADROOM: f64 = 1.1;

pub(crate) type Point = (f64, f64);

/// Days since `first`, as a chart x coordinate.
pub(crate) fn day_offset(first: NaiveDate, date: NaiveDate) -> f64 {
    date.signed_duration_since(first).num_days() as f64
}

pub(crate) fn date_label(first: NaiveDate, offset: f64) -> String {
    let rounded = offset.round();
    if !rounded.is_finite() || rounded < 0.0 {
        return String::new();
    }
    first
        .checked_add_days(Days::new(rounded as u64))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub(crate) fn observation_points(
    view: &DashboardView<'_>,
    field: Observation,
) -> Vec<(f64, Option<f64>)> {
    let Some(first) = view.first_date() else {
        return Vec::new();
    };
    view.series
        .iter()
        .map(|record| (day_offset(first, record.date), record.value(field)))
        .collect()
}

pub(crate) fn derived_points(
    view: &DashboardView<'_>,
    value: fn(&DerivedPoint) -> Option<f64>,
) -> Vec<(f64, Option<f64>)> {
    let Some(first) = view.first_date() else {
        return Vec::new();
    };
    view.derived
        .points
        .iter()
        .map(|point| (day_offset(first, point.date), value(point)))
        .collect()
}

/// Splits a series into runs of defined values so gaps are not drawn as zero.
pub(crate) fn segments(points: &[(f64, Option<f64>)]) -> Vec<Vec<Point>> {
    let mut segments: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for (x, y) in points.iter().copied() {
        match y {
            Some(y) => current.push((x, y)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

pub(crate) fn defined(points: &[(f64, Option<f64>)]) -> impl Iterator<Item = Point> + '_ {
    points.iter().filter_map(|(x, y)| y.map(|y| (*x, y)))
}

/// X axis covering every point with half a day of padding on each side.
pub(crate) fn x_range(points: &[(f64, Option<f64>)]) -> Range<f64> {
    let last = points.last().map_or(0.0, |(x, _)| *x);
    -0.5..last.max(0.0) + 0.5
}

/// Y axis including zero and every finite value, with headroom.
pub(crate) fn value_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        });
    let upper = if max > 0.0 { max * HEADROOM } else { 1.0 };
    let lower = if min < 0.0 { min * HEADROOM } else { 0.0 };
    lower..upper
}
