use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::tempdir;

use super::series::{date_label, day_offset, observation_points, segments, value_range, x_range};
use super::{
    CASE_FATALITY_FILE, STRINGENCY_FILE, TREND_OVERVIEW_FILE, VACCINATION_FILE, write_charts,
};
use crate::dataset::{Dataset, Observation, Record};
use crate::error::{AppError, AppResult};
use crate::metrics::{DateRange, Selection, ViewOptions, compute};

fn day(date: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(2020, 3, date).ok_or_else(|| AppError::validation("invalid date"))
}

#[test]
fn segments_break_at_missing_values() -> AppResult<()> {
    let points = [
        (0.0, Some(1.0)),
        (1.0, Some(2.0)),
        (2.0, None),
        (3.0, None),
        (4.0, Some(5.0)),
    ];
    let runs = segments(&points);
    let expected = vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(4.0, 5.0)]];
    if runs != expected {
        return Err(AppError::validation(format!("unexpected segments: {runs:?}")));
    }
    Ok(())
}

#[test]
fn segments_of_all_missing_values_are_empty() -> AppResult<()> {
    let points = [(0.0, None), (1.0, None)];
    if !segments(&points).is_empty() {
        return Err(AppError::validation("expected no segments"));
    }
    Ok(())
}

#[test]
fn value_range_includes_zero_and_headroom() -> AppResult<()> {
    let range = value_range([10.0, 20.0, f64::NAN]);
    if range.start != 0.0 || (range.end - 22.0).abs() > 1e-9 {
        return Err(AppError::validation(format!("unexpected range: {range:?}")));
    }

    let negative = value_range([-10.0, 5.0]);
    if negative.start >= -10.0 || negative.end <= 5.0 {
        return Err(AppError::validation(format!("unexpected range: {negative:?}")));
    }

    let empty = value_range(std::iter::empty());
    if empty != (0.0..1.0) {
        return Err(AppError::validation(format!("unexpected empty range: {empty:?}")));
    }
    Ok(())
}

#[test]
fn date_axis_uses_offsets_from_first_day() -> AppResult<()> {
    let first = day(1)?;
    if (day_offset(first, day(11)?) - 10.0).abs() > f64::EPSILON {
        return Err(AppError::validation("expected a ten day offset"));
    }
    if date_label(first, 9.6) != "2020-03-11" {
        return Err(AppError::validation(format!(
            "unexpected label: {}",
            date_label(first, 9.6)
        )));
    }
    if !date_label(first, -1.0).is_empty() {
        return Err(AppError::validation("negative offsets have no label"));
    }
    Ok(())
}

#[test]
fn points_follow_gaps_in_dates() -> AppResult<()> {
    let dataset = Dataset::new(vec![
        Record::new("Italy", day(5)?).with(Observation::StringencyIndex, 70.0),
        Record::new("Italy", day(1)?).with(Observation::StringencyIndex, 20.0),
        Record::new("Italy", day(2)?),
    ]);
    let view = compute(&dataset, &Selection::entity("Italy"), ViewOptions::default());
    let points = observation_points(&view, Observation::StringencyIndex);
    let expected = vec![(0.0, Some(20.0)), (1.0, None), (4.0, Some(70.0))];
    if points != expected {
        return Err(AppError::validation(format!("unexpected points: {points:?}")));
    }
    if x_range(&points) != (-0.5..4.5) {
        return Err(AppError::validation("unexpected x range"));
    }
    Ok(())
}

#[test]
fn empty_selection_writes_nothing() -> AppResult<()> {
    let dataset = Dataset::new(vec![
        Record::new("Italy", day(1)?).with(Observation::TotalCases, 10.0),
    ]);
    let selection = Selection::new("Italy", Some(DateRange::new(day(9)?, day(2)?)));
    let view = compute(&dataset, &selection, ViewOptions::default());

    let dir = tempdir()?;
    let charts_path = dir.path().join("charts");
    let written = write_charts(&view, &charts_path)?;
    if !written.is_empty() {
        return Err(AppError::validation("expected no chart files"));
    }
    if charts_path.exists() {
        return Err(AppError::validation("charts directory should not be created"));
    }
    Ok(())
}

fn italy_view_dataset(with_vaccination: bool) -> AppResult<Dataset> {
    let mut records = Vec::new();
    for date in 1..=10 {
        let offset = f64::from(date);
        let mut record = Record::new("Italy", day(date)?)
            .with(Observation::TotalCases, 100.0 * offset)
            .with(Observation::TotalDeaths, 4.0 * offset)
            .with(Observation::NewCases, 100.0)
            .with(Observation::NewDeaths, 4.0)
            .with(Observation::StringencyIndex, 60.0 + offset);
        if with_vaccination {
            record = record
                .with(Observation::PeopleVaccinated, 1_000.0 * offset)
                .with(Observation::Population, 60_000.0);
        }
        records.push(record);
    }
    // A gap in the middle splits every line into segments.
    records.push(Record::new("Italy", day(12)?));
    records.push(
        Record::new("Italy", day(13)?)
            .with(Observation::TotalCases, 1_400.0)
            .with(Observation::TotalDeaths, 52.0),
    );
    Ok(Dataset::new(records))
}

fn assert_chart_files(written: &[PathBuf], charts_path: &Path) -> AppResult<()> {
    if written.len() != 4 {
        return Err(AppError::validation(format!(
            "expected 4 charts, got {}",
            written.len()
        )));
    }
    for name in [
        TREND_OVERVIEW_FILE,
        CASE_FATALITY_FILE,
        VACCINATION_FILE,
        STRINGENCY_FILE,
    ] {
        let path = charts_path.join(name);
        let size = fs::metadata(&path)?.len();
        if size == 0 {
            return Err(AppError::validation(format!("{} is empty", path.display())));
        }
    }
    Ok(())
}

#[test]
fn write_charts_creates_files() -> AppResult<()> {
    let dataset = italy_view_dataset(true)?;
    let options = ViewOptions {
        moving_average: true,
        rolling_window: 3,
        ..ViewOptions::default()
    };
    let view = compute(&dataset, &Selection::entity("Italy"), options);

    let dir = tempdir()?;
    let charts_path = dir.path().join("charts");
    let written = write_charts(&view, &charts_path)?;
    assert_chart_files(&written, &charts_path)
}

#[test]
fn write_charts_without_vaccination_data() -> AppResult<()> {
    let dataset = italy_view_dataset(false)?;
    let options = ViewOptions {
        show_trends: false,
        ..ViewOptions::default()
    };
    let view = compute(&dataset, &Selection::entity("Italy"), options);
    if view.vaccination.is_some() {
        return Err(AppError::validation("vaccination breakdown should be absent"));
    }

    let dir = tempdir()?;
    let written = write_charts(&view, dir.path())?;
    assert_chart_files(&written, dir.path())
}
