use chrono::NaiveDate;

use super::format::{format_count, format_delta, format_opt_count, format_opt_percent};
use super::{DashboardReport, card_lines, profile_lines, summary_lines, write_summary};
use crate::args::OutputFormat;
use crate::dataset::{Dataset, Observation, Record};
use crate::error::{AppError, AppResult};
use crate::metrics::{DateRange, Selection, ViewOptions, compute};

fn day(date: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(2021, 4, date).ok_or_else(|| AppError::validation("invalid date"))
}

fn dataset() -> AppResult<Dataset> {
    Ok(Dataset::new(vec![
        Record::new("Canada", day(1)?)
            .with(Observation::TotalCases, 1_000_000.0)
            .with(Observation::TotalDeaths, 23_000.0)
            .with(Observation::NewCases, 5_000.0),
        Record::new("Canada", day(2)?)
            .with(Observation::TotalCases, 1_005_000.0)
            .with(Observation::TotalDeaths, 23_050.0)
            .with(Observation::NewCases, 5_000.0)
            .with(Observation::Population, 38_000_000.0)
            .with(Observation::MedianAge, 41.4)
            .with(Observation::PopulationDensity, 4.037)
            .with(Observation::GdpPerCapita, 44_017.591)
            .with(Observation::HumanDevelopmentIndex, 0.929),
    ]))
}

#[test]
fn format_count_groups_thousands() -> AppResult<()> {
    let cases = [
        (0.0, "0"),
        (999.0, "999"),
        (1000.0, "1,000"),
        (1_234_567.4, "1,234,567"),
        (-12_345.0, "-12,345"),
        (999.6, "1,000"),
    ];
    for (value, expected) in cases {
        if format_count(value) != expected {
            return Err(AppError::validation(format!(
                "format_count({value}) = {}, expected {expected}",
                format_count(value)
            )));
        }
    }
    Ok(())
}

#[test]
fn absent_values_render_as_no_data() -> AppResult<()> {
    if format_opt_count(None) != "N/A" || format_opt_percent(None, 1) != "N/A" {
        return Err(AppError::validation("absent values must render N/A"));
    }
    if format_opt_percent(Some(0.0), 1) != "0.0%" {
        return Err(AppError::validation("real zero must render as 0.0%"));
    }
    if format_delta(12.34) != "+12.3" || format_delta(-3.0) != "-3.0" {
        return Err(AppError::validation("unexpected delta formatting"));
    }
    Ok(())
}

#[test]
fn cards_flag_missing_vaccination_data() -> AppResult<()> {
    let data = dataset()?;
    let view = compute(&data, &Selection::entity("Canada"), ViewOptions::default());
    let cards = card_lines(&view);
    let expected = [
        "Total Cases: 1,005,000",
        "Total Deaths: 23,050",
        "New Cases: 5,000",
        "Vaccination Rate: N/A",
    ];
    if cards != expected {
        return Err(AppError::validation(format!("unexpected cards: {cards:?}")));
    }
    Ok(())
}

#[test]
fn profile_cards_use_fixed_precision() -> AppResult<()> {
    let data = dataset()?;
    let view = compute(&data, &Selection::entity("Canada"), ViewOptions::default());
    let lines = profile_lines(&view);
    let expected = [
        "Median Age: 41.4 years",
        "Population Density: 4.0/km²",
        "GDP per Capita: $44,018",
        "HDI: 0.929",
    ];
    if lines != expected {
        return Err(AppError::validation(format!("unexpected profile: {lines:?}")));
    }
    Ok(())
}

#[test]
fn empty_selection_reports_no_data() -> AppResult<()> {
    let data = dataset()?;
    let selection = Selection::new("Canada", Some(DateRange::new(day(3)?, day(1)?)));
    let view = compute(&data, &selection, ViewOptions::default());
    let lines = summary_lines(&view);
    if !lines.iter().any(|line| line == "Latest: no data") {
        return Err(AppError::validation("expected a no-data snapshot line"));
    }
    if !lines.iter().any(|line| line.starts_with("No data for Canada")) {
        return Err(AppError::validation("expected an empty selection notice"));
    }
    Ok(())
}

#[test]
fn json_report_uses_null_for_undefined_values() -> AppResult<()> {
    let data = dataset()?;
    let view = compute(&data, &Selection::entity("Canada"), ViewOptions::default());
    let value = serde_json::to_value(DashboardReport::from_view(&view))?;

    if value.pointer("/snapshot/vaccination_rate") != Some(&serde_json::Value::Null) {
        return Err(AppError::validation("vaccination rate should be null"));
    }
    if value.pointer("/snapshot/total_cases") != Some(&serde_json::json!(1_005_000.0)) {
        return Err(AppError::validation("total cases should be present"));
    }
    if value.pointer("/series/0/new_cases_average") != Some(&serde_json::Value::Null) {
        return Err(AppError::validation("disabled averages should be null"));
    }
    if value.pointer("/rolling_window") != Some(&serde_json::Value::Null) {
        return Err(AppError::validation("rolling window should be null when off"));
    }
    if value.pointer("/records") != Some(&serde_json::json!(2)) {
        return Err(AppError::validation("unexpected record count"));
    }
    Ok(())
}

#[test]
fn json_report_keeps_undefined_averages_as_null() -> AppResult<()> {
    let data = dataset()?;
    let options = ViewOptions {
        moving_average: true,
        ..ViewOptions::default()
    };
    let view = compute(&data, &Selection::entity("Canada"), options);
    let value = serde_json::to_value(DashboardReport::from_view(&view))?;

    if value.pointer("/rolling_window") != Some(&serde_json::json!(7)) {
        return Err(AppError::validation("rolling window should be reported"));
    }
    for idx in 0..2 {
        for key in ["new_cases_average", "new_deaths_average"] {
            let pointer = format!("/series/{idx}/{key}");
            if value.pointer(&pointer) != Some(&serde_json::Value::Null) {
                return Err(AppError::validation(format!("{pointer} should be null")));
            }
        }
    }
    Ok(())
}

#[test]
fn write_summary_text_and_json() -> AppResult<()> {
    let data = dataset()?;
    let view = compute(&data, &Selection::entity("Canada"), ViewOptions::default());

    let mut text = Vec::new();
    write_summary(&mut text, &view, OutputFormat::Text)?;
    let text = String::from_utf8_lossy(&text);
    if !text.contains("Case Fatality Rate: 2.29%") {
        return Err(AppError::validation(format!("unexpected text summary: {text}")));
    }

    let mut json = Vec::new();
    write_summary(&mut json, &view, OutputFormat::Json)?;
    let parsed: serde_json::Value = serde_json::from_slice(&json)?;
    if parsed.get("country") != Some(&serde_json::json!("Canada")) {
        return Err(AppError::validation("JSON summary should name the country"));
    }
    Ok(())
}
