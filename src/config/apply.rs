use chrono::NaiveDate;
use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::DashboardArgs;
use crate::dataset::parse_date;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values given on the command line or through the environment win over the
/// config file.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut DashboardArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "data")
        && let Some(data) = config.data.clone()
    {
        args.data = data;
    }

    if !is_explicit(matches, "country")
        && let Some(country) = config.country.clone()
    {
        args.country = Some(country);
    }

    if !is_explicit(matches, "start")
        && let Some(start) = config.start.as_deref()
    {
        args.start = Some(parse_config_date(start, "start")?);
    }

    if !is_explicit(matches, "end")
        && let Some(end) = config.end.as_deref()
    {
        args.end = Some(parse_config_date(end, "end")?);
    }

    if !is_explicit(matches, "moving_average")
        && let Some(moving_average) = config.moving_average
    {
        args.moving_average = moving_average;
    }

    if !is_explicit(matches, "rolling_window")
        && let Some(window) = config.rolling_window
    {
        if window == 0 {
            return Err(AppError::config(ConfigError::FieldMustBePositive {
                field: "rolling_window",
            }));
        }
        args.rolling_window = window;
    }

    if !is_explicit(matches, "no_trends")
        && let Some(show_trends) = config.show_trends
    {
        args.no_trends = !show_trends;
    }

    if !is_explicit(matches, "charts_path")
        && let Some(path) = config.charts_path.clone()
    {
        args.charts_path = path;
    }

    if !is_explicit(matches, "no_charts")
        && let Some(no_charts) = config.no_charts
    {
        args.no_charts = no_charts;
    }

    if !is_explicit(matches, "no_ui")
        && let Some(no_ui) = config.no_ui
    {
        args.no_ui = no_ui;
    }

    if !is_explicit(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_explicit(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn parse_config_date(value: &str, field: &'static str) -> AppResult<NaiveDate> {
    parse_date(value)
        .map_err(|err| AppError::config(ConfigError::InvalidDate { field, source: err }))
}
