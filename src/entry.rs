use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{info, warn};

use crate::args::DashboardArgs;
use crate::charts::write_charts;
use crate::config::{apply_config, load_config};
use crate::dataset::{Dataset, load_dataset};
use crate::error::{AppError, AppResult, ValidationError};
use crate::metrics::{DateRange, Selection, compute};
use crate::summary::write_summary;
use crate::ui::{DashboardState, run_dashboard};

/// Loads the dataset and either runs the dashboard or prints a summary.
///
/// # Errors
///
/// Returns an error when arguments, config, or the dataset are invalid, or
/// when output cannot be written.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args(std::env::args_os())?;
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::logger::init_logging(args.verbose, args.no_color);

    let loaded = load_dataset(Path::new(&args.data))?;
    let dataset = loaded.dataset;
    if dataset.is_empty() {
        tracing::error!("No usable records in '{}'.", args.data);
        return Err(AppError::validation(ValidationError::EmptyDataset));
    }

    if args.list_countries {
        return list_countries(&dataset);
    }

    let Some((country, range, default_range)) = resolve_selection(&args, &dataset) else {
        return Err(AppError::validation(ValidationError::EmptyDataset));
    };

    if !args.no_ui && io::stdout().is_terminal() {
        let state = DashboardState::new(
            dataset.entities(),
            &country,
            range,
            default_range,
            args.view_options(),
        )
        .with_no_color(args.no_color);
        return run_dashboard(&dataset, state, Path::new(&args.charts_path));
    }

    let selection = Selection::new(country, Some(range));
    let view = compute(&dataset, &selection, args.view_options());
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_summary(&mut out, &view, args.output_format)?;
        out.flush()?;
    }

    if !args.no_charts {
        let written = write_charts(&view, Path::new(&args.charts_path))?;
        if !written.is_empty() {
            info!("Wrote {} charts to '{}'", written.len(), args.charts_path);
        }
    }

    Ok(())
}

fn parse_args<I>(raw_args: I) -> AppResult<(DashboardArgs, ArgMatches)>
where
    I: IntoIterator<Item = OsString>,
{
    let cmd = DashboardArgs::command();
    let matches = cmd.get_matches_from(raw_args);
    let args = DashboardArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn list_countries(dataset: &Dataset) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for country in dataset.entities() {
        writeln!(out, "{}", country)?;
    }
    out.flush()?;
    Ok(())
}

/// Picks the country (first alphabetically unless given) and the date range
/// (dataset span, narrowed by `--start`/`--end`). Also returns the span for
/// the dashboard's reset key.
fn resolve_selection(
    args: &DashboardArgs,
    dataset: &Dataset,
) -> Option<(String, DateRange, DateRange)> {
    let (first, last) = dataset.date_span()?;
    let default_range = DateRange::new(first, last);
    let range = DateRange::new(args.start.unwrap_or(first), args.end.unwrap_or(last));
    if range.is_inverted() {
        warn!(
            "Start date {} is after end date {}; the selection will be empty.",
            range.start, range.end
        );
    }

    let entities = dataset.entities();
    let country = match args.country.as_deref() {
        Some(country) => {
            if !entities.iter().any(|entity| entity == country) {
                warn!("Country '{}' not found in dataset.", country);
            }
            country.to_owned()
        }
        None => entities.into_iter().next()?,
    };
    Some((country, range, default_range))
}
