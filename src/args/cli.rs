use chrono::NaiveDate;
use clap::Parser;

use crate::metrics::{DEFAULT_ROLLING_WINDOW, ViewOptions};

use super::defaults::{default_charts_path, default_data_path};
use super::parsers::{parse_date_arg, parse_rolling_window};
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Terminal COVID-19 analytics dashboard - pick a country and date range, inspect key metrics, and export trend charts from a cleaned CSV dataset."
)]
pub struct DashboardArgs {
    /// Path to the cleaned dataset (CSV with location and date columns)
    #[arg(long, short = 'd', env = "COVIDASH_DATA", default_value_t = default_data_path())]
    pub data: String,

    /// Country to analyze (defaults to the first country alphabetically)
    #[arg(long, short = 'c')]
    pub country: Option<String>,

    /// First day of the date range, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub start: Option<NaiveDate>,

    /// Last day of the date range, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub end: Option<NaiveDate>,

    /// Show moving averages of new cases and deaths
    #[arg(long = "moving-average", short = 'm')]
    pub moving_average: bool,

    /// Window size for moving averages, in records
    #[arg(
        long = "rolling-window",
        default_value_t = DEFAULT_ROLLING_WINDOW,
        value_parser = parse_rolling_window
    )]
    pub rolling_window: usize,

    /// Disable the filled trend area under cumulative cases
    #[arg(long = "no-trends")]
    pub no_trends: bool,

    /// Directory for exported PNG charts
    #[arg(long = "charts-path", default_value_t = default_charts_path())]
    pub charts_path: String,

    /// Disable chart generation
    #[arg(long = "no-charts", short = 'n')]
    pub no_charts: bool,

    /// Disable the interactive dashboard and print a summary instead
    #[arg(long = "no-ui")]
    pub no_ui: bool,

    /// Summary output format when the dashboard is disabled
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Print the available countries and exit
    #[arg(long = "list-countries")]
    pub list_countries: bool,

    /// Path to config file (TOML/JSON). Defaults to ./covidash.toml or ./covidash.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by COVIDASH_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl DashboardArgs {
    #[must_use]
    pub const fn view_options(&self) -> ViewOptions {
        ViewOptions {
            show_trends: !self.no_trends,
            moving_average: self.moving_average,
            rolling_window: self.rolling_window,
        }
    }
}
