use serde::Deserialize;

use crate::args::OutputFormat;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "data_path")]
    pub data: Option<String>,
    #[serde(alias = "location")]
    pub country: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(alias = "show_moving_average")]
    pub moving_average: Option<bool>,
    pub rolling_window: Option<usize>,
    pub show_trends: Option<bool>,
    pub charts_path: Option<String>,
    pub no_charts: Option<bool>,
    pub no_ui: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
