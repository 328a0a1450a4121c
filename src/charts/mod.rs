//! PNG chart export for a computed dashboard view.
mod daily;
pub(crate) mod series;
mod trends;
mod vaccination;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::AppResult;
use crate::metrics::DashboardView;

pub use daily::plot_trend_overview;
pub use trends::{plot_case_fatality_rate, plot_stringency_index};
pub use vaccination::plot_vaccination;

pub const TREND_OVERVIEW_FILE: &str = "trend_overview.png";
pub const CASE_FATALITY_FILE: &str = "case_fatality_rate.png";
pub const VACCINATION_FILE: &str = "vaccination.png";
pub const STRINGENCY_FILE: &str = "stringency_index.png";

/// Writes every chart for `view` into `charts_path` and returns the files written.
///
/// Nothing is written, and the directory is not created, when the view has no
/// records.
///
/// # Errors
///
/// Returns an error when the output directory cannot be created or a chart
/// fails to render.
pub fn write_charts(view: &DashboardView<'_>, charts_path: &Path) -> AppResult<Vec<PathBuf>> {
    if view.is_empty() {
        info!(
            "No records for '{}' in the selected range; skipping charts",
            view.selection.entity
        );
        return Ok(Vec::new());
    }

    if let Err(e) = fs::create_dir_all(charts_path) {
        error!(
            "Failed to create output directory '{}': {}",
            charts_path.display(),
            e
        );
        return Err(e.into());
    }

    let trend_path = charts_path.join(TREND_OVERVIEW_FILE);
    info!("Plotting trend overview...");
    plot_trend_overview(view, &trend_path)?;

    let cfr_path = charts_path.join(CASE_FATALITY_FILE);
    info!("Plotting case fatality rate...");
    plot_case_fatality_rate(view, &cfr_path)?;

    let vaccination_path = charts_path.join(VACCINATION_FILE);
    info!("Plotting vaccination status...");
    plot_vaccination(view, &vaccination_path)?;

    let stringency_path = charts_path.join(STRINGENCY_FILE);
    info!("Plotting stringency index...");
    plot_stringency_index(view, &stringency_path)?;

    Ok(vec![trend_path, cfr_path, vaccination_path, stringency_path])
}
