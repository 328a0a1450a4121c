//! Text metric cards and the JSON report printed when the dashboard is disabled.
pub(crate) mod format;
mod lines;
mod report;

#[cfg(test)]
mod tests;

use std::io::Write;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::DashboardView;

pub use lines::{card_lines, profile_lines, selection_lines, summary_lines};
pub use report::{DashboardReport, ReportPoint, ReportSnapshot};

/// Writes the summary for `view` in the requested format.
///
/// # Errors
///
/// Returns an error when JSON encoding or writing to `out` fails.
pub fn write_summary<W: Write>(
    out: &mut W,
    view: &DashboardView<'_>,
    format: OutputFormat,
) -> AppResult<()> {
    tracing::debug!(format = format.as_str(), "Writing summary");
    match format {
        OutputFormat::Text => {
            for line in summary_lines(view) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            let report = DashboardReport::from_view(view);
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
