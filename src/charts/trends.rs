use std::path::Path;

use plotters::prelude::*;

use crate::dataset::Observation;
use crate::error::AppResult;
use crate::metrics::DashboardView;

use super::series::{
    date_label, defined, derived_points, observation_points, segments, value_range, x_range,
};

const CFR_COLOR: RGBColor = RGBColor(214, 39, 40);
const STRINGENCY_COLOR: RGBColor = RGBColor(44, 160, 44);
const STRINGENCY_MAX: f64 = 100.0;

/// Case fatality rate over the selected range. Days without a defined ratio leave a gap.
///
/// # Errors
///
/// Returns an error when the chart cannot be drawn or written.
pub fn plot_case_fatality_rate(view: &DashboardView<'_>, path: &Path) -> AppResult<()> {
    let Some(first) = view.first_date() else {
        return Ok(());
    };
    let cfr = derived_points(view, |point| point.case_fatality_ratio);

    let root = BitMapBackend::new(path, (1600, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{}: Case Fatality Rate", view.selection.entity),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range(&cfr), value_range(defined(&cfr).map(|(_, y)| y)))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("CFR (%)")
        .x_label_formatter(&|x| date_label(first, *x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    for segment in segments(&cfr) {
        chart.draw_series(
            AreaSeries::new(segment, 0.0, CFR_COLOR.mix(0.2)).border_style(CFR_COLOR),
        )?;
    }

    root.present()?;
    Ok(())
}

/// Government response stringency on a fixed 0..100 axis.
///
/// # Errors
///
/// Returns an error when the chart cannot be drawn or written.
pub fn plot_stringency_index(view: &DashboardView<'_>, path: &Path) -> AppResult<()> {
    let Some(first) = view.first_date() else {
        return Ok(());
    };
    let stringency = observation_points(view, Observation::StringencyIndex);

    let root = BitMapBackend::new(path, (1600, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{}: Government Response Stringency", view.selection.entity),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range(&stringency), 0.0..STRINGENCY_MAX)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Stringency Index")
        .x_label_formatter(&|x| date_label(first, *x))
        .draw()?;

    for segment in segments(&stringency) {
        chart.draw_series(
            AreaSeries::new(segment, 0.0, STRINGENCY_COLOR.mix(0.3))
                .border_style(STRINGENCY_COLOR),
        )?;
    }

    root.present()?;
    Ok(())
}
