use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::dataset::Observation;
use crate::error::AppResult;
use crate::metrics::DashboardView;
use crate::summary::format::format_count;

use super::series::{
    date_label, defined, derived_points, observation_points, segments, value_range, x_range,
};

const CASES_COLOR: RGBColor = RGBColor(31, 119, 180);
const DEATHS_COLOR: RGBColor = RGBColor(214, 39, 40);
const CASES_AVERAGE_COLOR: RGBColor = RGBColor(255, 127, 14);
const DEATHS_AVERAGE_COLOR: RGBColor = RGBColor(148, 103, 189);

/// Cumulative cases and deaths on top, daily new cases and deaths below.
///
/// # Errors
///
/// Returns an error when the chart cannot be drawn or written.
pub fn plot_trend_overview(view: &DashboardView<'_>, path: &Path) -> AppResult<()> {
    if view.is_empty() {
        return Ok(());
    }

    let root = BitMapBackend::new(path, (1600, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(450);

    draw_cumulative(view, &upper)?;
    draw_daily(view, &lower)?;

    root.present()?;
    Ok(())
}

fn draw_cumulative(
    view: &DashboardView<'_>,
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
) -> AppResult<()> {
    let Some(first) = view.first_date() else {
        return Ok(());
    };
    let cases = observation_points(view, Observation::TotalCases);
    let deaths = observation_points(view, Observation::TotalDeaths);
    let x = x_range(&cases);

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{}: Cumulative Cases and Deaths", view.selection.entity),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .right_y_label_area_size(90)
        .build_cartesian_2d(x.clone(), value_range(defined(&cases).map(|(_, y)| y)))?
        .set_secondary_coord(x, value_range(defined(&deaths).map(|(_, y)| y)));

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Total Cases")
        .x_label_formatter(&|x| date_label(first, *x))
        .y_label_formatter(&|y| format_count(*y))
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Total Deaths")
        .y_label_formatter(&|y| format_count(*y))
        .draw()?;

    let case_segments = segments(&cases);
    if view.options.show_trends {
        for segment in &case_segments {
            chart.draw_series(AreaSeries::new(
                segment.iter().copied(),
                0.0,
                CASES_COLOR.mix(0.2),
            ))?;
        }
    }
    if let Some((head, rest)) = case_segments.split_first() {
        chart
            .draw_series(LineSeries::new(head.iter().copied(), CASES_COLOR))?
            .label("Total Cases")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x.saturating_add(20), y)], CASES_COLOR)
            });
        for segment in rest {
            chart.draw_series(LineSeries::new(segment.iter().copied(), CASES_COLOR))?;
        }
    }

    let death_segments = segments(&deaths);
    if let Some((head, rest)) = death_segments.split_first() {
        chart
            .draw_secondary_series(LineSeries::new(head.iter().copied(), DEATHS_COLOR))?
            .label("Total Deaths")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x.saturating_add(20), y)], DEATHS_COLOR)
            });
        for segment in rest {
            chart.draw_secondary_series(LineSeries::new(segment.iter().copied(), DEATHS_COLOR))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}

fn draw_daily(
    view: &DashboardView<'_>,
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
) -> AppResult<()> {
    let Some(first) = view.first_date() else {
        return Ok(());
    };
    let new_cases = observation_points(view, Observation::NewCases);
    let new_deaths = observation_points(view, Observation::NewDeaths);
    let x = x_range(&new_cases);

    let mut chart = ChartBuilder::on(area)
        .caption("Daily New Cases and Deaths", ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .right_y_label_area_size(90)
        .build_cartesian_2d(x.clone(), value_range(defined(&new_cases).map(|(_, y)| y)))?
        .set_secondary_coord(x, value_range(defined(&new_deaths).map(|(_, y)| y)));

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("New Cases")
        .x_label_formatter(&|x| date_label(first, *x))
        .y_label_formatter(&|y| format_count(*y))
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("New Deaths")
        .y_label_formatter(&|y| format_count(*y))
        .draw()?;

    chart
        .draw_series(defined(&new_cases).map(|(x, y)| {
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, y)], CASES_COLOR.mix(0.5).filled())
        }))?
        .label("New Cases")
        .legend(|(x, y)| {
            Rectangle::new(
                [
                    (x, y.saturating_sub(5)),
                    (x.saturating_add(10), y.saturating_add(5)),
                ],
                CASES_COLOR.mix(0.5).filled(),
            )
        });
    chart
        .draw_secondary_series(defined(&new_deaths).map(|(x, y)| {
            Rectangle::new([(x - 0.2, 0.0), (x + 0.2, y)], DEATHS_COLOR.mix(0.6).filled())
        }))?
        .label("New Deaths")
        .legend(|(x, y)| {
            Rectangle::new(
                [
                    (x, y.saturating_sub(5)),
                    (x.saturating_add(10), y.saturating_add(5)),
                ],
                DEATHS_COLOR.mix(0.6).filled(),
            )
        });

    if let Some(window) = view.derived.rolling_window {
        let cases_average = derived_points(view, |point| point.new_cases_average);
        let cases_label = format!("{}-day avg (Cases)", window);
        let case_segments = segments(&cases_average);
        if let Some((head, rest)) = case_segments.split_first() {
            chart
                .draw_series(LineSeries::new(
                    head.iter().copied(),
                    CASES_AVERAGE_COLOR.stroke_width(2),
                ))?
                .label(cases_label)
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x.saturating_add(20), y)], CASES_AVERAGE_COLOR)
                });
            for segment in rest {
                chart.draw_series(LineSeries::new(
                    segment.iter().copied(),
                    CASES_AVERAGE_COLOR.stroke_width(2),
                ))?;
            }
        }

        let deaths_average = derived_points(view, |point| point.new_deaths_average);
        let deaths_label = format!("{}-day avg (Deaths)", window);
        let death_segments = segments(&deaths_average);
        if let Some((head, rest)) = death_segments.split_first() {
            chart
                .draw_secondary_series(LineSeries::new(
                    head.iter().copied(),
                    DEATHS_AVERAGE_COLOR.stroke_width(2),
                ))?
                .label(deaths_label)
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x.saturating_add(20), y)], DEATHS_AVERAGE_COLOR)
                });
            for segment in rest {
                chart.draw_secondary_series(LineSeries::new(
                    segment.iter().copied(),
                    DEATHS_AVERAGE_COLOR.stroke_width(2),
                ))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}
