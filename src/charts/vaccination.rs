use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::AppResult;
use crate::metrics::{
    DashboardView, GAUGE_REFERENCE_PERCENT, GAUGE_THRESHOLD_PERCENT, VaccinationBreakdown,
    VaccinationGauge,
};
use crate::summary::format::format_delta;

const VACCINATED_COLOR: RGBColor = RGBColor(44, 160, 44);
const UNVACCINATED_COLOR: RGBColor = RGBColor(214, 39, 40);
const GAUGE_COLOR: RGBColor = RGBColor(31, 119, 180);
const REFERENCE_COLOR: RGBColor = RGBColor(127, 140, 141);

/// Vaccinated/unvaccinated pie next to the progress gauge.
///
/// # Errors
///
/// Returns an error when the chart cannot be drawn or written.
pub fn plot_vaccination(view: &DashboardView<'_>, path: &Path) -> AppResult<()> {
    if view.is_empty() {
        return Ok(());
    }

    let root = BitMapBackend::new(path, (1600, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(800);

    draw_breakdown(view.vaccination, &left)?;
    draw_gauge(view.gauge, &right)?;

    root.present()?;
    Ok(())
}

fn draw_breakdown(
    breakdown: Option<VaccinationBreakdown>,
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
) -> AppResult<()> {
    let area = area.titled("Vaccination Status", ("sans-serif", 30))?;
    let Some(breakdown) = breakdown else {
        area.draw(&Text::new(
            "No vaccination data",
            (40, 40),
            ("sans-serif", 24).into_font(),
        ))?;
        return Ok(());
    };

    let (width, height) = area.dim_in_pixel();
    let center = (
        i32::try_from(width / 2).unwrap_or(0),
        i32::try_from(height / 2).unwrap_or(0),
    );
    let radius = f64::from(width.min(height)) * 0.35;
    let sizes = [breakdown.vaccinated, breakdown.unvaccinated];
    let colors = [VACCINATED_COLOR, UNVACCINATED_COLOR];
    let labels = ["Vaccinated", "Unvaccinated"];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 22).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 20).into_font().color(&WHITE));
    area.draw(&pie)?;
    Ok(())
}

fn draw_gauge(
    gauge: VaccinationGauge,
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
) -> AppResult<()> {
    let (Some(rate), Some(delta)) = (gauge.rate, gauge.delta) else {
        let area = area.titled("Vaccination Progress", ("sans-serif", 30))?;
        area.draw(&Text::new(
            "No vaccination data",
            (40, 40),
            ("sans-serif", 24).into_font(),
        ))?;
        return Ok(());
    };

    let caption = format!(
        "Vaccination Progress: {:.1}% ({} vs {:.0}%)",
        rate,
        format_delta(delta),
        GAUGE_REFERENCE_PERCENT
    );
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 30).into_font())
        .margin(30)
        .x_label_area_size(40)
        .build_cartesian_2d(0.0..100.0, 0.0..1.0)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .x_desc("People vaccinated (% of population)")
        .draw()?;

    let fill = if gauge.reached_threshold {
        VACCINATED_COLOR
    } else {
        GAUGE_COLOR
    };
    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.0, 0.3), (rate.clamp(0.0, 100.0), 0.7)],
        fill.filled(),
    )))?;

    chart
        .draw_series(LineSeries::new(
            [(GAUGE_REFERENCE_PERCENT, 0.0), (GAUGE_REFERENCE_PERCENT, 1.0)],
            REFERENCE_COLOR.stroke_width(2),
        ))?
        .label("Reference (50%)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x.saturating_add(20), y)], REFERENCE_COLOR)
        });
    chart
        .draw_series(LineSeries::new(
            [(GAUGE_THRESHOLD_PERCENT, 0.0), (GAUGE_THRESHOLD_PERCENT, 1.0)],
            UNVACCINATED_COLOR.stroke_width(3),
        ))?
        .label("Target (90%)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x.saturating_add(20), y)], UNVACCINATED_COLOR)
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}
