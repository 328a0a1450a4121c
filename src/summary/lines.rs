use crate::dataset::Observation;
use crate::metrics::{DashboardView, GAUGE_REFERENCE_PERCENT};

use super::format::{
    NO_DATA, format_count, format_delta, format_opt_count, format_opt_decimal, format_opt_percent,
};

pub fn selection_lines(view: &DashboardView<'_>) -> Vec<String> {
    let range = view.selection.range.map_or_else(
        || "all dates".to_owned(),
        |range| format!("{} to {}", range.start, range.end),
    );
    let latest = view
        .snapshot
        .date()
        .map_or_else(|| "no data".to_owned(), |date| date.to_string());
    vec![
        format!("Country: {}", view.selection.entity),
        format!("Date range: {}", range),
        format!("Records: {}", view.series.len()),
        format!("Latest: {}", latest),
    ]
}

/// Key metric cards from the snapshot.
pub fn card_lines(view: &DashboardView<'_>) -> Vec<String> {
    let field = |observation| view.snapshot.field(observation).as_option();
    vec![
        format!("Total Cases: {}", format_opt_count(field(Observation::TotalCases))),
        format!("Total Deaths: {}", format_opt_count(field(Observation::TotalDeaths))),
        format!("New Cases: {}", format_opt_count(field(Observation::NewCases))),
        format!(
            "Vaccination Rate: {}",
            format_opt_percent(view.gauge.rate, 1)
        ),
    ]
}

pub fn profile_lines(view: &DashboardView<'_>) -> Vec<String> {
    let Some(profile) = view.profile else {
        return vec![format!("Country Profile: {}", NO_DATA)];
    };
    vec![
        format!("Median Age: {:.1} years", profile.median_age),
        format!("Population Density: {:.1}/km²", profile.population_density),
        format!("GDP per Capita: ${}", format_count(profile.gdp_per_capita)),
        format!(
            "HDI: {}",
            format_opt_decimal(profile.human_development_index.as_option(), 3)
        ),
    ]
}

pub fn summary_lines(view: &DashboardView<'_>) -> Vec<String> {
    let mut lines = selection_lines(view);
    if view.is_empty() {
        lines.push(format!("No data for {} in the selected range.", view.selection.entity));
        return lines;
    }

    lines.push(String::new());
    lines.extend(card_lines(view));

    let latest_cfr = view
        .derived
        .points
        .last()
        .and_then(|point| point.case_fatality_ratio);
    lines.push(format!(
        "Case Fatality Rate: {}",
        format_opt_percent(latest_cfr, 2)
    ));
    lines.push(format!(
        "Stringency Index: {}",
        format_opt_decimal(
            view.snapshot.field(Observation::StringencyIndex).as_option(),
            1
        )
    ));

    match (view.gauge.rate, view.gauge.delta) {
        (Some(rate), Some(delta)) => lines.push(format!(
            "Vaccination Progress: {:.1}% ({} vs {:.0}%){}",
            rate,
            format_delta(delta),
            GAUGE_REFERENCE_PERCENT,
            if view.gauge.reached_threshold {
                " target reached"
            } else {
                ""
            }
        )),
        _ => lines.push(format!("Vaccination Progress: {}", NO_DATA)),
    }
    if let Some(split) = view.vaccination {
        lines.push(format!(
            "Vaccinated / Unvaccinated: {} / {}",
            format_count(split.vaccinated),
            format_count(split.unvaccinated)
        ));
    }

    if let Some(window) = view.derived.rolling_window {
        let last_average = view
            .derived
            .points
            .last()
            .and_then(|point| point.new_cases_average);
        lines.push(format!(
            "{}-day avg (Cases): {}",
            window,
            format_opt_count(last_average)
        ));
    }

    lines.push(String::new());
    lines.extend(profile_lines(view));
    lines
}
