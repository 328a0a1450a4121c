use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::{Dataset, Observation, Record};

use super::derive::{DerivedSeries, derive, vaccination_rate};
use super::filter::{FilteredSeries, filter};
use super::selection::{Selection, ViewOptions};
use super::snapshot::{Snapshot, SnapshotField, snapshot};

/// Gauge delta is reported against this value.
pub const GAUGE_REFERENCE_PERCENT: f64 = 50.0;
pub const GAUGE_THRESHOLD_PERCENT: f64 = 90.0;

/// Static demographics, taken from the latest record that has all of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountryProfile {
    pub date: NaiveDate,
    pub median_age: f64,
    pub population_density: f64,
    pub gdp_per_capita: f64,
    pub human_development_index: SnapshotField,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VaccinationBreakdown {
    pub vaccinated: f64,
    pub unvaccinated: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VaccinationGauge {
    pub rate: Option<f64>,
    pub delta: Option<f64>,
    pub reached_threshold: bool,
}

#[must_use]
pub fn country_profile(series: &[&Record]) -> Option<CountryProfile> {
    series.iter().rev().find_map(|record| {
        Some(CountryProfile {
            date: record.date,
            median_age: record.value(Observation::MedianAge)?,
            population_density: record.value(Observation::PopulationDensity)?,
            gdp_per_capita: record.value(Observation::GdpPerCapita)?,
            human_development_index: SnapshotField::from_option(
                record.value(Observation::HumanDevelopmentIndex),
            ),
        })
    })
}

#[must_use]
pub fn vaccination_breakdown(snapshot: &Snapshot<'_>) -> Option<VaccinationBreakdown> {
    let record = snapshot.record()?;
    let vaccinated = record.value(Observation::PeopleVaccinated)?;
    let population = record
        .value(Observation::Population)
        .filter(|population| *population > 0.0)?;
    Some(VaccinationBreakdown {
        vaccinated,
        unvaccinated: (population - vaccinated).max(0.0),
    })
}

#[must_use]
pub fn vaccination_gauge(snapshot: &Snapshot<'_>) -> VaccinationGauge {
    let rate = snapshot.record().and_then(vaccination_rate);
    VaccinationGauge {
        rate,
        delta: rate.map(|rate| rate - GAUGE_REFERENCE_PERCENT),
        reached_threshold: rate.is_some_and(|rate| rate >= GAUGE_THRESHOLD_PERCENT),
    }
}

/// Everything the renderers need for one selection.
#[derive(Debug, Clone)]
pub struct DashboardView<'data> {
    pub selection: Selection,
    pub options: ViewOptions,
    pub series: FilteredSeries<'data>,
    pub snapshot: Snapshot<'data>,
    pub derived: DerivedSeries,
    pub profile: Option<CountryProfile>,
    pub vaccination: Option<VaccinationBreakdown>,
    pub gauge: VaccinationGauge,
}

impl DashboardView<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.series.first().map(|record| record.date)
    }
}

/// Runs the full pipeline for one interaction.
#[must_use]
pub fn compute<'data>(
    dataset: &'data Dataset,
    selection: &Selection,
    options: ViewOptions,
) -> DashboardView<'data> {
    let series = filter(dataset, selection);
    let latest = snapshot(&series);
    let derived = derive(&series, &options);
    let profile = country_profile(&series);
    let vaccination = vaccination_breakdown(&latest);
    let gauge = vaccination_gauge(&latest);
    tracing::debug!(
        entity = %selection.entity,
        records = series.len(),
        "Computed dashboard view"
    );
    DashboardView {
        selection: selection.clone(),
        options,
        series,
        snapshot: latest,
        derived,
        profile,
        vaccination,
        gauge,
    }
}
