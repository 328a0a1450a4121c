use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::Observation;
use crate::metrics::{
    CountryProfile, DashboardView, DateRange, VaccinationBreakdown, VaccinationGauge,
};

/// Latest values; `null` means the observation was absent.
#[derive(Debug, Serialize)]
pub struct ReportSnapshot {
    pub date: Option<NaiveDate>,
    pub total_cases: Option<f64>,
    pub total_deaths: Option<f64>,
    pub new_cases: Option<f64>,
    pub new_deaths: Option<f64>,
    pub stringency_index: Option<f64>,
    pub case_fatality_ratio: Option<f64>,
    pub vaccination_rate: Option<f64>,
}

/// One record of the selected series. Averages are `null` when undefined
/// or when `rolling_window` is `null`.
#[derive(Debug, Serialize)]
pub struct ReportPoint {
    pub date: NaiveDate,
    pub total_cases: Option<f64>,
    pub total_deaths: Option<f64>,
    pub new_cases: Option<f64>,
    pub new_deaths: Option<f64>,
    pub stringency_index: Option<f64>,
    pub case_fatality_ratio: Option<f64>,
    pub vaccination_rate: Option<f64>,
    pub new_cases_average: Option<f64>,
    pub new_deaths_average: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub country: String,
    pub range: Option<DateRange>,
    pub records: usize,
    pub rolling_window: Option<usize>,
    pub snapshot: ReportSnapshot,
    pub vaccination: Option<VaccinationBreakdown>,
    pub gauge: VaccinationGauge,
    pub profile: Option<CountryProfile>,
    pub series: Vec<ReportPoint>,
}

impl DashboardReport {
    #[must_use]
    pub fn from_view(view: &DashboardView<'_>) -> Self {
        let field = |observation| view.snapshot.field(observation).as_option();
        let latest_cfr = view
            .derived
            .points
            .last()
            .and_then(|point| point.case_fatality_ratio);
        let snapshot = ReportSnapshot {
            date: view.snapshot.date(),
            total_cases: field(Observation::TotalCases),
            total_deaths: field(Observation::TotalDeaths),
            new_cases: field(Observation::NewCases),
            new_deaths: field(Observation::NewDeaths),
            stringency_index: field(Observation::StringencyIndex),
            case_fatality_ratio: latest_cfr,
            vaccination_rate: view.gauge.rate,
        };

        let series = view
            .series
            .iter()
            .zip(&view.derived.points)
            .map(|(record, derived)| ReportPoint {
                date: record.date,
                total_cases: record.value(Observation::TotalCases),
                total_deaths: record.value(Observation::TotalDeaths),
                new_cases: record.value(Observation::NewCases),
                new_deaths: record.value(Observation::NewDeaths),
                stringency_index: record.value(Observation::StringencyIndex),
                case_fatality_ratio: derived.case_fatality_ratio,
                vaccination_rate: derived.vaccination_rate,
                new_cases_average: derived.new_cases_average,
                new_deaths_average: derived.new_deaths_average,
            })
            .collect();

        Self {
            country: view.selection.entity.clone(),
            range: view.selection.range,
            records: view.series.len(),
            rolling_window: view.derived.rolling_window,
            snapshot,
            vaccination: view.vaccination,
            gauge: view.gauge,
            profile: view.profile,
            series,
        }
    }
}
