use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

/// Numeric columns carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Observation {
    TotalCases,
    TotalDeaths,
    NewCases,
    NewDeaths,
    PeopleVaccinated,
    Population,
    StringencyIndex,
    MedianAge,
    PopulationDensity,
    GdpPerCapita,
    HumanDevelopmentIndex,
}

impl Observation {
    pub const ALL: [Observation; 11] = [
        Observation::TotalCases,
        Observation::TotalDeaths,
        Observation::NewCases,
        Observation::NewDeaths,
        Observation::PeopleVaccinated,
        Observation::Population,
        Observation::StringencyIndex,
        Observation::MedianAge,
        Observation::PopulationDensity,
        Observation::GdpPerCapita,
        Observation::HumanDevelopmentIndex,
    ];

    /// Column name in the source CSV.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Observation::TotalCases => "total_cases",
            Observation::TotalDeaths => "total_deaths",
            Observation::NewCases => "new_cases",
            Observation::NewDeaths => "new_deaths",
            Observation::PeopleVaccinated => "people_vaccinated",
            Observation::Population => "population",
            Observation::StringencyIndex => "stringency_index",
            Observation::MedianAge => "median_age",
            Observation::PopulationDensity => "population_density",
            Observation::GdpPerCapita => "gdp_per_capita",
            Observation::HumanDevelopmentIndex => "human_development_index",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Observations {
    pub total_cases: Option<f64>,
    pub total_deaths: Option<f64>,
    pub new_cases: Option<f64>,
    pub new_deaths: Option<f64>,
    pub people_vaccinated: Option<f64>,
    pub population: Option<f64>,
    pub stringency_index: Option<f64>,
    pub median_age: Option<f64>,
    pub population_density: Option<f64>,
    pub gdp_per_capita: Option<f64>,
    pub human_development_index: Option<f64>,
}

impl Observations {
    #[must_use]
    pub const fn get(&self, field: Observation) -> Option<f64> {
        match field {
            Observation::TotalCases => self.total_cases,
            Observation::TotalDeaths => self.total_deaths,
            Observation::NewCases => self.new_cases,
            Observation::NewDeaths => self.new_deaths,
            Observation::PeopleVaccinated => self.people_vaccinated,
            Observation::Population => self.population,
            Observation::StringencyIndex => self.stringency_index,
            Observation::MedianAge => self.median_age,
            Observation::PopulationDensity => self.population_density,
            Observation::GdpPerCapita => self.gdp_per_capita,
            Observation::HumanDevelopmentIndex => self.human_development_index,
        }
    }

    pub fn set(&mut self, field: Observation, value: Option<f64>) {
        let value = value.filter(|v| v.is_finite());
        let slot = match field {
            Observation::TotalCases => &mut self.total_cases,
            Observation::TotalDeaths => &mut self.total_deaths,
            Observation::NewCases => &mut self.new_cases,
            Observation::NewDeaths => &mut self.new_deaths,
            Observation::PeopleVaccinated => &mut self.people_vaccinated,
            Observation::Population => &mut self.population,
            Observation::StringencyIndex => &mut self.stringency_index,
            Observation::MedianAge => &mut self.median_age,
            Observation::PopulationDensity => &mut self.population_density,
            Observation::GdpPerCapita => &mut self.gdp_per_capita,
            Observation::HumanDevelopmentIndex => &mut self.human_development_index,
        };
        *slot = value;
    }
}

/// One row of the dataset: an entity on a date with its observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub entity: String,
    pub date: NaiveDate,
    pub observations: Observations,
}

impl Record {
    #[must_use]
    pub fn new(entity: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            entity: entity.into(),
            date,
            observations: Observations::default(),
        }
    }

    #[must_use]
    pub fn with(mut self, field: Observation, value: f64) -> Self {
        self.observations.set(field, Some(value));
        self
    }

    #[must_use]
    pub const fn value(&self, field: Observation) -> Option<f64> {
        self.observations.get(field)
    }
}

/// Records in file order. Neither sorted by date nor grouped by entity.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, de-duplicated entity identifiers.
    #[must_use]
    pub fn entities(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.entity.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Earliest and latest date across all entities.
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.date;
        Some(
            self.records
                .iter()
                .fold((first, first), |(min, max), record| {
                    (min.min(record.date), max.max(record.date))
                }),
        )
    }
}
