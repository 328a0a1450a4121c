use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult, DatasetError};

use super::dates::parse_date;
use super::record::{Dataset, Observation, Observations, Record};

const ENTITY_COLUMN: &str = "location";
const DATE_COLUMN: &str = "date";

/// A parsed dataset plus the number of rows that had to be dropped.
#[derive(Debug)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub skipped_rows: usize,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    total_cases: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    total_deaths: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    new_cases: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    new_deaths: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    people_vaccinated: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    population: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    stringency_index: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    median_age: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    population_density: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    gdp_per_capita: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    human_development_index: Option<f64>,
}

impl RawRow {
    fn into_record(self) -> Option<Record> {
        let entity = self.location.map(|value| value.trim().to_owned())?;
        if entity.is_empty() {
            return None;
        }
        let date = parse_date(self.date.as_deref()?).ok()?;

        let mut observations = Observations::default();
        let values = [
            (Observation::TotalCases, self.total_cases),
            (Observation::TotalDeaths, self.total_deaths),
            (Observation::NewCases, self.new_cases),
            (Observation::NewDeaths, self.new_deaths),
            (Observation::PeopleVaccinated, self.people_vaccinated),
            (Observation::Population, self.population),
            (Observation::StringencyIndex, self.stringency_index),
            (Observation::MedianAge, self.median_age),
            (Observation::PopulationDensity, self.population_density),
            (Observation::GdpPerCapita, self.gdp_per_capita),
            (
                Observation::HumanDevelopmentIndex,
                self.human_development_index,
            ),
        ];
        for (field, value) in values {
            observations.set(field, value);
        }

        Some(Record {
            entity,
            date,
            observations,
        })
    }
}

/// Loads the dataset CSV from disk.
///
/// # Errors
///
/// Returns an error when the file cannot be opened, a required column is
/// missing, or the CSV structure is malformed.
pub fn load_dataset(path: &Path) -> AppResult<LoadedDataset> {
    info!("Loading dataset from '{}'", path.display());
    let reader = csv_builder().from_path(path).map_err(|err| {
        AppError::dataset(DatasetError::Open {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    collect_records(reader, path)
}

/// Reads a dataset from any reader, e.g. an in-memory buffer.
///
/// # Errors
///
/// Returns an error when a required column is missing or the CSV structure
/// is malformed.
pub fn read_dataset<R: io::Read>(source: R) -> AppResult<LoadedDataset> {
    collect_records(csv_builder().from_reader(source), Path::new("<memory>"))
}

fn csv_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

fn collect_records<R: io::Read>(
    mut reader: csv::Reader<R>,
    path: &Path,
) -> AppResult<LoadedDataset> {
    let headers = reader
        .headers()
        .map_err(|err| read_error(path, err))?
        .clone();
    for column in [ENTITY_COLUMN, DATE_COLUMN] {
        if !headers.iter().any(|header| header == column) {
            return Err(AppError::dataset(DatasetError::MissingColumn {
                path: path.to_path_buf(),
                column,
            }));
        }
    }
    for field in Observation::ALL {
        if !headers.iter().any(|header| header == field.column()) {
            debug!(
                "Dataset has no '{}' column; values will be absent",
                field.column()
            );
        }
    }

    let mut records = Vec::new();
    let mut skipped_rows = 0usize;
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        let row = row.map_err(|err| read_error(path, err))?;
        match row.into_record() {
            Some(record) => records.push(record),
            None => {
                skipped_rows = skipped_rows.saturating_add(1);
                debug!(
                    "Skipping row {} without location or valid date",
                    idx.saturating_add(1)
                );
            }
        }
    }

    if skipped_rows > 0 {
        warn!(
            "Skipped {} rows without a location or a valid date",
            skipped_rows
        );
    }
    info!("Loaded {} records", records.len());

    Ok(LoadedDataset {
        dataset: Dataset::new(records),
        skipped_rows,
    })
}

fn read_error(path: &Path, err: csv::Error) -> AppError {
    AppError::dataset(DatasetError::Read {
        path: PathBuf::from(path),
        source: err,
    })
}
