//! In-memory dataset model and CSV loading.
mod dates;
mod loader;
mod record;


pub use dates::parse_date;
pub use loader::{LoadedDataset, load_dataset, read_dataset};
pub use record::{Dataset, Observation, Observations, Record};
