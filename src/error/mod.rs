mod app;
mod config;
mod dataset;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dataset::DatasetError;
pub use validation::ValidationError;
