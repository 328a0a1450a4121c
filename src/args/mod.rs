//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::DashboardArgs;
pub use types::OutputFormat;

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
