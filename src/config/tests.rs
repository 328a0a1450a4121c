use chrono::NaiveDate;
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tempfile::tempdir;

use super::{apply_config, load_config, load_config_file, types::ConfigFile};
use crate::args::{DashboardArgs, OutputFormat};
use crate::error::{AppError, AppResult, ConfigError};

fn parse_cli(argv: &[&str]) -> AppResult<(DashboardArgs, ArgMatches)> {
    let matches = DashboardArgs::command().try_get_matches_from(argv.iter().copied())?;
    let args = DashboardArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("covidash.toml");
    let content = r#"
data = "data/owid.csv"
country = "Japan"
start = "2021-02-01"
end = "2021-03-31"
moving_average = true
rolling_window = 14
show_trends = false
output_format = "json"
"#;
    std::fs::write(&path, content)?;

    let config = load_config_file(&path)?;
    if config.data.as_deref() != Some("data/owid.csv")
        || config.country.as_deref() != Some("Japan")
    {
        return Err(AppError::config("Unexpected data or country"));
    }
    if config.rolling_window != Some(14) || config.moving_average != Some(true) {
        return Err(AppError::config("Unexpected moving average settings"));
    }
    if config.output_format != Some(OutputFormat::Json) {
        return Err(AppError::config("Unexpected output format"));
    }
    Ok(())
}

#[test]
fn parse_json_config_with_aliases() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("covidash.json");
    let content = r#"{
  "data_path": "covid.csv",
  "location": "Kenya",
  "show_moving_average": true
}"#;
    std::fs::write(&path, content)?;

    let config = load_config_file(&path)?;
    if config.data.as_deref() != Some("covid.csv") || config.country.as_deref() != Some("Kenya") {
        return Err(AppError::config("Aliases should map to data/country"));
    }
    if config.moving_average != Some(true) {
        return Err(AppError::config("Alias should map to moving_average"));
    }
    Ok(())
}

#[test]
fn reject_unknown_extension() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("covidash.yaml");
    std::fs::write(&path, "country: Peru")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected unsupported extension error")),
    }
}

#[test]
fn explicit_config_path_must_exist() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing.toml");
    let path_str = path.to_string_lossy().into_owned();
    match load_config(Some(&path_str)) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected read error")),
    }
}

#[test]
fn config_fills_values_not_given_on_cli() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["covidash", "--country", "Brazil"])?;
    let config = ConfigFile {
        country: Some("Peru".to_owned()),
        start: Some("2021-01-15".to_owned()),
        moving_average: Some(true),
        rolling_window: Some(3),
        show_trends: Some(false),
        no_charts: Some(true),
        ..ConfigFile::default()
    };
    apply_config(&mut args, &matches, &config)?;

    if args.country.as_deref() != Some("Brazil") {
        return Err(AppError::config("CLI country must win over config"));
    }
    if args.start != NaiveDate::from_ymd_opt(2021, 1, 15) {
        return Err(AppError::config("Config start should apply"));
    }
    if !args.moving_average || args.rolling_window != 3 || !args.no_trends || !args.no_charts {
        return Err(AppError::config("Config toggles should apply"));
    }
    Ok(())
}

#[test]
fn config_rejects_zero_rolling_window() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["covidash"])?;
    let config = ConfigFile {
        rolling_window: Some(0),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::FieldMustBePositive { field })) => {
            if field == "rolling_window" {
                Ok(())
            } else {
                Err(AppError::config(format!("Unexpected field: {}", field)))
            }
        }
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => Err(AppError::config("Expected zero window to fail")),
    }
}

#[test]
fn config_rejects_invalid_dates() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["covidash"])?;
    let config = ConfigFile {
        end: Some("31/12/2021".to_owned()),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::InvalidDate { field: "end", .. })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => Err(AppError::config("Expected invalid date to fail")),
    }
}
