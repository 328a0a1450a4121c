use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const SAMPLE_CSV: &str = "\
location,date,total_cases,total_deaths,new_cases,new_deaths,people_vaccinated,population,stringency_index,median_age,population_density,gdp_per_capita,human_development_index
United States,2021-01-02,110,2.2,10,0.2,,330000000,70,38.3,35.6,54225.4,0.926
United States,2021-01-01,100,2,100,2,,330000000,71,38.3,35.6,54225.4,0.926
France,2021-01-01,50,1,50,1,1000,2000,60,42,122.5,38605.7,0.901
,2021-01-01,1,1,1,1,,,,,,,
France,not-a-date,1,1,1,1,,,,,,,
";

/// Writes the sample dataset into `dir` and returns its path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_sample(dir: &Path) -> Result<PathBuf, String> {
    let path = dir.join("covid.csv");
    fs::write(&path, SAMPLE_CSV).map_err(|err| format!("write dataset failed: {}", err))?;
    Ok(path)
}

/// Runs the binary inside `cwd` so no stray config file is picked up.
///
/// # Errors
///
/// Returns an error if the binary cannot be located or spawned.
pub fn run_covidash<I, S>(cwd: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = covidash_bin()?;
    Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("COVIDASH_LOG")
        .env_remove("COVIDASH_DATA")
        .output()
        .map_err(|err| format!("run covidash failed: {}", err))
}

fn covidash_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_covidash").map_or_else(
        || Err("CARGO_BIN_EXE_covidash missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

/// Fails with both output streams when the process did not succeed.
///
/// # Errors
///
/// Returns an error describing the failed run.
pub fn expect_success(output: &Output) -> Result<String, String> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            stdout,
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(stdout)
}
