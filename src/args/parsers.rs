use chrono::NaiveDate;

use crate::dataset::parse_date;
use crate::error::ValidationError;

pub(crate) fn parse_date_arg(s: &str) -> Result<NaiveDate, ValidationError> {
    parse_date(s)
}

pub(crate) fn parse_rolling_window(s: &str) -> Result<usize, ValidationError> {
    let window: usize = s
        .trim()
        .parse()
        .map_err(|err| ValidationError::InvalidRollingWindow {
            value: s.to_owned(),
            source: err,
        })?;
    if window == 0 {
        return Err(ValidationError::RollingWindowZero);
    }
    Ok(window)
}
