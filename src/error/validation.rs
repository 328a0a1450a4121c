use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid date '{value}'. Expected YYYY-MM-DD.")]
    InvalidDate { value: String },
    #[error("Rolling window must be >= 1.")]
    RollingWindowZero,
    #[error("Invalid rolling window '{value}': {source}")]
    InvalidRollingWindow {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Dataset contains no usable records.")]
    EmptyDataset,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
