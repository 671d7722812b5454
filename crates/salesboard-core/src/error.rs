use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Failure of an overview-with-comparison request.
#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("startDate {start} is after endDate {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    /// The preceding window would fall outside the representable calendar.
    #[error("previous period for {start}..{end} is out of range")]
    OutOfRange { start: NaiveDate, end: NaiveDate },

    #[error(transparent)]
    Query(#[from] anyhow::Error),
}
