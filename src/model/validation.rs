use chrono::NaiveDate;
use thiserror::Error;

/// Earliest year the form accepts.
pub const YEAR_MIN: i32 = 1990;
/// Latest year the form accepts.
pub const YEAR_MAX: i32 = 2050;

/// Validation errors for project record fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("project name is required")]
    EmptyName,
    #[error("at least one province is required")]
    NoProvince,
    #[error("not a number: {0}")]
    InvalidNumber(String),
    #[error("total value cannot be negative")]
    NegativeValue,
    #[error("year {0} outside {YEAR_MIN}-{YEAR_MAX}")]
    YearOutOfRange(i32),
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

/// Validates that a project name is non-empty.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

/// Validates that at least one province is selected.
pub fn validate_provinces(provinces: &[String]) -> Result<(), ValidationError> {
    if provinces.is_empty() {
        Err(ValidationError::NoProvince)
    } else {
        Ok(())
    }
}

/// Parses a year field and checks it against the accepted range.
pub fn parse_year(input: &str) -> Result<i32, ValidationError> {
    let year: i32 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(input.to_string()))?;
    if (YEAR_MIN..=YEAR_MAX).contains(&year) {
        Ok(year)
    } else {
        Err(ValidationError::YearOutOfRange(year))
    }
}

/// Parses a total-value field; the value must be non-negative.
pub fn parse_total_value(input: &str) -> Result<f64, ValidationError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(input.to_string()))?;
    if value < 0.0 {
        Err(ValidationError::NegativeValue)
    } else {
        Ok(value)
    }
}

/// Parses a `YYYY-MM-DD` date field.
pub fn parse_last_modified(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}
