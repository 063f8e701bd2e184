//! Domain errors for the Turnos shift calendar.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building the date set to resolve.
///
/// Resolution itself never fails: malformed or missing recurrence data
/// degrades to "no turno" for the affected dates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}': expected YYYY-MM")]
    InvalidMonthFormat(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
