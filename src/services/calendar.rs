//! Calendar date utilities: inclusive date ranges, month and month-grid
//! expansion, and parsing of user-supplied dates.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use crate::domain::errors::{DomainError, DomainResult};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> DomainResult<Self> {
        if from > to {
            return Err(DomainError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn single(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    /// Every day of the given month.
    pub fn month(year: i32, month: u32) -> DomainResult<Self> {
        let first = first_of_month(year, month)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(DomainError::InvalidMonth { year, month })?;
        Ok(Self { from: first, to: last })
    }

    /// The month padded to whole Monday-to-Sunday weeks, as a month view shows it.
    pub fn month_grid(year: i32, month: u32) -> DomainResult<Self> {
        let Self { from, to } = Self::month(year, month)?;
        let lead = i64::from(from.weekday().num_days_from_monday());
        let tail = 6 - i64::from(to.weekday().num_days_from_monday());
        Ok(Self {
            from: from - Duration::days(lead),
            to: to + Duration::days(tail),
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        usize::try_from((self.to - self.from).num_days() + 1).unwrap_or(0)
    }

    /// A range always holds at least one day.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}

fn first_of_month(year: i32, month: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(DomainError::InvalidMonth { year, month })
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(raw.to_string()))
}

/// Parse `YYYY-MM` into `(year, month)`.
pub fn parse_month(raw: &str) -> DomainResult<(i32, u32)> {
    let invalid = || DomainError::InvalidMonthFormat(raw.to_string());
    let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    first_of_month(year, month)?;
    Ok((year, month))
}

/// Short Spanish weekday label, Monday first.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    const LABELS: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];
    LABELS[date.weekday().num_days_from_monday() as usize]
}
