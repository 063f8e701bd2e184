//! CLI command implementations.

pub mod config;
pub mod events;
pub mod init;
pub mod shifts;
pub mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

use crate::adapters::JsonFileSource;
use crate::domain::models::ApiConfig;
use crate::domain::ports::{EventSource, ShiftSource};
use crate::infrastructure::api::ApiClient;
use crate::services::calendar::{parse_date, parse_month};
use crate::services::DateRange;

/// Date range selection shared by the calendar commands.
///
/// With neither `--month` nor `--from/--to` the current month is used.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeArgs {
    /// Month to show (YYYY-MM)
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    pub month: Option<String>,

    /// First day, inclusive (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Last day, inclusive (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Pad the month to whole Monday-Sunday weeks
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub grid: bool,
}

impl RangeArgs {
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange> {
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            return Ok(DateRange::new(parse_date(from)?, parse_date(to)?)?);
        }

        let (year, month) = match &self.month {
            Some(raw) => parse_month(raw)?,
            None => (today.year(), today.month()),
        };

        let range = if self.grid {
            DateRange::month_grid(year, month)?
        } else {
            DateRange::month(year, month)?
        };
        Ok(range)
    }

    pub fn resolve_today(&self) -> Result<DateRange> {
        self.resolve(Local::now().date_naive())
    }
}

fn api_client(config: &ApiConfig) -> Result<ApiClient> {
    ApiClient::from_config(config).context("Failed to create API client")
}

/// Shift source for a command: the JSON export when given, else the API.
pub(crate) fn shift_source(file: Option<PathBuf>, config: &ApiConfig) -> Result<Box<dyn ShiftSource>> {
    Ok(match file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(api_client(config)?),
    })
}

pub(crate) fn event_source(file: Option<PathBuf>, config: &ApiConfig) -> Result<Box<dyn EventSource>> {
    Ok(match file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(api_client(config)?),
    })
}
