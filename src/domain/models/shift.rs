//! Shift (turno) definition domain model.
//!
//! A ShiftDefinition is a recurring work-time rule delivered by the
//! shift-list endpoint. It recurs on a set of weekdays (1=Monday..7=Sunday)
//! restricted to a set of week-of-month indices (1..5).

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::lenient::null_as_empty;
use super::recurrence::RecurrenceSet;

/// Identifier of a shift definition as issued by the backend.
pub type ShiftId = RecordId;

/// A recurring work-shift rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDefinition {
    pub id: ShiftId,

    /// Display label.
    #[serde(alias = "nombre", default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Clock-in time, `HH:MM`.
    #[serde(alias = "hora_inicio", default, deserialize_with = "null_as_empty")]
    pub start_time: String,

    /// Clock-out time, `HH:MM`. May be earlier than `start_time` for overnight turnos.
    #[serde(alias = "hora_fin", default, deserialize_with = "null_as_empty")]
    pub end_time: String,

    /// Weekday indices, 1=Monday..7=Sunday.
    #[serde(alias = "dias_semana", alias = "dias", default)]
    pub weekdays: RecurrenceSet,

    /// Week-of-month indices, 1..5.
    #[serde(alias = "semanas_mes", alias = "semanas", default)]
    pub weeks_of_month: RecurrenceSet,

    /// Name of the parent horario. Informational only.
    #[serde(alias = "horario", alias = "nombre_horario", default)]
    pub schedule_name: Option<String>,
}

impl ShiftDefinition {
    /// Create a definition from its raw comma-separated recurrence strings.
    pub fn new(
        id: impl Into<ShiftId>,
        name: impl Into<String>,
        weekdays: &str,
        weeks_of_month: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_time: String::new(),
            end_time: String::new(),
            weekdays: RecurrenceSet::parse(weekdays),
            weeks_of_month: RecurrenceSet::parse(weeks_of_month),
            schedule_name: None,
        }
    }

    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    pub fn with_schedule(mut self, schedule_name: impl Into<String>) -> Self {
        self.schedule_name = Some(schedule_name.into());
        self
    }

    /// A definition with no weekdays or no weeks can never be selected.
    pub fn is_active(&self) -> bool {
        !self.weekdays.is_empty() && !self.weeks_of_month.is_empty()
    }

    /// Whether this rule recurs on `date`.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.weekdays.contains(weekday_index(date)) && self.weeks_of_month.contains(week_of_month(date))
    }

    /// True when some calendar date would match both definitions.
    ///
    /// Weekday and week-of-month are independent within a month, so sharing
    /// one of each is sufficient.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.weekdays.intersects(&other.weekdays)
            && self.weeks_of_month.intersects(&other.weeks_of_month)
    }

    pub fn start(&self) -> Option<NaiveTime> {
        parse_clock(&self.start_time)
    }

    pub fn end(&self) -> Option<NaiveTime> {
        parse_clock(&self.end_time)
    }

    /// Scheduled length of one occurrence in minutes.
    ///
    /// An end time at or before the start time wraps past midnight.
    pub fn duration_minutes(&self) -> Option<i64> {
        let (start, end) = (self.start()?, self.end()?);
        let minutes = (end - start).num_minutes();
        Some(if minutes <= 0 { minutes + 24 * 60 } else { minutes })
    }
}

/// Weekday index used by recurrence rules: 1=Monday..7=Sunday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    // number_from_monday is 1..=7, so the narrowing is lossless.
    date.weekday().number_from_monday() as u8
}

/// 1-based occurrence of the date's weekday within its month: `ceil(day / 7)`.
pub fn week_of_month(date: NaiveDate) -> u8 {
    (date.day().div_ceil(7)) as u8
}

fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}
