//! Shift-to-calendar-date resolution.
//!
//! Maps recurring turno rules onto concrete dates. For each date the first
//! definition (in input order) whose weekday set contains the date's weekday
//! index and whose week-of-month set contains its week index wins. There is
//! no priority field: overlapping rules shadow each other by list order.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use super::calendar::DateRange;
use crate::domain::errors::DomainResult;
use crate::domain::models::{ResolvedAssignments, ShiftDefinition};

/// Resolves which shift definition applies to each calendar date.
///
/// Stateless and side-effect free; safe to call on every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftResolver;

impl ShiftResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve every date in `dates` against `definitions`.
    ///
    /// Duplicate dates collapse onto one entry. Definitions with empty
    /// recurrence sets never match.
    #[instrument(skip_all, fields(definitions = definitions.len()))]
    pub fn resolve<'a, I>(&self, definitions: &'a [ShiftDefinition], dates: I) -> ResolvedAssignments<'a>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut assignments = ResolvedAssignments::new();
        for date in dates {
            assignments.insert(date, Self::shift_for(definitions, date));
        }
        debug!(
            days = assignments.len(),
            assigned = assignments.assigned_count(),
            "resolved turnos"
        );
        assignments
    }

    /// First definition, in input order, whose recurrence covers `date`.
    pub fn shift_for(definitions: &[ShiftDefinition], date: NaiveDate) -> Option<&ShiftDefinition> {
        definitions.iter().find(|shift| shift.matches(date))
    }

    /// Resolve every day of an inclusive range.
    pub fn resolve_range<'a>(
        &self,
        definitions: &'a [ShiftDefinition],
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<ResolvedAssignments<'a>> {
        let range = DateRange::new(from, to)?;
        Ok(self.resolve(definitions, range.days()))
    }

    /// Resolve every day of a calendar month.
    pub fn resolve_month<'a>(
        &self,
        definitions: &'a [ShiftDefinition],
        year: i32,
        month: u32,
    ) -> DomainResult<ResolvedAssignments<'a>> {
        let range = DateRange::month(year, month)?;
        Ok(self.resolve(definitions, range.days()))
    }

    /// Pairs of definitions whose recurrences can match the same date.
    ///
    /// The later definition of each pair is shadowed by the earlier one on
    /// the shared dates. Resolution is not affected; callers use this to warn.
    pub fn overlapping_pairs(definitions: &[ShiftDefinition]) -> Vec<(&ShiftDefinition, &ShiftDefinition)> {
        let mut pairs = Vec::new();
        for (i, earlier) in definitions.iter().enumerate() {
            for later in &definitions[i + 1..] {
                if earlier.overlaps(later) {
                    pairs.push((earlier, later));
                }
            }
        }
        pairs
    }
}
