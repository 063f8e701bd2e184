//! Resolution output: calendar date to turno mapping.

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::shift::ShiftDefinition;

/// The shift, if any, assigned to each queried date.
///
/// Entries borrow the definitions they were resolved from. Serializes as a
/// JSON object keyed by `YYYY-MM-DD` with `null` for unassigned dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedAssignments<'a> {
    days: BTreeMap<NaiveDate, Option<&'a ShiftDefinition>>,
}

impl<'a> ResolvedAssignments<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, date: NaiveDate, shift: Option<&'a ShiftDefinition>) {
        self.days.insert(date, shift);
    }

    /// Shift assigned to `date`. `None` when the date was not queried,
    /// `Some(None)` when it was queried and no turno applies.
    pub fn get(&self, date: NaiveDate) -> Option<Option<&'a ShiftDefinition>> {
        self.days.get(&date).copied()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Number of distinct dates covered.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<&'a ShiftDefinition>)> + '_ {
        self.days.iter().map(|(date, shift)| (*date, *shift))
    }

    pub fn assigned_count(&self) -> usize {
        self.days.values().filter(|s| s.is_some()).count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.len() - self.assigned_count()
    }
}

impl<'a> IntoIterator for ResolvedAssignments<'a> {
    type Item = (NaiveDate, Option<&'a ShiftDefinition>);
    type IntoIter = btree_map::IntoIter<NaiveDate, Option<&'a ShiftDefinition>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}
