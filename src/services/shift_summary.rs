//! Per-turno totals over a resolved date range.

use serde::Serialize;
use tracing::warn;

use crate::domain::models::{ResolvedAssignments, ShiftId};

/// Totals for one shift definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftTotals {
    pub id: ShiftId,
    pub name: String,
    pub schedule_name: Option<String>,
    /// Days the shift was assigned to.
    pub days: usize,
    /// Scheduled minutes across those days. Unparseable times count as zero.
    pub minutes: i64,
}

impl ShiftTotals {
    pub fn hours(&self) -> f64 {
        self.minutes as f64 / 60.0
    }
}

/// Aggregate of a resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShiftSummary {
    /// One entry per shift, in order of first assigned date.
    pub shifts: Vec<ShiftTotals>,
    pub unassigned_days: usize,
}

impl ShiftSummary {
    pub fn from_assignments(assignments: &ResolvedAssignments<'_>) -> Self {
        let mut summary = Self::default();

        for (date, shift) in assignments.iter() {
            let Some(shift) = shift else {
                summary.unassigned_days += 1;
                continue;
            };

            let minutes = shift.duration_minutes().unwrap_or_else(|| {
                warn!(
                    shift_id = %shift.id,
                    %date,
                    start = %shift.start_time,
                    end = %shift.end_time,
                    "unparseable shift times, counting zero minutes"
                );
                0
            });

            // Identity is the definition's id; two definitions sharing an id
            // are folded together.
            match summary.shifts.iter_mut().find(|t| t.id == shift.id) {
                Some(totals) => {
                    totals.days += 1;
                    totals.minutes += minutes;
                }
                None => summary.shifts.push(ShiftTotals {
                    id: shift.id.clone(),
                    name: shift.name.clone(),
                    schedule_name: shift.schedule_name.clone(),
                    days: 1,
                    minutes,
                }),
            }
        }

        summary
    }

    pub fn total_minutes(&self) -> i64 {
        self.shifts.iter().map(|t| t.minutes).sum()
    }

    pub fn assigned_days(&self) -> usize {
        self.shifts.iter().map(|t| t.days).sum()
    }
}
