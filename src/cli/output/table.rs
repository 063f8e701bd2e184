//! Table output formatting for CLI commands
//!
//! Renders resolved calendars, shift summaries and events with comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use super::truncate;
use crate::domain::models::{week_of_month, EventScope, ResolvedAssignments, ShiftDefinition};
use crate::services::calendar::weekday_label;
use crate::services::{ClassifiedEvent, ShiftSummary};

/// Table formatter for CLI output
pub struct TableFormatter {
    use_colors: bool,
    max_width: Option<usize>,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    pub fn with_config(use_colors: bool, max_width: Option<usize>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// One row per resolved day.
    pub fn format_assignments(&self, assignments: &ResolvedAssignments<'_>) -> String {
        let mut table = self.create_base_table();

        table.set_header(header(&["Date", "Day", "Week", "Shift", "Schedule", "Hours"]));

        for (date, shift) in assignments.iter() {
            let (shift_cell, schedule, hours) = match shift {
                Some(shift) => {
                    let cell = if self.use_colors {
                        Cell::new(truncate(&shift.name, 30)).fg(Color::Cyan)
                    } else {
                        Cell::new(truncate(&shift.name, 30))
                    };
                    (cell, shift.schedule_name.as_deref().unwrap_or("-"), hours_label(shift))
                }
                None => (Cell::new("-"), "-", "-".to_string()),
            };

            table.add_row(vec![
                Cell::new(date.format("%Y-%m-%d")),
                Cell::new(weekday_label(date)),
                Cell::new(week_of_month(date)),
                shift_cell,
                Cell::new(truncate(schedule, 24)),
                Cell::new(hours),
            ]);
        }

        table.to_string()
    }

    pub fn format_summary(&self, summary: &ShiftSummary) -> String {
        let mut table = self.create_base_table();

        table.set_header(header(&["ID", "Shift", "Schedule", "Days", "Hours"]));

        for totals in &summary.shifts {
            table.add_row(vec![
                Cell::new(&totals.id),
                Cell::new(truncate(&totals.name, 30)),
                Cell::new(truncate(totals.schedule_name.as_deref().unwrap_or("-"), 24)),
                Cell::new(totals.days),
                Cell::new(format!("{:.1}", totals.hours())),
            ]);
        }

        table.to_string()
    }

    pub fn format_events(&self, events: &[ClassifiedEvent<'_>]) -> String {
        let mut table = self.create_base_table();

        table.set_header(header(&["Start", "End", "Scope", "Title"]));

        for classified in events {
            let event = classified.event;
            let scope_cell = if self.use_colors {
                Cell::new(classified.scope).fg(scope_color(classified.scope))
            } else {
                Cell::new(classified.scope)
            };
            let end = event
                .end
                .map(|end| end.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());

            table.add_row(vec![
                Cell::new(event.start.format("%Y-%m-%d %H:%M")),
                Cell::new(end),
                scope_cell,
                Cell::new(truncate(&event.title, 40)),
            ]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(u16::try_from(width).unwrap_or(u16::MAX));
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
        .collect()
}

fn hours_label(shift: &ShiftDefinition) -> String {
    if shift.start_time.is_empty() && shift.end_time.is_empty() {
        "-".to_string()
    } else {
        format!("{}-{}", shift.start_time, shift.end_time)
    }
}

fn scope_color(scope: EventScope) -> Color {
    match scope {
        EventScope::Personal => Color::Green,
        EventScope::Departmental => Color::Yellow,
        EventScope::Global => Color::Magenta,
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}
