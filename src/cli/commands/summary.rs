//! Implementation of the `turnos summary` command.

use anyhow::Result;
use serde::Serialize;

use super::shifts::{fetch_definitions, shadowed_pairs, ShadowedShift, ShiftsArgs};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::Config;
use crate::services::{DateRange, ShiftResolver, ShiftSummary};

#[derive(Debug, Serialize)]
pub struct SummaryOutput {
    pub range: DateRange,
    #[serde(flatten)]
    pub summary: ShiftSummary,
    pub total_hours: f64,
    pub shadowed: Vec<ShadowedShift>,
}

impl SummaryOutput {
    pub fn new(range: DateRange, summary: ShiftSummary, shadowed: Vec<ShadowedShift>) -> Self {
        let total_hours = summary.total_minutes() as f64 / 60.0;
        Self {
            range,
            summary,
            total_hours,
            shadowed,
        }
    }
}

impl CommandOutput for SummaryOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Summary from {} to {}", self.range.from, self.range.to)];

        if self.summary.shifts.is_empty() {
            lines.push("No shift assigned in this range.".to_string());
        } else {
            lines.push(TableFormatter::new().format_summary(&self.summary));
        }

        lines.push(format!(
            "{} assigned days, {} without shift, {:.1} hours",
            self.summary.assigned_days(),
            self.summary.unassigned_days,
            self.total_hours
        ));
        for pair in &self.shadowed {
            lines.push(format!(
                "Note: '{}' is shadowed by '{}' on shared dates",
                pair.shadowed, pair.winner
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: ShiftsArgs, config: &Config, json_mode: bool) -> Result<()> {
    let range = args.range.resolve_today()?;
    let definitions = fetch_definitions(&args, config).await?;

    let assignments = ShiftResolver::new().resolve(&definitions, range.days());
    let result = SummaryOutput::new(
        range,
        ShiftSummary::from_assignments(&assignments),
        shadowed_pairs(&definitions),
    );

    output(&result, json_mode);
    Ok(())
}
