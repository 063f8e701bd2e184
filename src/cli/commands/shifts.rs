//! Implementation of the `turnos shifts` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::warn;

use super::{shift_source, RangeArgs};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, RecordId, ResolvedAssignments, ShiftDefinition};
use crate::domain::ports::ShiftQuery;
use crate::services::{DateRange, ShiftResolver};

#[derive(Args, Debug, Clone, Default)]
pub struct ShiftsArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Read shift definitions from a JSON export instead of the API
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Fetch the shifts of this user
    #[arg(short, long)]
    pub user: Option<RecordId>,
}

/// Pair of definitions where `shadowed` loses to `winner` on shared dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedShift {
    pub winner: String,
    pub shadowed: String,
}

#[derive(Debug, Serialize)]
pub struct ShiftsOutput<'a> {
    pub range: DateRange,
    pub days: ResolvedAssignments<'a>,
    pub shadowed: Vec<ShadowedShift>,
}

impl CommandOutput for ShiftsOutput<'_> {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Shifts from {} to {}", self.range.from, self.range.to),
            TableFormatter::new().format_assignments(&self.days),
            format!(
                "{} of {} days assigned",
                self.days.assigned_count(),
                self.days.len()
            ),
        ];
        for pair in &self.shadowed {
            lines.push(format!(
                "Note: '{}' is shadowed by '{}' on shared dates",
                pair.shadowed, pair.winner
            ));
        }
        lines.join("\n")
    }

    /// The bare date-to-shift mapping.
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.days).unwrap_or_default()
    }
}

/// Fetch definitions for a shift command, in backend order.
pub(crate) async fn fetch_definitions(args: &ShiftsArgs, config: &Config) -> Result<Vec<ShiftDefinition>> {
    let source = shift_source(args.file.clone(), &config.api)?;
    let query = ShiftQuery {
        user_id: args.user.clone(),
    };
    source
        .fetch_shifts(&query)
        .await
        .context("Failed to fetch shift definitions")
}

pub(crate) fn shadowed_pairs(definitions: &[ShiftDefinition]) -> Vec<ShadowedShift> {
    ShiftResolver::overlapping_pairs(definitions)
        .into_iter()
        .map(|(winner, shadowed)| {
            warn!(
                winner = %winner.id,
                shadowed = %shadowed.id,
                "overlapping shift recurrences, first in list order wins"
            );
            ShadowedShift {
                winner: winner.name.clone(),
                shadowed: shadowed.name.clone(),
            }
        })
        .collect()
}

pub async fn execute(args: ShiftsArgs, config: &Config, json_mode: bool) -> Result<()> {
    let range = args.range.resolve_today()?;
    let definitions = fetch_definitions(&args, config).await?;

    let days = ShiftResolver::new().resolve(&definitions, range.days());
    let result = ShiftsOutput {
        range,
        days,
        shadowed: shadowed_pairs(&definitions),
    };

    output(&result, json_mode);
    Ok(())
}
