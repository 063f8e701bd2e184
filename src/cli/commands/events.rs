//! Implementation of the `turnos events` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use super::{event_source, RangeArgs};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, RecordId};
use crate::domain::ports::EventQuery;
use crate::services::{ClassifiedEvent, CurrentUser, DateRange, EventClassifier, EventFilter};

#[derive(Args, Debug, Clone, Default)]
pub struct EventsArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Read events from a JSON export instead of the API
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// User the calendar is shown to
    #[arg(short, long)]
    pub user: Option<RecordId>,

    /// Department of that user
    #[arg(short, long)]
    pub department: Option<RecordId>,

    /// Hide personal events
    #[arg(long)]
    pub no_personal: bool,

    /// Hide departmental events
    #[arg(long)]
    pub no_departmental: bool,

    /// Hide global events
    #[arg(long)]
    pub no_global: bool,
}

impl EventsArgs {
    pub fn filter(&self) -> EventFilter {
        EventFilter {
            personal: !self.no_personal,
            departmental: !self.no_departmental,
            global: !self.no_global,
        }
    }

    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            id: self.user.clone(),
            department_id: self.department.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventsOutput<'a> {
    pub range: DateRange,
    pub filter: EventFilter,
    pub counts: BTreeMap<&'static str, usize>,
    pub events: Vec<ClassifiedEvent<'a>>,
}

impl<'a> EventsOutput<'a> {
    pub fn new(range: DateRange, filter: EventFilter, events: Vec<ClassifiedEvent<'a>>) -> Self {
        let counts = EventClassifier::count_by_scope(&events)
            .into_iter()
            .map(|(scope, count)| (scope.as_str(), count))
            .collect();
        Self {
            range,
            filter,
            counts,
            events,
        }
    }
}

impl CommandOutput for EventsOutput<'_> {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Events from {} to {}", self.range.from, self.range.to)];

        if self.events.is_empty() {
            lines.push("No events found.".to_string());
        } else {
            lines.push(TableFormatter::new().format_events(&self.events));
        }

        let counts: Vec<String> = self
            .counts
            .iter()
            .map(|(scope, count)| format!("{scope}: {count}"))
            .collect();
        lines.push(counts.join(", "));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: EventsArgs, config: &Config, json_mode: bool) -> Result<()> {
    let range = args.range.resolve_today()?;
    let source = event_source(args.file.clone(), &config.api)?;

    let query = EventQuery {
        from: range.from,
        to: range.to,
        user_id: args.user.clone(),
    };
    let events = source
        .fetch_events(&query)
        .await
        .context("Failed to fetch calendar events")?;

    let filter = args.filter();
    let visible = EventClassifier::new().visible(&events, &args.current_user(), filter, range);

    output(&EventsOutput::new(range, filter, visible), json_mode);
    Ok(())
}
