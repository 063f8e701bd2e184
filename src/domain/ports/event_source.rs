//! Port for the calendar events collaborator.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::errors::SourceResult;
use crate::domain::models::{CalendarEvent, RecordId};

/// Date window and requesting user for an events fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub user_id: Option<RecordId>,
}

#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch events for the window. Implementations may return events
    /// outside it; the classifier trims them.
    async fn fetch_events(&self, query: &EventQuery) -> SourceResult<Vec<CalendarEvent>>;
}
