//! Local JSON file source for shift and event lists.
//!
//! Reads exports of the REST endpoints so the resolver can run offline.
//! Accepts the same payload shapes as the API.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::domain::models::{CalendarEvent, ShiftDefinition};
use crate::domain::ports::{
    EventQuery, EventSource, ShiftQuery, ShiftSource, SourceError, SourceResult,
};
use crate::infrastructure::api::decode_list;

/// A JSON file holding a shift or event list.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> SourceResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl ShiftSource for JsonFileSource {
    /// The file is a pre-filtered export; the query's user is not applied.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_shifts(&self, _query: &ShiftQuery) -> SourceResult<Vec<ShiftDefinition>> {
        let body = self.read().await?;
        let shifts: Vec<ShiftDefinition> = decode_list(&body)?;
        debug!(count = shifts.len(), "loaded shift definitions");
        Ok(shifts)
    }
}

#[async_trait]
impl EventSource for JsonFileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_events(&self, _query: &EventQuery) -> SourceResult<Vec<CalendarEvent>> {
        let body = self.read().await?;
        let events: Vec<CalendarEvent> = decode_list(&body)?;
        debug!(count = events.len(), "loaded calendar events");
        Ok(events)
    }
}
