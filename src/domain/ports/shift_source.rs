//! Port for the shift-list collaborator.

use async_trait::async_trait;

use super::errors::SourceResult;
use crate::domain::models::{RecordId, ShiftDefinition};

/// Query context for fetching shift definitions.
///
/// The user is an explicit parameter; nothing downstream of the fetch
/// depends on who asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftQuery {
    pub user_id: Option<RecordId>,
}

impl ShiftQuery {
    pub fn for_user(user_id: impl Into<RecordId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }
}

#[async_trait]
pub trait ShiftSource: Send + Sync {
    /// Fetch the current shift definitions, in the order the backend returns them.
    async fn fetch_shifts(&self, query: &ShiftQuery) -> SourceResult<Vec<ShiftDefinition>>;
}
