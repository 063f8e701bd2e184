//! Calendar event classification and filtering.
//!
//! Each event is tagged with its visibility scope, then reconciled with the
//! user's scope toggles, the user's identity and the visible date window.

use serde::Serialize;
use tracing::{debug, instrument};

use super::calendar::DateRange;
use crate::domain::models::{CalendarEvent, EventScope, RecordId};

/// The user the calendar is shown to.
///
/// Unknown attributes do not hide anything: the events endpoint already
/// scopes its answer, so an absent id only disables the local cross-check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Option<RecordId>,
    pub department_id: Option<RecordId>,
}

/// Scope toggles selected in the calendar view. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventFilter {
    pub personal: bool,
    pub departmental: bool,
    pub global: bool,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            personal: true,
            departmental: true,
            global: true,
        }
    }
}

impl EventFilter {
    pub fn allows(&self, scope: EventScope) -> bool {
        match scope {
            EventScope::Personal => self.personal,
            EventScope::Departmental => self.departmental,
            EventScope::Global => self.global,
        }
    }
}

/// An event tagged with its scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedEvent<'a> {
    pub scope: EventScope,
    #[serde(flatten)]
    pub event: &'a CalendarEvent,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EventClassifier;

impl EventClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Events visible to `user` under `filter` that touch `window`, sorted
    /// by start then title.
    #[instrument(skip_all, fields(events = events.len(), from = %window.from, to = %window.to))]
    pub fn visible<'a>(
        &self,
        events: &'a [CalendarEvent],
        user: &CurrentUser,
        filter: EventFilter,
        window: DateRange,
    ) -> Vec<ClassifiedEvent<'a>> {
        let mut visible: Vec<ClassifiedEvent<'a>> = events
            .iter()
            .map(|event| ClassifiedEvent {
                scope: event.scope(),
                event,
            })
            .filter(|c| filter.allows(c.scope))
            .filter(|c| Self::visible_to(c.event, c.scope, user))
            .filter(|c| c.event.intersects(window.from, window.to))
            .collect();

        visible.sort_by(|a, b| {
            a.event
                .start
                .cmp(&b.event.start)
                .then_with(|| a.event.title.cmp(&b.event.title))
        });

        debug!(visible = visible.len(), "filtered calendar events");
        visible
    }

    /// Count of events per scope, in scope order.
    pub fn count_by_scope(events: &[ClassifiedEvent<'_>]) -> [(EventScope, usize); 3] {
        let count = |scope: EventScope| events.iter().filter(|c| c.scope == scope).count();
        [
            (EventScope::Personal, count(EventScope::Personal)),
            (EventScope::Departmental, count(EventScope::Departmental)),
            (EventScope::Global, count(EventScope::Global)),
        ]
    }

    fn visible_to(event: &CalendarEvent, scope: EventScope, user: &CurrentUser) -> bool {
        match scope {
            EventScope::Global => true,
            EventScope::Departmental => same_or_unknown(event.department_id.as_ref(), user.department_id.as_ref()),
            EventScope::Personal => same_or_unknown(event.owner_id.as_ref(), user.id.as_ref()),
        }
    }
}

fn same_or_unknown(event_side: Option<&RecordId>, user_side: Option<&RecordId>) -> bool {
    match (event_side, user_side) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}
