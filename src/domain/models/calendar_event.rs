//! Calendar event domain model.
//!
//! Events come from the calendar endpoint in three visibility scopes:
//! personal (owned by one user), departmental (shared within a department)
//! and global (visible to everyone).

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::RecordId;
use super::lenient::{flexible_bool, null_as_empty};

/// Visibility class of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventScope {
    Personal,
    Departmental,
    Global,
}

impl EventScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Departmental => "departmental",
            Self::Global => "global",
        }
    }
}

impl fmt::Display for EventScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar entry as delivered by the events endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: RecordId,

    #[serde(alias = "titulo", default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(alias = "descripcion", default)]
    pub description: Option<String>,

    #[serde(alias = "fecha_inicio", deserialize_with = "flexible_datetime")]
    pub start: NaiveDateTime,

    /// Missing end means the event occupies only its start day.
    #[serde(alias = "fecha_fin", default, deserialize_with = "flexible_datetime_opt")]
    pub end: Option<NaiveDateTime>,

    #[serde(alias = "usuario_id", alias = "user_id", default)]
    pub owner_id: Option<RecordId>,

    #[serde(alias = "departamento_id", default)]
    pub department_id: Option<RecordId>,

    #[serde(alias = "global", alias = "es_global", default, deserialize_with = "flexible_bool")]
    pub is_global: bool,
}

impl CalendarEvent {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            start,
            end: None,
            owner_id: None,
            department_id: None,
            is_global: false,
        }
    }

    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn owned_by(mut self, owner: impl Into<RecordId>) -> Self {
        self.owner_id = Some(owner.into());
        self
    }

    pub fn for_department(mut self, department: impl Into<RecordId>) -> Self {
        self.department_id = Some(department.into());
        self
    }

    pub fn global(mut self) -> Self {
        self.is_global = true;
        self
    }

    /// Global flag wins, then department, otherwise personal.
    pub fn scope(&self) -> EventScope {
        if self.is_global {
            EventScope::Global
        } else if self.department_id.is_some() {
            EventScope::Departmental
        } else {
            EventScope::Personal
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Last calendar day the event occupies. An end before the start is ignored.
    pub fn end_date(&self) -> NaiveDate {
        self.end
            .map(|end| end.date())
            .filter(|end| *end >= self.start_date())
            .unwrap_or_else(|| self.start_date())
    }

    /// Whether the event touches any day of the inclusive window.
    pub fn intersects(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date() <= to && self.end_date() >= from
    }
}

/// Parse the datetime shapes the backend emits: RFC 3339, naive ISO with
/// `T` or a space, or a bare date (midnight).
pub(crate) fn parse_flexible_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn flexible_datetime<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_flexible_datetime(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized datetime: {raw}")))
}

fn flexible_datetime_opt<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_flexible_datetime(raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized datetime: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_scope_precedence() {
        let base = CalendarEvent::new(1, "x", at(2024, 6, 1, 9));
        assert_eq!(base.clone().scope(), EventScope::Personal);
        assert_eq!(base.clone().for_department(3).scope(), EventScope::Departmental);
        assert_eq!(base.for_department(3).global().scope(), EventScope::Global);
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "id": 5,
            "titulo": "Reunión de equipo",
            "fecha_inicio": "2024-06-10 09:30:00",
            "fecha_fin": "2024-06-10T11:00:00",
            "departamento_id": 2,
            "global": false
        }"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Reunión de equipo");
        assert_eq!(event.start, at(2024, 6, 10, 9) + chrono::Duration::minutes(30));
        assert_eq!(event.end, Some(at(2024, 6, 10, 11)));
        assert_eq!(event.department_id, Some(RecordId::Number(2)));
        assert_eq!(event.scope(), EventScope::Departmental);
    }

    #[test]
    fn test_deserialize_date_only_and_null_end() {
        let json = r#"{"id": "e1", "title": "Feriado", "start": "2024-06-20", "end": null, "is_global": true}"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.start, at(2024, 6, 20, 0));
        assert!(event.end.is_none());
        assert_eq!(event.scope(), EventScope::Global);
    }

    #[test]
    fn test_global_flag_as_tinyint() {
        let json = r#"{"id": 1, "titulo": "Feriado", "fecha_inicio": "2024-06-20", "global": 1}"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.scope(), EventScope::Global);

        let json = r#"{"id": 2, "titulo": null, "fecha_inicio": "2024-06-20", "es_global": "0", "usuario_id": 7}"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "");
        assert_eq!(event.scope(), EventScope::Personal);
    }

    #[test]
    fn test_deserialize_rfc3339() {
        let json = r#"{"id": 1, "title": "t", "start": "2024-06-20T08:00:00-04:00"}"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.start, at(2024, 6, 20, 8));
    }

    #[test]
    fn test_deserialize_rejects_garbage_start() {
        let json = r#"{"id": 1, "title": "t", "start": "next tuesday"}"#;
        assert!(serde_json::from_str::<CalendarEvent>(json).is_err());
    }

    #[test]
    fn test_intersects_multi_day() {
        let event = CalendarEvent::new(1, "viaje", at(2024, 6, 10, 8)).with_end(at(2024, 6, 12, 18));
        let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        assert!(event.intersects(d(12), d(20)));
        assert!(event.intersects(d(1), d(10)));
        assert!(!event.intersects(d(13), d(20)));
        assert!(!event.intersects(d(1), d(9)));
    }

    #[test]
    fn test_end_before_start_is_ignored() {
        let event = CalendarEvent::new(1, "x", at(2024, 6, 10, 8)).with_end(at(2024, 6, 9, 8));
        assert_eq!(event.end_date(), event.start_date());
    }
}
