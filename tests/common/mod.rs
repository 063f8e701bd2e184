//! Common test utilities for integration tests
//!
//! Shared fixtures for the resolver, source and CLI tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use turnos::ShiftDefinition;

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Monday to Friday, every week.
pub fn office_shift() -> ShiftDefinition {
    ShiftDefinition::new(1, "Oficina", "1,2,3,4,5", "1,2,3,4,5")
        .with_times("09:00", "17:00")
        .with_schedule("Administración")
}

/// Saturday night, every week.
pub fn night_shift() -> ShiftDefinition {
    ShiftDefinition::new(2, "Guardia nocturna", "6", "1,2,3,4,5").with_times("22:00", "06:00")
}

/// Shift list in the shape the backend returns, with its Spanish keys.
pub fn shifts_payload() -> String {
    serde_json::json!([
        {
            "id": 1,
            "nombre": "Oficina",
            "hora_inicio": "09:00",
            "hora_fin": "17:00",
            "dias_semana": "1,2,3,4,5",
            "semanas_mes": "1,2,3,4,5",
            "horario": "Administración"
        },
        {
            "id": 2,
            "nombre": "Guardia nocturna",
            "hora_inicio": "22:00",
            "hora_fin": "06:00",
            "dias_semana": "6",
            "semanas_mes": "1,2,3,4,5"
        }
    ])
    .to_string()
}

pub fn events_payload() -> String {
    serde_json::json!({
        "data": [
            {
                "id": 10,
                "titulo": "Feriado",
                "fecha_inicio": "2024-06-20",
                "es_global": true
            },
            {
                "id": 11,
                "titulo": "Reunión de área",
                "fecha_inicio": "2024-06-05 09:30:00",
                "fecha_fin": "2024-06-05 11:00:00",
                "departamento_id": 3
            },
            {
                "id": 12,
                "titulo": "Médico",
                "fecha_inicio": "2024-06-12T10:00:00",
                "usuario_id": 7
            },
            {
                "id": 13,
                "titulo": "Cumpleaños",
                "fecha_inicio": "2024-06-12T18:00:00",
                "usuario_id": 8
            }
        ]
    })
    .to_string()
}
