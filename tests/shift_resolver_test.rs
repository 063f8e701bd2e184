//! Resolution scenarios over realistic shift lists.

mod common;

use common::{date, night_shift, office_shift};
use turnos::{DateRange, RecurrenceSet, ShiftDefinition, ShiftResolver, ShiftSummary};

#[test]
fn test_weekday_shift_on_monday_of_second_week() {
    let defs = vec![office_shift()];
    let result = ShiftResolver::new().resolve(&defs, [date(2024, 6, 10)]);
    assert_eq!(result.get(date(2024, 6, 10)), Some(Some(&defs[0])));
}

#[test]
fn test_weekday_shift_skips_saturday() {
    let defs = vec![office_shift()];
    let result = ShiftResolver::new().resolve(&defs, [date(2024, 6, 15)]);
    assert_eq!(result.get(date(2024, 6, 15)), Some(None));
}

#[test]
fn test_sunday_matches_index_seven() {
    let defs = vec![ShiftDefinition::new(5, "Domingo", "7", "1,2,3,4,5")];
    let result = ShiftResolver::new().resolve(&defs, [date(2024, 6, 30)]);
    assert_eq!(result.get(date(2024, 6, 30)), Some(Some(&defs[0])));
}

#[test]
fn test_first_definition_in_list_wins() {
    let defs = vec![
        ShiftDefinition::new(1, "s1", "1", "1"),
        ShiftDefinition::new(2, "s2", "1", "1"),
    ];
    let result = ShiftResolver::new().resolve(&defs, [date(2024, 6, 3)]);
    let chosen = result.get(date(2024, 6, 3)).flatten().unwrap();
    assert!(std::ptr::eq(chosen, &defs[0]));

    let swapped = vec![defs[1].clone(), defs[0].clone()];
    let result = ShiftResolver::new().resolve(&swapped, [date(2024, 6, 3)]);
    assert_eq!(result.get(date(2024, 6, 3)).flatten().unwrap().name, "s2");
}

#[test]
fn test_malformed_token_dropped() {
    let shift = ShiftDefinition::new(1, "x", "1, abc, 3", "1,2,3,4,5");
    assert_eq!(shift.weekdays, [1u8, 3].into_iter().collect::<RecurrenceSet>());

    // Monday and Wednesday still match, Tuesday does not.
    let defs = vec![shift];
    let result = ShiftResolver::new()
        .resolve_range(&defs, date(2024, 6, 10), date(2024, 6, 12))
        .unwrap();
    assert!(result.get(date(2024, 6, 10)).flatten().is_some());
    assert!(result.get(date(2024, 6, 11)).flatten().is_none());
    assert!(result.get(date(2024, 6, 12)).flatten().is_some());
}

#[test]
fn test_empty_weekdays_never_match() {
    let defs = vec![ShiftDefinition::new(1, "x", "", "1,2,3,4,5")];
    let result = ShiftResolver::new().resolve_month(&defs, 2024, 6).unwrap();
    assert_eq!(result.assigned_count(), 0);
}

#[test]
fn test_null_recurrence_from_backend_never_matches() {
    let defs: Vec<ShiftDefinition> = serde_json::from_str(
        r#"[{"id": 1, "nombre": "Sin recurrencia", "dias_semana": null, "semanas_mes": "1,2"}]"#,
    )
    .unwrap();
    let result = ShiftResolver::new().resolve_month(&defs, 2024, 6).unwrap();
    assert_eq!(result.assigned_count(), 0);
    assert_eq!(result.len(), 30);
}

#[test]
fn test_fifth_week_only_covers_last_days() {
    let defs = vec![ShiftDefinition::new(1, "Cierre", "1,2,3,4,5,6,7", "5")];
    let result = ShiftResolver::new().resolve_month(&defs, 2024, 3).unwrap();
    let assigned: Vec<_> = result
        .iter()
        .filter_map(|(day, shift)| shift.map(|_| day))
        .collect();
    assert_eq!(assigned, vec![date(2024, 3, 29), date(2024, 3, 30), date(2024, 3, 31)]);
}

#[test]
fn test_month_grid_includes_neighbouring_days() {
    let defs = vec![office_shift(), night_shift()];
    let grid = DateRange::month_grid(2024, 6).unwrap();
    let result = ShiftResolver::new().resolve(&defs, grid.days());

    assert_eq!(result.len(), 35);
    // Monday May 27 is in the fourth week of May.
    assert_eq!(result.get(date(2024, 5, 27)).flatten().unwrap().name, "Oficina");
    assert_eq!(result.get(date(2024, 6, 1)).flatten().unwrap().name, "Guardia nocturna");
}

#[test]
fn test_json_output_contract() {
    let defs = vec![office_shift()];
    let result = ShiftResolver::new()
        .resolve_range(&defs, date(2024, 6, 14), date(2024, 6, 15))
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["2024-06-14"]["name"], "Oficina");
    assert_eq!(json["2024-06-14"]["startTime"], "09:00");
    assert_eq!(json["2024-06-14"]["weekdays"], "1,2,3,4,5");
    assert!(json["2024-06-15"].is_null());
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[test]
fn test_summary_over_full_month() {
    let defs = vec![office_shift(), night_shift()];
    let result = ShiftResolver::new().resolve_month(&defs, 2024, 6).unwrap();
    let summary = ShiftSummary::from_assignments(&result);

    assert_eq!(summary.assigned_days(), 25);
    assert_eq!(summary.unassigned_days, 5);
    assert_eq!(summary.total_minutes(), 25 * 480);
}
