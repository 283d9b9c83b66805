mod common;
use common::{brt, punch};
use ponto::core::{ReportRange, group_by_month};
use ponto::errors::AppError;
use ponto::models::PunchType::{In, Out};

fn range(start: &str, end: &str) -> ReportRange {
    ReportRange::parse(start, end).unwrap()
}

#[test]
fn test_late_night_punches_land_on_their_civil_day() {
    // 23:30 UTC−3 is already 02:30 UTC of the next day; the civil day must
    // still be the earlier one.
    let punches = vec![
        punch("100", "Ana", Out, brt(2025, 8, 4, 23, 30)),
        punch("100", "Ana", In, brt(2025, 8, 5, 0, 10)),
    ];

    let groups = group_by_month(&punches, &range("2025-08-01", "2025-08-31"));

    assert_eq!(groups.len(), 1);
    let days = &groups[0].employees[0].days;
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date.to_string(), "2025-08-04");
    assert_eq!(days[1].date.to_string(), "2025-08-05");
}

#[test]
fn test_grouping_is_invariant_under_input_order() {
    let mut punches = vec![
        punch("200", "Bruno", In, brt(2025, 7, 10, 8, 0)),
        punch("100", "Ana", In, brt(2025, 8, 4, 8, 0)),
        punch("100", "Ana", Out, brt(2025, 8, 4, 17, 0)),
        punch("200", "Bruno", Out, brt(2025, 7, 10, 16, 0)),
    ];
    let r = range("2025-07-01", "2025-08-31");

    let forward = group_by_month(&punches, &r);
    punches.reverse();
    let backward = group_by_month(&punches, &r);

    assert_eq!(forward.len(), backward.len());
    for (a, b) in forward.iter().zip(backward.iter()) {
        assert_eq!((a.year, a.month), (b.year, b.month));
        let names_a: Vec<_> = a.employees.iter().map(|e| &e.employee.code).collect();
        let names_b: Vec<_> = b.employees.iter().map(|e| &e.employee.code).collect();
        assert_eq!(names_a, names_b);
    }
}

#[test]
fn test_months_ascend_and_employees_collate_by_name() {
    let punches = vec![
        punch("300", "Zuleica", In, brt(2025, 8, 4, 8, 0)),
        punch("200", "Álvaro", In, brt(2025, 8, 4, 8, 0)),
        punch("100", "Bruno", In, brt(2025, 7, 10, 8, 0)),
    ];

    let groups = group_by_month(&punches, &range("2025-07-01", "2025-08-31"));

    assert_eq!(groups.len(), 2);
    assert_eq!((groups[0].year, groups[0].month), (2025, 7));
    assert_eq!((groups[1].year, groups[1].month), (2025, 8));

    // accented Álvaro sorts before Zuleica, not after
    let august: Vec<_> = groups[1]
        .employees
        .iter()
        .map(|e| e.employee.name.as_str())
        .collect();
    assert_eq!(august, vec!["Álvaro", "Zuleica"]);
}

#[test]
fn test_duplicate_names_break_ties_by_code() {
    let punches = vec![
        punch("200", "Maria Silva", In, brt(2025, 8, 4, 8, 0)),
        punch("100", "Maria Silva", In, brt(2025, 8, 4, 9, 0)),
    ];

    let groups = group_by_month(&punches, &range("2025-08-01", "2025-08-31"));

    assert_eq!(groups[0].employees.len(), 2);
    assert_eq!(groups[0].employees[0].employee.code, "100");
    assert_eq!(groups[0].employees[1].employee.code, "200");
}

#[test]
fn test_range_bounds_are_inclusive() {
    let punches = vec![
        punch("100", "Ana", In, brt(2025, 8, 1, 0, 0)),
        punch("100", "Ana", Out, brt(2025, 8, 31, 23, 59)),
        punch("100", "Ana", In, brt(2025, 9, 1, 0, 0)),
    ];

    let groups = group_by_month(&punches, &range("2025-08-01", "2025-08-31"));

    assert_eq!(groups.len(), 1);
    let days = &groups[0].employees[0].days;
    assert_eq!(days.len(), 2);
}

#[test]
fn test_empty_input_yields_no_groups() {
    let groups = group_by_month(&[], &range("2025-08-01", "2025-08-31"));
    assert!(groups.is_empty());
}

#[test]
fn test_same_instant_ties_follow_canonical_type_order() {
    let ts = brt(2025, 8, 4, 12, 0);
    let punches = vec![
        punch("100", "Ana", Out, ts),
        punch("100", "Ana", In, ts),
    ];

    let groups = group_by_month(&punches, &range("2025-08-01", "2025-08-31"));

    let day = &groups[0].employees[0].days[0];
    assert_eq!(day.punches[0].kind, In);
    assert_eq!(day.punches[1].kind, Out);
}

#[test]
fn test_reversed_period_is_rejected() {
    assert!(matches!(
        ReportRange::parse("2025-08-31", "2025-08-01"),
        Err(AppError::InvalidPeriod(_))
    ));
}

#[test]
fn test_malformed_date_is_rejected() {
    assert!(matches!(
        ReportRange::parse("2025-13-01", "2025-08-31"),
        Err(AppError::InvalidDate(_))
    ));
}
