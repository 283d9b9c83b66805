mod common;
use common::{brt, punch};
use ponto::core::worked_duration;
use ponto::models::PunchType::{In, LunchEnd, LunchStart, Out};

#[test]
fn test_detailed_day_credits_both_segments() {
    let day = vec![
        punch("100", "Ana", In, brt(2025, 8, 4, 8, 0)),
        punch("100", "Ana", LunchStart, brt(2025, 8, 4, 12, 0)),
        punch("100", "Ana", LunchEnd, brt(2025, 8, 4, 13, 0)),
        punch("100", "Ana", Out, brt(2025, 8, 4, 17, 0)),
    ];

    assert_eq!(worked_duration(&day).num_minutes(), 8 * 60);
}

#[test]
fn test_simple_day_uses_in_out_span() {
    let day = vec![
        punch("100", "Ana", In, brt(2025, 8, 4, 8, 0)),
        punch("100", "Ana", Out, brt(2025, 8, 4, 17, 0)),
    ];

    assert_eq!(worked_duration(&day).num_minutes(), 9 * 60);
}

#[test]
fn test_incomplete_day_credits_nothing() {
    let day = vec![
        punch("100", "Ana", In, brt(2025, 8, 4, 8, 0)),
        punch("100", "Ana", LunchStart, brt(2025, 8, 4, 12, 0)),
    ];

    assert_eq!(worked_duration(&day).num_minutes(), 0);
}

#[test]
fn test_duplicate_in_anchors_on_first_occurrence() {
    let day = vec![
        punch("100", "Ana", In, brt(2025, 8, 4, 7, 0)),
        punch("100", "Ana", In, brt(2025, 8, 4, 8, 0)),
        punch("100", "Ana", Out, brt(2025, 8, 4, 17, 0)),
    ];

    assert_eq!(worked_duration(&day).num_minutes(), 10 * 60);
}

#[test]
fn test_result_is_invariant_under_input_order() {
    let mut day = vec![
        punch("100", "Ana", Out, brt(2025, 8, 4, 17, 0)),
        punch("100", "Ana", In, brt(2025, 8, 4, 7, 0)),
        punch("100", "Ana", In, brt(2025, 8, 4, 8, 0)),
    ];

    let forward = worked_duration(&day);
    day.reverse();
    let backward = worked_duration(&day);

    assert_eq!(forward, backward);
    assert_eq!(forward.num_minutes(), 10 * 60);
}

#[test]
fn test_out_before_in_credits_nothing() {
    let day = vec![
        punch("100", "Ana", Out, brt(2025, 8, 4, 7, 0)),
        punch("100", "Ana", In, brt(2025, 8, 4, 8, 0)),
    ];

    assert_eq!(worked_duration(&day).num_minutes(), 0);
}

#[test]
fn test_empty_day_is_zero() {
    assert_eq!(worked_duration(&[]).num_minutes(), 0);
}

#[test]
fn test_second_in_out_pair_is_ignored() {
    // First-pair-wins: a correction re-punch later the same day does not
    // extend the credited span.
    let day = vec![
        punch("100", "Ana", In, brt(2025, 8, 4, 8, 0)),
        punch("100", "Ana", Out, brt(2025, 8, 4, 12, 0)),
        punch("100", "Ana", In, brt(2025, 8, 4, 13, 0)),
        punch("100", "Ana", Out, brt(2025, 8, 4, 18, 0)),
    ];

    assert_eq!(worked_duration(&day).num_minutes(), 4 * 60);
}

#[test]
fn test_detailed_takes_precedence_over_fallback() {
    // Lunch window of one hour must not be credited.
    let day = vec![
        punch("100", "Ana", In, brt(2025, 8, 4, 9, 0)),
        punch("100", "Ana", LunchStart, brt(2025, 8, 4, 12, 30)),
        punch("100", "Ana", LunchEnd, brt(2025, 8, 4, 13, 30)),
        punch("100", "Ana", Out, brt(2025, 8, 4, 18, 0)),
    ];

    assert_eq!(worked_duration(&day).num_minutes(), (3 * 60 + 30) + (4 * 60 + 30));
}
