//! Worked-duration computation for a single employee day.

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::{Punch, PunchType, punch::sort_chronological};

/// Compute the worked duration of one employee's punches on one civil day.
///
/// Rules:
/// - With the detailed sequence present, (IN → LUNCH_START) + (LUNCH_END →
///   OUT) is credited, each segment clamped at zero.
/// - Otherwise the first IN paired with the first OUT after it is used.
/// - Anything else (lone punches, unmatched types) contributes nothing.
///
/// The input order does not matter; punches are normalized to the canonical
/// chronological order first. The result is never negative.
pub fn worked_duration(punches: &[Punch]) -> TimeDelta {
    if punches.is_empty() {
        return TimeDelta::zero();
    }

    let mut list = punches.to_vec();
    sort_chronological(&mut list);

    let first_in = list.iter().find(|p| p.kind == PunchType::In);

    // Detailed path: chain each punch strictly after the previous anchor.
    if let Some(in0) = first_in
        && let Some(ls0) = first_after(&list, PunchType::LunchStart, in0.timestamp)
        && let Some(le0) = first_after(&list, PunchType::LunchEnd, ls0.timestamp)
        && let Some(out0) = first_after(&list, PunchType::Out, le0.timestamp)
    {
        let morning = (ls0.timestamp - in0.timestamp).max(TimeDelta::zero());
        let afternoon = (out0.timestamp - le0.timestamp).max(TimeDelta::zero());
        let total = morning + afternoon;
        if total > TimeDelta::zero() {
            return total;
        }
    }

    // Fallback: plain IN → OUT, first pair wins.
    if let Some(in0) = first_in
        && let Some(out0) = first_after(&list, PunchType::Out, in0.timestamp)
    {
        return (out0.timestamp - in0.timestamp).max(TimeDelta::zero());
    }

    TimeDelta::zero()
}

/// First punch of `kind` strictly after `anchor`. Duplicate punches of the
/// same type collapse to the earliest occurrence past the anchor.
fn first_after(list: &[Punch], kind: PunchType, anchor: DateTime<Utc>) -> Option<&Punch> {
    list.iter()
        .find(|p| p.kind == kind && p.timestamp > anchor)
}
