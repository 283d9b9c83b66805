use chrono::{DateTime, Utc};

use super::{employee::Employee, punch_type::PunchType};

/// A single immutable time-clock event.
///
/// `timestamp` is an absolute instant; civil-day bucketing and display
/// formatting go through `utils::tz` so every consumer agrees on day
/// boundaries.
#[derive(Debug, Clone)]
pub struct Punch {
    pub employee: Employee,
    pub kind: PunchType,
    pub timestamp: DateTime<Utc>,
    /// Optional origin tag ("cli", "web", ...), shown by the flat report
    /// when present.
    pub source: Option<String>,
}

impl Punch {
    pub fn new(
        employee: Employee,
        kind: PunchType,
        timestamp: DateTime<Utc>,
        source: Option<String>,
    ) -> Self {
        Self {
            employee,
            kind,
            timestamp,
            source,
        }
    }
}

/// Sort punches ascending by timestamp, breaking ties by the canonical
/// punch-type order. This is the ordering invariant every day bucket and
/// both report renderers rely on.
pub fn sort_chronological(punches: &mut [Punch]) {
    punches.sort_by_key(|p| (p.timestamp, p.kind.display_order()));
}
