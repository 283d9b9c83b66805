//! Grouping of punches into month → employee → day buckets for rendering.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::aggregator::worked_duration;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, Punch, punch::sort_chronological};
use crate::utils::collation_key;
use crate::utils::tz;

/// Inclusive civil-date range of a report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidPeriod(format!(
                "end date {} precedes start date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM-DD` bounds as supplied by the caller.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(start.to_string()))?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(end.to_string()))?;
        Self::new(start, end)
    }

    /// Instant bounds in UTC: 00:00:00 on `start` through 23:59:59.999 on
    /// `end`, both taken in the report timezone.
    pub fn bounds_utc(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        tz::day_bounds_utc(self.start, self.end)
    }

    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        let (lo, hi) = self.bounds_utc();
        *ts >= lo && *ts <= hi
    }
}

/// One employee-day: the civil date and that employee's punches on it, in
/// canonical chronological order.
#[derive(Debug, Clone)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub punches: Vec<Punch>,
}

impl DayBucket {
    pub fn worked_minutes(&self) -> i64 {
        worked_duration(&self.punches).num_minutes()
    }
}

/// One employee's days within a month, days ascending.
#[derive(Debug, Clone)]
pub struct EmployeeMonth {
    pub employee: Employee,
    pub days: Vec<DayBucket>,
}

impl EmployeeMonth {
    /// Month total as the sum of the per-day worked durations. The tabular
    /// report's summary row shows exactly this value.
    pub fn total_minutes(&self) -> i64 {
        self.days.iter().map(|d| d.worked_minutes()).sum()
    }
}

/// One civil month with its employee blocks, employees in collation order.
#[derive(Debug, Clone)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    pub employees: Vec<EmployeeMonth>,
}

impl MonthGroup {
    /// `"<MonthName> <Year>"`, e.g. "Agosto 2025".
    pub fn title(&self) -> String {
        format!("{} {}", tz::month_name(self.month), self.year)
    }
}

// Typed grouping keys. BTreeMap iteration over these yields the final
// rendering order directly, instead of sorting derived strings afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MonthKey {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct EmployeeKey {
    sort_name: String,
    code: String,
}

impl EmployeeKey {
    fn of(employee: &Employee) -> Self {
        Self {
            sort_name: collation_key(&employee.name),
            code: employee.code.clone(),
        }
    }
}

/// Group the punches falling inside `range` into ordered month → employee →
/// day buckets.
///
/// The output is a pure function of the punch set: input order never
/// changes the result. An empty result means "no data at all" and the
/// renderers treat it distinctly from a day with zero credited time.
pub fn group_by_month(punches: &[Punch], range: &ReportRange) -> Vec<MonthGroup> {
    let mut months: BTreeMap<MonthKey, BTreeMap<EmployeeKey, (Employee, BTreeMap<NaiveDate, Vec<Punch>>)>> =
        BTreeMap::new();

    for punch in punches.iter().filter(|p| range.contains(&p.timestamp)) {
        let (year, month) = tz::civil_month(&punch.timestamp);
        let day = tz::civil_date(&punch.timestamp);

        let employees = months.entry(MonthKey { year, month }).or_default();
        let (_, days) = employees
            .entry(EmployeeKey::of(&punch.employee))
            .or_insert_with(|| (punch.employee.clone(), BTreeMap::new()));
        days.entry(day).or_default().push(punch.clone());
    }

    months
        .into_iter()
        .map(|(month_key, employees)| MonthGroup {
            year: month_key.year,
            month: month_key.month,
            employees: employees
                .into_values()
                .map(|(employee, days)| EmployeeMonth {
                    employee,
                    days: days
                        .into_iter()
                        .map(|(date, mut punches)| {
                            sort_chronological(&mut punches);
                            DayBucket { date, punches }
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
