//! Single fixed report timezone (UTC−3) and every civil-date derivation and
//! display format built on it.
//!
//! The aggregator, the grouper and both renderers must agree on day and
//! month boundaries regardless of the host timezone, so all conversions go
//! through this module and nothing else calls `Local`.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

const UTC_MINUS_3_SECS: i32 = 3 * 3600;

/// Month names in pt-BR, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

pub fn report_tz() -> FixedOffset {
    FixedOffset::west_opt(UTC_MINUS_3_SECS).unwrap()
}

/// Convert an absolute instant to civil time in the report timezone.
pub fn to_civil(ts: &DateTime<Utc>) -> DateTime<FixedOffset> {
    ts.with_timezone(&report_tz())
}

/// Civil calendar day of an instant.
pub fn civil_date(ts: &DateTime<Utc>) -> NaiveDate {
    to_civil(ts).date_naive()
}

/// Civil `(year, month)` of an instant.
pub fn civil_month(ts: &DateTime<Utc>) -> (i32, u32) {
    let civil = to_civil(ts);
    (civil.year(), civil.month())
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize - 1).min(11)]
}

/// `DD/MM/YYYY`
pub fn fmt_date(ts: &DateTime<Utc>) -> String {
    to_civil(ts).format("%d/%m/%Y").to_string()
}

/// `HH:MM` (24-hour), used by the tabular report.
pub fn fmt_time_hm(ts: &DateTime<Utc>) -> String {
    to_civil(ts).format("%H:%M").to_string()
}

/// `HH:MM:SS`, used by the flat report.
pub fn fmt_time_hms(ts: &DateTime<Utc>) -> String {
    to_civil(ts).format("%H:%M:%S").to_string()
}

/// Long form `DD/MM/YYYY, HH:MM:SS`, used by the paged document only.
pub fn fmt_long(ts: &DateTime<Utc>) -> String {
    to_civil(ts).format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// `DD/MM/YYYY` for a civil date already derived.
pub fn fmt_civil_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `DD-MM-YYYY`, used by period headings and suggested filenames.
pub fn fmt_date_dashed(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Inclusive instant bounds of a civil-date range: 00:00:00 on `start` up
/// to 23:59:59.999 on `end`, both in the report timezone.
pub fn day_bounds_utc(start: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let lo = start
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(report_tz())
        .unwrap()
        .with_timezone(&Utc);
    let hi = end
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap()
        .and_local_timezone(report_tz())
        .unwrap()
        .with_timezone(&Utc);
    (lo, hi)
}
