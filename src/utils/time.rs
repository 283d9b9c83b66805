//! Duration formatting helpers.

/// Format a minute count as `HH:MM`. Monthly totals routinely exceed 24
/// hours, so the hour field is not wrapped.
pub fn minutes_to_hhmm(mins: i64) -> String {
    let m = mins.max(0);
    format!("{:02}:{:02}", m / 60, m % 60)
}
