use crate::models::DaySummary;

/// Total tracked hours at or above this mark the day as overtime.
const OVERTIME_HOURS: i64 = 8;

/// Derive the printable summary from a total and whether a timer is
/// still running. Hours and minutes are floored, and the overtime check
/// applies to the floored hours.
pub fn build_summary(total_ms: i64, ongoing: bool) -> DaySummary {
    let total_minutes = total_ms / 60_000;
    let hours = total_minutes / 60;
    let minutes = total_minutes - hours * 60;

    DaySummary {
        hours,
        minutes,
        ongoing,
        overtime: hours >= OVERTIME_HOURS,
    }
}
