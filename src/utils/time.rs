//! Time utilities: today's fetch window in epoch milliseconds.

use chrono::{DateTime, Local, NaiveTime};

/// Start and end of the day containing `now`, as milliseconds since the
/// Unix epoch. Midnight is taken in the local timezone; on the rare day
/// where local midnight does not exist, the earliest valid instant is
/// used instead.
pub fn today_window_ms(now: DateTime<Local>) -> (i64, i64) {
    const MS_IN_DAY: i64 = 86_400_000;

    let midnight = now.with_time(NaiveTime::MIN).earliest().unwrap_or(now);
    let start = midnight.timestamp_millis();

    (start, start + MS_IN_DAY)
}
