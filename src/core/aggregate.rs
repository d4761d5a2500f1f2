//! Duration aggregation over a day's intervals.

use crate::models::Interval;

/// Total elapsed milliseconds across `intervals`. An interval without an
/// end timestamp is still running and counts up to `now_ms`.
///
/// Endpoints are taken as absolute values independently before
/// subtracting, and nothing rejects `end < start`, so a malformed
/// interval contributes a negative amount.
pub fn sum_intervals(intervals: &[Interval], now_ms: i64) -> i64 {
    let mut total_ms = 0;

    for interval in intervals {
        let end_ms = interval.end_ms.unwrap_or(now_ms);
        total_ms += end_ms.abs() - interval.start_ms.abs();
    }

    total_ms
}
