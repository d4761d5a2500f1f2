//! Wire shapes for the two ClickUp endpoints.

use crate::models::Interval;
use serde::Deserialize;

/// One time entry as ClickUp returns it: timestamps are decimal strings
/// in milliseconds, `end` is null while the timer runs.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntry {
    pub start: String,
    pub end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntriesResponse {
    #[serde(default)]
    pub data: Vec<TimeEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentEntryResponse {
    #[serde(default)]
    pub data: Option<TimeEntry>,
}

impl TimeEntry {
    pub fn to_interval(&self) -> Interval {
        Interval {
            start_ms: ms_or_zero(&self.start),
            end_ms: self.end.as_deref().map(ms_or_zero),
        }
    }
}

/// A timestamp that does not parse contributes zero rather than failing
/// the whole run.
fn ms_or_zero(s: &str) -> i64 {
    s.parse().unwrap_or(0)
}
