/// A tracked time span in milliseconds since the Unix epoch.
/// `end_ms` is absent while the interval is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start_ms: i64,
    pub end_ms: Option<i64>,
}

impl Interval {
    pub fn is_ongoing(&self) -> bool {
        self.end_ms.is_none()
    }
}
