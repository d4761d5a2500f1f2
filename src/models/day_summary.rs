/// Aggregated result of one run: floored hours/minutes plus the two
/// output markers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub hours: i64,
    pub minutes: i64,
    pub ongoing: bool,
    pub overtime: bool,
}
