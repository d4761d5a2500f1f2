//! Formatting of the final status line.

use crate::models::DaySummary;

/// Render `H:M` with the tracking and overtime markers appended.
/// No zero padding: seven hours five minutes prints as `7:5`.
pub fn render_summary(s: &DaySummary) -> String {
    let ongoing = if s.ongoing { " [+]" } else { "" };
    let overtime = if s.overtime { " [!]" } else { "" };

    format!("{}:{}{}{}", s.hours, s.minutes, ongoing, overtime)
}
