use daylog::core::{aggregate, summary};
use daylog::models::Interval;
use daylog::utils::render_summary;

fn completed(start_ms: i64, end_ms: i64) -> Interval {
    Interval {
        start_ms,
        end_ms: Some(end_ms),
    }
}

#[test]
fn empty_list_sums_to_zero() {
    assert_eq!(aggregate::sum_intervals(&[], 1_000_000), 0);
    assert_eq!(render_summary(&summary::build_summary(0, false)), "0:0");
}

#[test]
fn one_hour_interval() {
    let total = aggregate::sum_intervals(&[completed(0, 3_600_000)], 0);
    assert_eq!(total, 3_600_000);
    assert_eq!(render_summary(&summary::build_summary(total, false)), "1:0");
}

#[test]
fn ongoing_interval_counts_up_to_now() {
    let now = 1_700_000_000_000;
    let started = now - 90_000; // 90 seconds ago
    let total = aggregate::sum_intervals(
        &[Interval {
            start_ms: started,
            end_ms: None,
        }],
        now,
    );
    assert_eq!(total, 90_000);

    // floor(1.5 minutes) = 1
    assert_eq!(render_summary(&summary::build_summary(total, true)), "0:1 [+]");
}

#[test]
fn sum_is_order_independent() {
    let a = [completed(0, 1_000), completed(2_000, 5_000)];
    let b = [completed(2_000, 5_000), completed(0, 1_000)];
    assert_eq!(
        aggregate::sum_intervals(&a, 0),
        aggregate::sum_intervals(&b, 0)
    );
    assert_eq!(aggregate::sum_intervals(&a, 0), 4_000);
}

#[test]
fn overtime_marker_at_eight_hours() {
    let day = summary::build_summary(8 * 3_600_000, false);
    assert!(day.overtime);
    assert_eq!(render_summary(&day), "8:0 [!]");
}

#[test]
fn no_overtime_marker_just_below_eight_hours() {
    // 7.99 hours floors to 7
    let total = (7.99 * 3_600_000.0) as i64;
    let day = summary::build_summary(total, false);
    assert!(!day.overtime);
    assert_eq!(day.hours, 7);
}

#[test]
fn ongoing_marker_shows_even_at_zero_total() {
    assert_eq!(render_summary(&summary::build_summary(0, true)), "0:0 [+]");
}

#[test]
fn both_markers_with_ongoing_first() {
    let day = summary::build_summary(9 * 3_600_000 + 30 * 60_000, true);
    assert_eq!(render_summary(&day), "9:30 [+] [!]");
}

#[test]
fn negative_timestamps_use_absolute_endpoints() {
    // |end| - |start|, not |end - start|
    let total = aggregate::sum_intervals(&[completed(-1_000, 2_000)], 0);
    assert_eq!(total, 1_000);
}

#[test]
fn end_before_start_contributes_negative() {
    let total = aggregate::sum_intervals(&[completed(5_000, 2_000), completed(0, 10_000)], 0);
    assert_eq!(total, 7_000);
}
