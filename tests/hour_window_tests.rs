mod common;
use callreport::core::hour_window::{
    HourMap, analyze, analyze_range, check_consistency, enrich, group_by_date,
};
use callreport::models::daily::{DailyQueueRecord, HourWindow, NO_WINDOW};
use callreport::models::hourly::HourlyCount;
use common::d;

fn hours(pairs: &[(u32, i64)]) -> HourMap {
    pairs.iter().copied().collect()
}

#[test]
fn test_window_label_format() {
    let w = HourWindow::starting_at(6, 15);
    assert_eq!(w.label, "06h+07h");
    assert_eq!(HourWindow::starting_at(14, 3).label, "14h+15h");
    assert!(!w.is_none());
    assert!(HourWindow::none().is_none());
}

#[test]
fn test_peak_and_trough_over_limited_range() {
    let h = hours(&[(6, 10), (7, 5), (8, 20), (9, 0)]);
    let pt = analyze_range(&h, 6, 9);
    assert_eq!(pt.peak, HourWindow::starting_at(7, 25));
    assert_eq!(pt.trough, HourWindow::starting_at(6, 15));
}

#[test]
fn test_missing_hours_count_as_zero_over_full_range() {
    let h = hours(&[(6, 10), (7, 5), (8, 20), (9, 0)]);
    let pt = analyze(&h);
    assert_eq!(pt.peak, HourWindow::starting_at(7, 25));
    // 09h+10h is the first all-zero window
    assert_eq!(pt.trough, HourWindow::starting_at(9, 0));
}

#[test]
fn test_ties_go_to_earliest_window() {
    let h = hours(&[(10, 4), (11, 4), (12, 4), (13, 4)]);
    let pt = analyze_range(&h, 10, 13);
    assert_eq!(pt.peak.label, "10h+11h");
    assert_eq!(pt.trough.label, "10h+11h");
}

#[test]
fn test_last_window_reads_hour_nineteen() {
    let h = hours(&[(18, 1), (19, 30)]);
    let pt = analyze(&h);
    assert_eq!(pt.peak, HourWindow::starting_at(18, 31));
}

#[test]
fn test_no_hourly_data_yields_sentinel() {
    let pt = analyze(&HourMap::new());
    assert_eq!(pt.peak.label, NO_WINDOW);
    assert_eq!(pt.trough.label, NO_WINDOW);
    assert_eq!(pt.peak.count, 0);
}

#[test]
fn test_group_by_date_drops_hours_outside_range() {
    let rows = vec![
        HourlyCount::new(d("2025-01-06"), 5, 9),
        HourlyCount::new(d("2025-01-06"), 6, 1),
        HourlyCount::new(d("2025-01-06"), 19, 2),
        HourlyCount::new(d("2025-01-06"), 20, 7),
        HourlyCount::new(d("2025-01-07"), 8, 3),
    ];
    let grouped = group_by_date(&rows);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[&d("2025-01-06")], hours(&[(6, 1), (19, 2)]));
    assert_eq!(grouped[&d("2025-01-07")], hours(&[(8, 3)]));
}

#[test]
fn test_consistency_check() {
    let h = hours(&[(7, 2), (8, 1)]);
    assert!(check_consistency(d("2025-01-06"), &h, 3).is_none());

    let issue = check_consistency(d("2025-01-06"), &h, 5).expect("mismatch");
    assert_eq!(issue.hourly_sum, 3);
    assert_eq!(issue.daily_total, 5);
    assert!(issue.to_string().contains("2025-01-06"));
}

#[test]
fn test_enrich_sets_windows_and_reports_mismatch() {
    let mut recs = vec![
        DailyQueueRecord::new(d("2025-01-06"), Some("9008"), 3, 3, 0),
        DailyQueueRecord::new(d("2025-01-07"), Some("9008"), 9, 8, 1),
        DailyQueueRecord::new(d("2025-01-08"), Some("9008"), 1, 1, 0),
    ];
    let hourly = vec![
        HourlyCount::new(d("2025-01-06"), 7, 2),
        HourlyCount::new(d("2025-01-06"), 8, 1),
        HourlyCount::new(d("2025-01-07"), 10, 4),
    ];

    let issues = enrich(&mut recs, &hourly);

    assert_eq!(recs[0].peak_hour, "07h+08h");
    assert_eq!(recs[0].peak_count, 3);
    assert_eq!(recs[1].peak_hour, "09h+10h");
    assert_eq!(recs[1].peak_count, 4);
    // the day without hourly rows keeps the sentinel
    assert_eq!(recs[2].peak(), HourWindow::none());
    assert_eq!(recs[2].trough(), HourWindow::none());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].date, d("2025-01-07"));
    assert_eq!(issues[0].hourly_sum, 4);
    assert_eq!(issues[0].daily_total, 9);
}
