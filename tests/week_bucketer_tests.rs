mod common;
use callreport::core::week_bucketer::{WeekBucket, bucket};
use callreport::models::daily::{DailyQueueRecord, QueueDaySummary};
use callreport::utils::date::{is_sunday, saturday_on_or_after};
use chrono::{Duration, NaiveDate};
use common::d;

fn days(from: &str, n: i64) -> Vec<NaiveDate> {
    let start = d(from);
    (0..n).map(|i| start + Duration::days(i)).collect()
}

fn assert_well_formed<T: callreport::core::Dated>(weeks: &[WeekBucket<T>]) {
    for w in weeks {
        assert!(!w.is_empty());
        assert!(w.records.iter().all(|r| !is_sunday(r.date())));
        assert!(w.records.iter().all(|r| r.date() >= w.first_date() && r.date() <= w.last_date()));
        assert!(w.last_date() <= w.end);
        assert_eq!(w.end, saturday_on_or_after(w.first_date()));
    }
    for pair in weeks.windows(2) {
        assert!(pair[0].end < pair[1].first_date());
    }
}

#[test]
fn test_saturday_on_or_after() {
    // 2025-01-06 is a Monday
    assert_eq!(saturday_on_or_after(d("2025-01-06")), d("2025-01-11"));
    assert_eq!(saturday_on_or_after(d("2025-01-10")), d("2025-01-11"));
    assert_eq!(saturday_on_or_after(d("2025-01-11")), d("2025-01-11"));
    assert_eq!(saturday_on_or_after(d("2025-01-12")), d("2025-01-18"));
}

#[test]
fn test_empty_input_gives_no_buckets() {
    let weeks = bucket(Vec::<NaiveDate>::new());
    assert!(weeks.is_empty());
}

#[test]
fn test_only_sundays_gives_no_buckets() {
    let weeks = bucket(vec![d("2025-01-05"), d("2025-01-12")]);
    assert!(weeks.is_empty());
}

#[test]
fn test_monday_to_saturday_is_one_week() {
    let weeks = bucket(days("2025-01-06", 6));
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].end, d("2025-01-11"));
    assert_eq!(weeks[0].len(), 6);
    assert_well_formed(&weeks);
}

#[test]
fn test_following_monday_opens_second_week() {
    // Mon 6 .. Mon 13, Sunday 12 included in the input
    let weeks = bucket(days("2025-01-06", 8));
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].dates(), days("2025-01-06", 6));
    assert_eq!(weeks[1].dates(), vec![d("2025-01-13")]);
    assert_eq!(weeks[1].end, d("2025-01-18"));
    assert_well_formed(&weeks);
}

#[test]
fn test_sundays_never_land_in_a_bucket() {
    let weeks = bucket(days("2025-01-01", 45));
    assert_well_formed(&weeks);
    let kept: usize = weeks.iter().map(|w| w.len()).sum();
    let sundays = days("2025-01-01", 45).into_iter().filter(|x| is_sunday(*x)).count();
    assert_eq!(kept, 45 - sundays);
}

#[test]
fn test_unsorted_input_is_ordered() {
    let weeks = bucket(vec![d("2025-01-14"), d("2025-01-07"), d("2025-01-06"), d("2025-01-13")]);
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].dates(), vec![d("2025-01-06"), d("2025-01-07")]);
    assert_eq!(weeks[1].dates(), vec![d("2025-01-13"), d("2025-01-14")]);
}

#[test]
fn test_gap_weeks_are_skipped() {
    // nothing between Jan 8 and Jan 29
    let weeks = bucket(vec![d("2025-01-08"), d("2025-01-29")]);
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].end, d("2025-01-11"));
    assert_eq!(weeks[1].end, d("2025-02-01"));
}

#[test]
fn test_week_starting_midweek_ends_on_its_saturday() {
    // 2025-01-01 is a Wednesday
    let weeks = bucket(days("2025-01-01", 4));
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].first_date(), d("2025-01-01"));
    assert_eq!(weeks[0].last_date(), d("2025-01-04"));
}

#[test]
fn test_same_day_rows_stay_together_in_order() {
    let rows = vec![
        QueueDaySummary {
            date: d("2025-01-07"),
            queue: "9008".into(),
            total: 5,
            answered: 4,
            abandoned: 1,
        },
        QueueDaySummary {
            date: d("2025-01-06"),
            queue: "9001".into(),
            total: 2,
            answered: 2,
            abandoned: 0,
        },
        QueueDaySummary {
            date: d("2025-01-07"),
            queue: "9001".into(),
            total: 3,
            answered: 1,
            abandoned: 2,
        },
    ];
    let weeks = bucket(rows);
    assert_eq!(weeks.len(), 1);
    let queues: Vec<&str> = weeks[0].records.iter().map(|r| r.queue.as_str()).collect();
    assert_eq!(queues, vec!["9001", "9008", "9001"]);
    assert_eq!(weeks[0].dates(), vec![d("2025-01-06"), d("2025-01-07")]);
}

#[test]
fn test_daily_records_are_bucketed() {
    let recs: Vec<DailyQueueRecord> = days("2025-01-10", 4)
        .into_iter()
        .map(|x| DailyQueueRecord::new(x, Some("9008"), 10, 8, 2))
        .collect();
    // Fri, Sat | Sun dropped | Mon
    let weeks = bucket(recs);
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].len(), 2);
    assert_eq!(weeks[1].records[0].date, d("2025-01-13"));
}
