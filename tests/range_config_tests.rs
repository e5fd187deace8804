mod common;
use callreport::config::Config;
use callreport::errors::AppError;
use callreport::export::parse_range;
use callreport::utils::date::{format_long, format_short, parse_date, weekday_upper_es};
use common::d;

#[test]
fn test_parse_range_shapes() {
    let y = parse_range("2024").expect("year");
    assert_eq!((y.start, y.end), (d("2024-01-01"), d("2024-12-31")));

    let m = parse_range("2024-02").expect("month");
    assert_eq!((m.start, m.end), (d("2024-02-01"), d("2024-02-29")));

    let day = parse_range("2025-01-06").expect("day");
    assert_eq!((day.start, day.end), (d("2025-01-06"), d("2025-01-06")));

    let span = parse_range("2025-01:2025-03").expect("months");
    assert_eq!((span.start, span.end), (d("2025-01-01"), d("2025-03-31")));

    let days = parse_range("2025-01-06:2025-01-13").expect("days");
    assert_eq!(days.end_ts(), "2025-01-14 00:00:00");
    assert_eq!(days.start_ts(), "2025-01-06 00:00:00");
}

#[test]
fn test_parse_range_rejects_bad_input() {
    for bad in ["2025-13", "2025-02-30", "2025-01:2025-01-05", "2025-03:2025-01", "abc", "2025-ñ1"] {
        assert!(
            matches!(parse_range(bad), Err(AppError::InvalidRange(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_parse_date_errors() {
    assert_eq!(parse_date("2025-01-06").expect("date"), d("2025-01-06"));
    assert!(matches!(parse_date("06/01/2025"), Err(AppError::InvalidDate(_))));
    assert!(matches!(parse_date("2025-01-3X"), Err(AppError::InvalidDate(_))));
}

#[test]
fn test_spanish_date_labels() {
    assert_eq!(format_long(d("2025-01-05")), "05-Ene-2025");
    assert_eq!(format_short(d("2025-12-24")), "24-Dic");
    assert_eq!(weekday_upper_es(d("2025-01-11")), "SÁBADO");
}

#[test]
fn test_config_defaults_and_fallbacks() {
    let cfg = Config::parse("database: /tmp/x.sqlite\n").expect("parse");
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.break_limits.lunch_secs, 3600);
    assert_eq!(cfg.queue_tab("9008"), "REHAB-9008");
    assert_eq!(cfg.queue_tab("7777"), "7777");
    assert_eq!(cfg.queue_title("7777"), "Cola 7777");
    assert_eq!(cfg.queue_summary_name("7777"), "7777 : Cola 7777");
}

#[test]
fn test_config_overrides() {
    let yaml = "\
database: /tmp/y.sqlite
company_title: ACME
queue_tabs:
  \"100\": VENTAS
break_limits:
  lunch_secs: 1800
  rest_secs: 300
  bathroom_secs: 600
";
    let cfg = Config::parse(yaml).expect("parse");
    assert_eq!(cfg.company_title, "ACME");
    assert_eq!(cfg.queue_tab("100"), "VENTAS");
    // a provided map replaces the default one
    assert_eq!(cfg.queue_tab("9008"), "9008");
    assert_eq!(cfg.break_limits.rest_secs, 300);
}

#[test]
fn test_missing_keys() {
    let missing = Config::missing_keys("database: /tmp/z.sqlite\ncompany_title: X\n").expect("yaml");
    assert!(!missing.contains(&"database"));
    assert!(missing.contains(&"break_limits"));
    assert_eq!(missing.len(), 5);

    assert!(Config::missing_keys("- just\n- a list\n").is_err());
}

#[test]
fn test_config_yaml_roundtrip_keeps_queue_maps() {
    let cfg = Config::with_database("/tmp/w.sqlite".into());
    let back = Config::parse(&cfg.to_yaml().expect("yaml")).expect("parse");
    assert_eq!(back.queue_names, cfg.queue_names);
    assert_eq!(back.database, "/tmp/w.sqlite");
}
