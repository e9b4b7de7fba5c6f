use chrono::{Duration, Local, TimeZone, Utc};
use regconsole::messages::{Language, Messages};
use regconsole::utils::datetime::*;

fn en() -> &'static Messages {
    Messages::for_language(Language::En)
}

#[test]
fn test_just_now() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(format_relative_time_at(&now, &now, en()), "just now");
    assert_eq!(
        format_relative_time_at(&(now - Duration::seconds(59)), &now, en()),
        "just now"
    );
}

#[test]
fn test_minutes_are_floored() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(
        format_relative_time_at(&(now - Duration::seconds(90)), &now, en()),
        "1 minute ago"
    );
    assert_eq!(
        format_relative_time_at(&(now - Duration::minutes(59)), &now, en()),
        "59 minutes ago"
    );
}

#[test]
fn test_hours_and_days() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(
        format_relative_time_at(&(now - Duration::minutes(150)), &now, en()),
        "2 hours ago"
    );
    assert_eq!(
        format_relative_time_at(&(now - Duration::days(2)), &now, en()),
        "2 days ago"
    );
    assert_eq!(
        format_relative_time_at(&(now - Duration::minutes(61)), &now, en()),
        "1 hour ago"
    );
    assert_eq!(
        format_relative_time_at(&(now - Duration::hours(30)), &now, en()),
        "1 day ago"
    );
}

#[test]
fn test_future_reads_just_now() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    assert_eq!(
        format_relative_time_at(&(now + Duration::hours(3)), &now, en()),
        "just now"
    );
}

#[test]
fn test_mixed_time_zones() {
    let then = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let now = then.with_timezone(&Local) + Duration::hours(5);
    assert_eq!(format_relative_time_at(&then, &now, en()), "5 hours ago");
}

#[test]
fn test_chinese_units() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let zh = Messages::for_language(Language::Zh);
    assert_eq!(format_relative_time_at(&(now - Duration::days(3)), &now, zh), "3 天前");
    assert_eq!(format_relative_time_at(&now, &now, zh), "刚刚");
}

#[test]
fn test_against_clock() {
    let then = Utc::now() - Duration::minutes(10);
    assert_eq!(format_relative_time(&then, en()), "10 minutes ago");
}
