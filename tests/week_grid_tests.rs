mod common;
use chrono::NaiveDate;
use common::{SAMPLE_EVENTS, approx, ev};
use dayaxis::core::layout::week_grid::events_for_day;
use dayaxis::core::layout::{CrossMidnight, DayAxis, WeekGrid};
use dayaxis::core::logic::Core;
use dayaxis::models::event::parse_events;
use dayaxis::models::time_window::TimeWindow;
use dayaxis::utils::date::{day_header, week_end, week_range_text, week_start};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn grid(policy: CrossMidnight) -> WeekGrid {
    let axis = DayAxis::new(TimeWindow::new(6, 23).unwrap(), 1080.0).unwrap();
    WeekGrid::new(axis, 700.0, policy)
}

#[test]
fn test_week_bounds_are_monday_to_sunday() {
    assert_eq!(week_start(date("2025-06-05")), date("2025-06-02"));
    assert_eq!(week_start(date("2025-06-02")), date("2025-06-02"));
    assert_eq!(week_start(date("2025-06-08")), date("2025-06-02"));
    assert_eq!(week_end(date("2025-06-02")), date("2025-06-08"));
}

#[test]
fn test_week_labels() {
    assert_eq!(week_range_text(date("2025-06-04")), "Jun 2 - Jun 8");
    assert_eq!(
        week_range_text(date("2025-12-31")),
        "Dec 29, 2025 - Jan 4, 2026"
    );
    assert_eq!(day_header(date("2025-06-02")), "2nd June");
    assert_eq!(day_header(date("2025-06-11")), "11th June");
    assert_eq!(day_header(date("2025-06-21")), "21st June");
    assert_eq!(day_header(date("2025-06-23")), "23rd June");
}

#[test]
fn test_events_for_day_matches_start_date() {
    let events = parse_events(SAMPLE_EVENTS).unwrap();
    assert_eq!(events_for_day(&events, date("2025-06-02")).len(), 1);
    assert_eq!(events_for_day(&events, date("2025-06-05")).len(), 1);
    // the night shift ends on the 6th but belongs to the 5th
    assert_eq!(events_for_day(&events, date("2025-06-06")).len(), 0);
}

#[test]
fn test_compose_groups_by_day() {
    let events = parse_events(SAMPLE_EVENTS).unwrap();
    let layout = grid(CrossMidnight::Truncate).compose(date("2025-06-05"), &events);

    assert_eq!(layout.week_start, date("2025-06-02"));
    assert_eq!(layout.week_end, date("2025-06-08"));
    assert_eq!(layout.columns.len(), 7);
    // the event of the following week is left out
    assert_eq!(layout.len(), 3);

    let monday = &layout.columns[0];
    assert_eq!(monday.name, "Monday");
    assert_eq!(monday.events.len(), 1);
    let standup = &monday.events[0];
    assert_eq!(standup.id, Some(1));
    assert_eq!(standup.color, "#FF0000");
    assert!(approx(standup.top, 180.0));
    assert!(approx(standup.height, 60.0));
    assert!(approx(standup.left, 0.0));
    assert!(approx(standup.width, 100.0));

    let dinner = &layout.columns[2].events[0];
    assert_eq!(dinner.color, "#3182CE");
    assert!(approx(dinner.left, 200.0));
    assert!(approx(dinner.top, 810.0));
    assert!(approx(dinner.height, 90.0));
}

#[test]
fn test_truncate_policy_keeps_one_rectangle() {
    let events = vec![ev("2025-06-02 22:00", "2025-06-03 08:00")];
    let layout = grid(CrossMidnight::Truncate).compose(date("2025-06-02"), &events);

    assert_eq!(layout.len(), 1);
    let r = &layout.columns[0].events[0];
    assert!(approx(r.top, 960.0));
    assert!(approx(r.height, 120.0));
    assert!(r.truncated);
    assert!(!r.continued);
}

#[test]
fn test_split_policy_emits_segments() {
    let events = vec![ev("2025-06-02 22:00", "2025-06-03 08:00")];
    let layout = grid(CrossMidnight::Split).compose(date("2025-06-02"), &events);

    assert_eq!(layout.len(), 2);

    let first = &layout.columns[0].events[0];
    assert!(approx(first.top, 960.0));
    assert!(approx(first.height, 120.0));
    assert!(!first.truncated);
    assert!(!first.continued);

    let second = &layout.columns[1].events[0];
    assert_eq!(second.date, date("2025-06-03"));
    assert!(approx(second.top, 0.0));
    assert!(approx(second.height, 120.0));
    assert!(approx(second.left, 100.0));
    assert!(second.continued);
}

#[test]
fn test_split_multi_day_event_fills_middle_days() {
    let events = vec![ev("2025-06-02 20:00", "2025-06-04 07:00")];
    let layout = grid(CrossMidnight::Split).compose(date("2025-06-02"), &events);

    assert_eq!(layout.len(), 3);
    let middle = &layout.columns[1].events[0];
    assert!(approx(middle.top, 0.0));
    assert!(approx(middle.height, 1080.0));
    assert!(middle.continued);

    let last = &layout.columns[2].events[0];
    assert!(approx(last.height, 60.0));
}

#[test]
fn test_split_ending_at_midnight_has_no_empty_segment() {
    let events = vec![ev("2025-06-02 22:00", "2025-06-03 00:00")];
    let layout = grid(CrossMidnight::Split).compose(date("2025-06-02"), &events);

    assert_eq!(layout.len(), 1);
    let r = &layout.columns[0].events[0];
    assert!(approx(r.height, 120.0));
    assert!(!r.truncated);
}

#[test]
fn test_split_stops_at_end_of_week() {
    let events = vec![ev("2025-06-08 21:00", "2025-06-09 09:00")];
    let layout = grid(CrossMidnight::Split).compose(date("2025-06-02"), &events);

    assert_eq!(layout.len(), 1);
    assert_eq!(layout.columns[6].events.len(), 1);
}

#[test]
fn test_split_keeps_truncation_for_bad_data() {
    let events = vec![ev("2025-06-02 10:00", "2025-06-02 09:00")];
    let layout = grid(CrossMidnight::Split).compose(date("2025-06-02"), &events);

    assert_eq!(layout.len(), 1);
    assert!(layout.columns[0].events[0].truncated);
}

#[test]
fn test_snapped_tops() {
    let events = vec![ev("2025-06-02 09:02", "2025-06-02 10:00")];
    let layout = grid(CrossMidnight::Truncate)
        .with_snap(5.0)
        .compose(date("2025-06-02"), &events);

    let r = &layout.columns[0].events[0];
    assert!(approx(r.top, 180.0));
    assert!(approx(r.height, 58.0));
}

#[test]
fn test_resolve_week_moves_by_offset() {
    assert_eq!(Core::resolve_week(Some("2025-06-04"), 0).unwrap(), date("2025-06-02"));
    assert_eq!(Core::resolve_week(Some("2025-06-04"), 1).unwrap(), date("2025-06-09"));
    assert_eq!(Core::resolve_week(Some("2025-06-04"), -2).unwrap(), date("2025-05-19"));
}

#[test]
fn test_resolve_week_rejects_out_of_range_offset() {
    for offset in [9_999_999_999, -9_999_999_999, i64::MAX, i64::MIN] {
        let err = Core::resolve_week(Some("2025-06-02"), offset).unwrap_err();
        assert!(err.to_string().contains("Invalid date"));
    }
    assert!(Core::resolve_week(Some("June 2nd"), 0).is_err());
}
