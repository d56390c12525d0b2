mod common;
use chrono::{NaiveDate, NaiveTime};
use common::{approx, ev, ts};
use dayaxis::core::layout::drag::{apply_drop, minutes_at_top, preview_drop};
use dayaxis::core::layout::snap::{
    click_to_slot, day_index_from_x, day_name_from_x, position_snapped, snap_interval, snap_to,
    snap_x_to_day_start,
};
use dayaxis::core::layout::{CalendarSizing, SizingRules};
use dayaxis::models::time_window::TimeWindow;
use dayaxis::models::weekday::parse_day;

fn sizing(container: f64) -> CalendarSizing {
    CalendarSizing::from_container(
        container,
        700.0,
        TimeWindow::default(),
        &SizingRules::default(),
    )
    .unwrap()
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

#[test]
fn test_sizing_from_container() {
    let s = sizing(800.0);
    assert!(approx(s.slot_height, 718.0 / 18.0));
    assert!(approx(s.total_height, 718.0));

    let s = sizing(802.0);
    assert!(approx(s.slot_height, 40.0));
    assert!(approx(s.total_height, 720.0));
    assert!(approx(s.day_width(), 100.0));
    assert!(approx(s.day_axis().unwrap().day_height(), 720.0));
}

#[test]
fn test_sizing_clamps_slot_height() {
    let s = sizing(300.0);
    assert!(approx(s.slot_height, 25.0));
    assert!(approx(s.total_height, 450.0));

    let s = sizing(2000.0);
    assert!(approx(s.slot_height, 80.0));
    assert!(approx(s.total_height, 1440.0));

    // a container smaller than the chrome still yields a usable axis
    let s = sizing(0.0);
    assert!(approx(s.slot_height, 25.0));
    assert!(s.day_axis().is_ok());
}

#[test]
fn test_sizing_rejects_bad_measurements() {
    let w = TimeWindow::default();
    let r = SizingRules::default();
    assert!(CalendarSizing::from_container(-1.0, 700.0, w, &r).is_err());
    assert!(CalendarSizing::from_container(f64::NAN, 700.0, w, &r).is_err());
    assert!(CalendarSizing::from_container(800.0, -5.0, w, &r).is_err());
}

#[test]
fn test_snap_helpers() {
    assert!(approx(snap_interval(36.0, 5), 3.0));
    assert!(approx(snap_to(10.4, 3.0), 9.0));
    assert!(approx(snap_to(10.6, 3.0), 12.0));
    assert!(approx(snap_to(10.6, 0.0), 10.6));

    let s = sizing(802.0);
    let axis = s.day_axis().unwrap();
    let pos = position_snapped(&axis, &ev("2025-06-02 09:07", "2025-06-02 10:00"), s.slot_height, 5);
    // 09:07 is 124.67px; the 5-minute grid is 3.33px
    assert!(approx(pos.top, 40.0 / 12.0 * 37.0));
    let k = pos.top / snap_interval(s.slot_height, 5);
    assert!(approx(k, k.round()));
}

#[test]
fn test_day_index_from_x() {
    let s = sizing(802.0);
    assert_eq!(day_index_from_x(&s, 0.0), 0);
    assert_eq!(day_index_from_x(&s, 99.9), 0);
    assert_eq!(day_index_from_x(&s, 100.0), 1);
    assert_eq!(day_index_from_x(&s, 650.0), 6);
    assert_eq!(day_index_from_x(&s, 5000.0), 6);
    assert_eq!(day_index_from_x(&s, -10.0), 0);
    assert_eq!(day_name_from_x(&s, 250.0), "Wednesday");
    assert!(approx(snap_x_to_day_start(&s, 250.0), 200.0));
}

#[test]
fn test_parse_day() {
    assert_eq!(parse_day("wed"), Some(2));
    assert_eq!(parse_day("Sunday"), Some(6));
    assert_eq!(parse_day("0"), Some(0));
    assert_eq!(parse_day("7"), None);
    assert_eq!(parse_day("someday"), None);
}

#[test]
fn test_click_to_slot() {
    let w = TimeWindow::default();

    let slot = click_to_slot(monday(), 2, 130.0, 40.0, w, 15);
    assert_eq!(slot.date, NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
    assert_eq!(slot.time, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    assert_eq!(slot.at(), ts("2025-06-04 09:15"));

    // minutes floor to the quarter
    let slot = click_to_slot(monday(), 0, 39.0, 40.0, w, 15);
    assert_eq!(slot.time, NaiveTime::from_hms_opt(6, 45, 0).unwrap());

    // hour stays inside the window
    let slot = click_to_slot(monday(), 0, 10_000.0, 40.0, w, 15);
    assert_eq!(slot.time.format("%H").to_string(), "23");
    let slot = click_to_slot(monday(), 0, -5.0, 40.0, w, 15);
    assert_eq!(slot.time, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
}

#[test]
fn test_minutes_at_top_rolls_over() {
    assert_eq!(minutes_at_top(120.0, 40.0, 6, 5), 9 * 60);
    assert_eq!(minutes_at_top(38.0, 40.0, 6, 5), 6 * 60 + 55);
    // 59.25 minutes rounds to 60 and becomes the next hour
    assert_eq!(minutes_at_top(39.5, 40.0, 6, 5), 7 * 60);
    assert_eq!(minutes_at_top(-3.0, 40.0, 6, 5), 6 * 60);
}

#[test]
fn test_drop_preserves_duration() {
    let s = sizing(802.0);
    let event = ev("2025-06-02 10:00", "2025-06-02 11:30").with_id(1);

    let preview = preview_drop(&event, monday(), 250.0, 120.0, &s, 5);
    assert_eq!(preview.day_index, 2);
    assert_eq!(preview.day_name, "Wednesday");
    assert_eq!(preview.start, ts("2025-06-04 09:00"));
    assert_eq!(preview.end, ts("2025-06-04 10:30"));
    assert_eq!(preview.label(), "09:00 - Wednesday");

    let moved = apply_drop(&event, &preview);
    assert_eq!(moved.id, Some(1));
    assert_eq!(moved.start, preview.start);
    assert_eq!(moved.duration(), event.duration());
}

#[test]
fn test_drop_snaps_top() {
    let s = sizing(802.0);
    let event = ev("2025-06-02 10:00", "2025-06-02 10:30");

    // 141px is just past 09:31; the 5-minute grid puts it at 09:30
    let preview = preview_drop(&event, monday(), 10.0, 141.0, &s, 5);
    assert!(approx(preview.top, 140.0));
    assert_eq!(preview.start, ts("2025-06-02 09:30"));
    assert_eq!(preview.end, ts("2025-06-02 10:00"));
}

#[test]
fn test_far_away_click_stays_in_last_hour() {
    let w = TimeWindow::default();

    let slot = click_to_slot(monday(), 0, 1e12, 40.0, w, 15);
    assert_eq!(slot.date, monday());
    assert_eq!(slot.time, NaiveTime::from_hms_opt(23, 0, 0).unwrap());
}

#[test]
fn test_far_away_top_is_last_hour() {
    assert_eq!(minutes_at_top(1e11, 40.0, 6, 5), 23 * 60);

    let s = sizing(802.0);
    let event = ev("2025-06-02 10:00", "2025-06-02 10:30");
    let preview = preview_drop(&event, monday(), 250.0, 1e11, &s, 5);
    assert_eq!(preview.start.date(), NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
    assert_eq!(preview.start.format("%H").to_string(), "23");
}

#[test]
fn test_drop_at_column_bottom_keeps_the_day() {
    // 800px container: 718px column, the last snap step rounds towards 24:00
    let s = sizing(800.0);
    let event = ev("2025-06-02 10:00", "2025-06-02 10:30");

    let preview = preview_drop(&event, monday(), 250.0, 717.5, &s, 5);
    assert_eq!(preview.day_name, "Wednesday");
    assert_eq!(preview.start.date(), NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
    assert!(preview.start <= ts("2025-06-04 23:55"));
    assert!(preview.label().starts_with("23:"));
    assert!(preview.label().ends_with("Wednesday"));
    assert!(preview.top + snap_interval(s.slot_height, 5) <= s.total_height + 1e-6);
    assert_eq!(preview.end - preview.start, event.duration());
}
