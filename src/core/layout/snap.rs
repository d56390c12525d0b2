//! Snapping and hit-testing on the week grid.

use crate::core::layout::day_axis::DayAxis;
use crate::core::layout::sizing::CalendarSizing;
use crate::models::event::Event;
use crate::models::position::Position;
use crate::models::time_window::TimeWindow;
use crate::models::weekday;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Pixel distance of `minutes` for a given hour-row height.
pub fn snap_interval(slot_height: f64, minutes: u32) -> f64 {
    slot_height * minutes as f64 / 60.0
}

/// Round `value` to the nearest multiple of `interval`.
pub fn snap_to(value: f64, interval: f64) -> f64 {
    if interval <= 0.0 {
        return value;
    }
    (value / interval).round() * interval
}

/// Event position with its top rounded to the snap grid; height is kept.
pub fn position_snapped(
    axis: &DayAxis,
    event: &Event,
    slot_height: f64,
    snap_minutes: u32,
) -> Position {
    let pos = axis.position(event);
    Position {
        top: snap_to(pos.top, snap_interval(slot_height, snap_minutes)),
        ..pos
    }
}

/// Column for a horizontal offset, clamped to Monday..Sunday.
pub fn day_index_from_x(sizing: &CalendarSizing, x: f64) -> usize {
    let day_width = sizing.day_width();
    if day_width <= 0.0 || x <= 0.0 {
        return 0;
    }
    ((x / day_width).trunc() as usize).min(6)
}

pub fn day_name_from_x(sizing: &CalendarSizing, x: f64) -> &'static str {
    weekday::DAY_NAMES[day_index_from_x(sizing, x)]
}

/// Left edge of the column under `x`.
pub fn snap_x_to_day_start(sizing: &CalendarSizing, x: f64) -> f64 {
    day_index_from_x(sizing, x) as f64 * sizing.day_width()
}

/// Slot picked by clicking an empty area of a day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClickSlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ClickSlot {
    pub fn at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Convert a click at `y` pixels into a start time.
///
/// Minutes are floored to `click_snap_minutes`; the hour is kept inside
/// the window and the minute never reaches the next hour.
pub fn click_to_slot(
    week_start: NaiveDate,
    day_index: usize,
    y: f64,
    slot_height: f64,
    window: TimeWindow,
    click_snap_minutes: u32,
) -> ClickSlot {
    let step = click_snap_minutes.clamp(1, 60);
    let total = ((y.max(0.0) / slot_height) * 60.0).max(0.0);
    let hours_from_start = (total / 60.0).floor().min(24.0) as u32;
    let minutes_in_hour = ((total % 60.0) / step as f64).floor() as u32 * step;

    let hour = (window.start_hour() + hours_from_start).clamp(window.start_hour(), window.end_hour());
    let minute = minutes_in_hour.min(60 - step);

    let date = week_start + Duration::days(day_index.min(6) as i64);
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);

    ClickSlot { date, time }
}
