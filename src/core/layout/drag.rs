//! Drag & drop rescheduling: turn a drop position back into timestamps.

use crate::core::layout::sizing::CalendarSizing;
use crate::core::layout::snap::{day_index_from_x, snap_interval, snap_to};
use crate::models::event::Event;
use crate::models::weekday;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Where the dragged block would land and what the event becomes.
#[derive(Debug, Clone, Serialize)]
pub struct DropPreview {
    pub day_index: usize,
    pub day_name: &'static str,
    /// Snapped top of the dragged block, in pixels.
    pub top: f64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DropPreview {
    /// Cursor badge text, e.g. "09:05 - Wednesday".
    pub fn label(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.day_name)
    }
}

/// Minute of day under a block whose top sits at `top` pixels.
///
/// The hour comes from whole slots; the remainder is rounded to
/// `snap_minutes`, rolling into the next hour when it rounds up to 60.
/// Offsets past the end of the day count as the last hour.
pub fn minutes_at_top(top: f64, slot_height: f64, start_hour: u32, snap_minutes: u32) -> u32 {
    let top = top.max(0.0);
    let hours = (top / slot_height).floor().min(24.0) as u32;
    let hour = (hours + start_hour).min(23);
    let minutes = ((top % slot_height) / slot_height * 60.0).floor();
    let step = snap_minutes.max(1) as f64;
    let snapped = ((minutes / step).round() * step) as u32;
    hour * 60 + snapped
}

/// Compute the rescheduled event for a drop at (`x`, `top`).
///
/// The new date is taken from the displayed week (`week_start`), the
/// original duration is preserved. The start never leaves the window, so
/// it stays on the column the block was dropped on.
pub fn preview_drop(
    event: &Event,
    week_start: NaiveDate,
    x: f64,
    top: f64,
    sizing: &CalendarSizing,
    snap_minutes: u32,
) -> DropPreview {
    let day_index = day_index_from_x(sizing, x);
    let interval = snap_interval(sizing.slot_height, snap_minutes);
    let max_top = (sizing.total_height - interval).max(0.0);
    let mut snapped_top = snap_to(top.max(0.0).min(max_top), interval);
    if snapped_top > max_top {
        snapped_top = (snapped_top - interval).max(0.0);
    }

    let step = snap_minutes.clamp(1, 60);
    let last_start = sizing.window.end_minutes() - step;
    let minutes = minutes_at_top(
        snapped_top,
        sizing.slot_height,
        sizing.window.start_hour(),
        snap_minutes,
    )
    .min(last_start);

    let date = week_start + Duration::days(day_index as i64);
    let start = date.and_time(chrono::NaiveTime::MIN) + Duration::minutes(minutes as i64);
    let end = start + event.duration();

    log::debug!(
        "drop '{}' at x={x} top={top} -> {} {}",
        event.title,
        weekday::DAY_NAMES[day_index],
        start
    );

    DropPreview {
        day_index,
        day_name: weekday::DAY_NAMES[day_index],
        top: snapped_top,
        start,
        end,
    }
}

/// The event with its times replaced by the drop result.
pub fn apply_drop(event: &Event, preview: &DropPreview) -> Event {
    let mut moved = event.clone();
    moved.start = preview.start;
    moved.end = preview.end;
    moved
}
