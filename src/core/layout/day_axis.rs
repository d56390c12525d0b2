//! Day Axis: maps event times onto vertical pixel offsets of one day column.

use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::position::Position;
use crate::models::time_window::TimeWindow;
use crate::utils::time::minutes_of_day;

/// Minutes in a full day; valid as an end minute meaning "next midnight".
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Immutable mapping for one measured column height.
///
/// Build a new one whenever the measured height changes; there is nothing
/// to update in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAxis {
    window: TimeWindow,
    day_height: f64,
}

impl DayAxis {
    pub fn new(window: TimeWindow, day_height: f64) -> AppResult<Self> {
        if !day_height.is_finite() || day_height <= 0.0 {
            return Err(AppError::InvalidHeight(format!(
                "day column height must be > 0 (got {day_height})"
            )));
        }
        Ok(Self { window, day_height })
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn day_height(&self) -> f64 {
        self.day_height
    }

    pub fn px_per_minute(&self) -> f64 {
        self.day_height / self.window.span_minutes() as f64
    }

    /// Place an event using only the time-of-day of its start and end.
    ///
    /// An end that is not after the start (the event runs into the next
    /// day, or the data is bad) stretches the event to the bottom of the
    /// column and flags the result as truncated.
    pub fn position(&self, event: &Event) -> Position {
        let start = minutes_of_day(&event.start.time());
        let end = minutes_of_day(&event.end.time());

        let pos = self.position_span(start, end);
        if pos.truncated {
            log::debug!(
                "'{}' ends at or before its start time-of-day ({} -> {}), drawn to column bottom",
                event.title,
                event.start,
                event.end
            );
        }
        pos
    }

    /// Same computation over raw minutes since midnight.
    pub fn position_span(&self, start_minutes: u32, end_minutes: u32) -> Position {
        let window_start = self.window.start_minutes() as f64;
        let span = self.window.span_minutes() as f64;
        let h = self.day_height;

        let rel_start = (start_minutes as f64 - window_start) / span;
        let rel_end = (end_minutes as f64 - window_start) / span;

        let top = (rel_start * h).max(0.0).min(h);
        let raw_height = ((rel_end - rel_start) * h).min(h - top);

        if raw_height > 0.0 {
            Position {
                top,
                height: raw_height,
                truncated: false,
            }
        } else {
            Position {
                top,
                height: h - top,
                truncated: true,
            }
        }
    }
}
