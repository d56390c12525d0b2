use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Visible hour range of a day column.
///
/// The end hour is inclusive: a window of `6..=23` shows 06:00 up to
/// midnight, i.e. the span is `[start_hour, end_hour + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    start_hour: u32,
    end_hour: u32,
}

impl TimeWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> AppResult<Self> {
        if start_hour > 23 || end_hour > 23 {
            return Err(AppError::InvalidWindow(format!(
                "hours must be within 0-23 (got {start_hour}-{end_hour})"
            )));
        }
        if start_hour > end_hour {
            return Err(AppError::InvalidWindow(format!(
                "start hour {start_hour} is after end hour {end_hour}"
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// First visible minute since midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    /// One past the last visible minute since midnight.
    pub fn end_minutes(&self) -> u32 {
        (self.end_hour + 1) * 60
    }

    pub fn span_minutes(&self) -> u32 {
        self.end_minutes() - self.start_minutes()
    }

    /// Number of hour rows drawn for this window.
    pub fn hours_count(&self) -> u32 {
        self.end_hour + 1 - self.start_hour
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.start_hour..=self.end_hour
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start_hour: 6,
            end_hour: 23,
        }
    }
}
