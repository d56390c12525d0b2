//! Derive slot and column heights from a measured container.

use crate::config::Config;
use crate::core::layout::day_axis::DayAxis;
use crate::errors::{AppError, AppResult};
use crate::models::time_window::TimeWindow;
use serde::Serialize;

/// Fixed chrome around the grid and the allowed slot height range.
#[derive(Debug, Clone, Copy)]
pub struct SizingRules {
    pub header_height: f64,
    pub padding: f64,
    pub min_slot_height: f64,
    pub max_slot_height: f64,
}

impl SizingRules {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            header_height: cfg.header_height,
            padding: cfg.padding,
            min_slot_height: cfg.min_slot_height,
            max_slot_height: cfg.max_slot_height,
        }
    }
}

impl Default for SizingRules {
    fn default() -> Self {
        Self {
            header_height: 50.0,
            padding: 32.0,
            min_slot_height: 25.0,
            max_slot_height: 80.0,
        }
    }
}

/// Result of one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalendarSizing {
    pub slot_height: f64,
    pub total_height: f64,
    pub week_width: f64,
    #[serde(skip)]
    pub window: TimeWindow,
}

impl CalendarSizing {
    /// Height of one hour row, clamped to the rules, and the column
    /// height that results from it.
    pub fn from_container(
        container_height: f64,
        week_width: f64,
        window: TimeWindow,
        rules: &SizingRules,
    ) -> AppResult<Self> {
        if !container_height.is_finite() || container_height < 0.0 {
            return Err(AppError::InvalidHeight(format!(
                "container height must be >= 0 (got {container_height})"
            )));
        }
        if !week_width.is_finite() || week_width < 0.0 {
            return Err(AppError::InvalidHeight(format!(
                "week width must be >= 0 (got {week_width})"
            )));
        }

        let hours = window.hours_count() as f64;
        let available = container_height - rules.header_height - rules.padding;
        let slot_height = (available / hours)
            .min(rules.max_slot_height)
            .max(rules.min_slot_height);

        log::debug!(
            "container {container_height}px -> slot {slot_height:.2}px x {hours} hours"
        );

        Ok(Self {
            slot_height,
            total_height: slot_height * hours,
            week_width,
            window,
        })
    }

    pub fn day_width(&self) -> f64 {
        self.week_width / 7.0
    }

    pub fn day_axis(&self) -> AppResult<DayAxis> {
        DayAxis::new(self.window, self.total_height)
    }
}
