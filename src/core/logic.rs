use crate::config::Config;
use crate::core::layout::drag::{DropPreview, preview_drop};
use crate::core::layout::snap::{ClickSlot, click_to_slot, snap_interval};
use crate::core::layout::{
    CalendarSizing, CrossMidnight, DayAxis, SizingRules, WeekGrid, WeekLayout,
};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::position::Position;
use crate::utils::date::{self, shift_weeks, week_start};
use chrono::{Duration, NaiveDate};

/// Options shared by the commands that lay out a whole week.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    pub container_height: Option<f64>,
    pub split: bool,
    pub snapped: bool,
}

pub struct Core;

impl Core {
    /// Week being displayed: `week` (any day of it, default today) moved
    /// by `offset` weeks.
    pub fn resolve_week(week: Option<&str>, offset: i64) -> AppResult<NaiveDate> {
        let base = match week {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };
        let shifted = shift_weeks(base, offset)
            .filter(|d| {
                d.checked_sub_signed(Duration::days(7)).is_some()
                    && d.checked_add_signed(Duration::days(14)).is_some()
            })
            .ok_or_else(|| {
                AppError::InvalidDate(format!("{base} moved by {offset} weeks is out of range"))
            })?;
        Ok(week_start(shifted))
    }

    pub fn sizing(cfg: &Config, container_height: Option<f64>) -> AppResult<CalendarSizing> {
        CalendarSizing::from_container(
            container_height.unwrap_or(cfg.default_container_height),
            cfg.week_width,
            cfg.time_window()?,
            &SizingRules::from_config(cfg),
        )
    }

    pub fn week_grid(cfg: &Config, sizing: &CalendarSizing, opts: &LayoutOptions) -> AppResult<WeekGrid> {
        let policy = if opts.split {
            CrossMidnight::Split
        } else {
            cfg.cross_midnight
        };

        let grid = WeekGrid::new(sizing.day_axis()?, sizing.week_width, policy);
        Ok(if opts.snapped {
            grid.with_snap(snap_interval(sizing.slot_height, cfg.snap_minutes))
        } else {
            grid
        })
    }

    pub fn layout_week(
        cfg: &Config,
        events: &[Event],
        week_of: NaiveDate,
        opts: &LayoutOptions,
    ) -> AppResult<WeekLayout> {
        let sizing = Self::sizing(cfg, opts.container_height)?;
        let grid = Self::week_grid(cfg, &sizing, opts)?;
        Ok(grid.compose(week_of, events))
    }

    /// Day Axis position of a single event. `height` overrides the column
    /// height derived from the default container.
    pub fn position(cfg: &Config, event: &Event, height: Option<f64>) -> AppResult<Position> {
        let axis = match height {
            Some(h) => DayAxis::new(cfg.time_window()?, h)?,
            None => Self::sizing(cfg, None)?.day_axis()?,
        };
        Ok(axis.position(event))
    }

    pub fn click(
        cfg: &Config,
        week_of: NaiveDate,
        day_index: usize,
        y: f64,
        container_height: Option<f64>,
    ) -> AppResult<ClickSlot> {
        let sizing = Self::sizing(cfg, container_height)?;
        Ok(click_to_slot(
            week_start(week_of),
            day_index,
            y,
            sizing.slot_height,
            sizing.window,
            cfg.click_snap_minutes,
        ))
    }

    pub fn drop(
        cfg: &Config,
        event: &Event,
        week_of: NaiveDate,
        x: f64,
        top: f64,
        container_height: Option<f64>,
    ) -> AppResult<DropPreview> {
        let sizing = Self::sizing(cfg, container_height)?;
        Ok(preview_drop(
            event,
            week_start(week_of),
            x,
            top,
            &sizing,
            cfg.snap_minutes,
        ))
    }
}
