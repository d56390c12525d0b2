//! Week Grid Composer: group events per day and place them on the grid.

use crate::core::layout::day_axis::{DayAxis, MINUTES_PER_DAY};
use crate::core::layout::snap::snap_to;
use crate::models::event::Event;
use crate::models::position::Position;
use crate::models::weekday;
use crate::utils::date::{week_days, week_end, week_range_text, week_start};
use crate::utils::time::minutes_of_day;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// What to do with an event whose end falls on a later date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossMidnight {
    /// Draw it on its start day only, down to the bottom of the column.
    #[default]
    Truncate,
    /// Draw one segment per covered day of the displayed week.
    Split,
}

/// One rectangle on the week grid.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedEvent {
    pub id: Option<i64>,
    pub title: String,
    pub color: String,
    pub date: NaiveDate,
    pub day_index: usize,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
    pub truncated: bool,
    /// Segment continuing an event that started on an earlier day.
    pub continued: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub day_index: usize,
    pub name: &'static str,
    pub events: Vec<PlacedEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub range_text: String,
    pub day_height: f64,
    pub columns: Vec<DayColumn>,
}

impl WeekLayout {
    pub fn placed(&self) -> impl Iterator<Item = &PlacedEvent> {
        self.columns.iter().flat_map(|c| c.events.iter())
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.events.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Events whose start falls on `date`.
pub fn events_for_day(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.start.date() == date).collect()
}

#[derive(Debug, Clone)]
pub struct WeekGrid {
    axis: DayAxis,
    week_width: f64,
    policy: CrossMidnight,
    snap_interval: Option<f64>,
}

impl WeekGrid {
    pub fn new(axis: DayAxis, week_width: f64, policy: CrossMidnight) -> Self {
        Self {
            axis,
            week_width,
            policy,
            snap_interval: None,
        }
    }

    /// Round every top to multiples of `interval` pixels.
    pub fn with_snap(mut self, interval: f64) -> Self {
        self.snap_interval = Some(interval);
        self
    }

    pub fn axis(&self) -> &DayAxis {
        &self.axis
    }

    pub fn day_width(&self) -> f64 {
        self.week_width / 7.0
    }

    pub fn compose(&self, week_of: NaiveDate, events: &[Event]) -> WeekLayout {
        let monday = week_start(week_of);
        let sunday = week_end(week_of);

        let dates = week_days(week_of);
        let mut columns: Vec<DayColumn> = dates
            .iter()
            .enumerate()
            .map(|(i, date)| DayColumn {
                date: *date,
                day_index: i,
                name: weekday::DAY_NAMES[i],
                events: Vec::new(),
            })
            .collect();

        let mut seen = 0;
        for (idx, date) in dates.iter().enumerate() {
            for event in events_for_day(events, *date) {
                seen += 1;

                if self.policy == CrossMidnight::Split && event.crosses_midnight() {
                    for (d, pos) in self.split_segments(event, sunday) {
                        let seg_idx = (d - monday).num_days() as usize;
                        let placed = self.place(event, d, seg_idx, pos, d != *date);
                        columns[seg_idx].events.push(placed);
                    }
                } else {
                    let pos = self.axis.position(event);
                    let placed = self.place(event, *date, idx, pos, false);
                    columns[idx].events.push(placed);
                }
            }
        }

        if seen < events.len() {
            log::debug!(
                "{} events start outside {}..{}",
                events.len() - seen,
                monday,
                sunday
            );
        }

        log::debug!(
            "composed week of {}: {} rectangles",
            monday,
            columns.iter().map(|c| c.events.len()).sum::<usize>()
        );

        WeekLayout {
            week_start: monday,
            week_end: sunday,
            range_text: week_range_text(week_of),
            day_height: self.axis.day_height(),
            columns,
        }
    }

    /// Per-day pieces of a multi-day event, clipped to the window and to
    /// the last day of the displayed week. Pieces outside the window are
    /// dropped.
    fn split_segments(&self, event: &Event, last_day: NaiveDate) -> Vec<(NaiveDate, Position)> {
        let window = self.axis.window();
        let first = event.start.date();
        let last = event.end.date().min(last_day);

        let mut out = Vec::new();
        let mut d = first;
        while d <= last {
            let start = if d == first {
                minutes_of_day(&event.start.time())
            } else {
                0
            };
            let end = if d == event.end.date() {
                minutes_of_day(&event.end.time())
            } else {
                MINUTES_PER_DAY
            };

            let start = start.max(window.start_minutes());
            let end = end.min(window.end_minutes());
            if end > start {
                out.push((d, self.axis.position_span(start, end)));
            }

            d += Duration::days(1);
        }
        out
    }

    fn place(
        &self,
        event: &Event,
        date: NaiveDate,
        day_index: usize,
        pos: Position,
        continued: bool,
    ) -> PlacedEvent {
        let top = match self.snap_interval {
            Some(interval) => snap_to(pos.top, interval),
            None => pos.top,
        };

        PlacedEvent {
            id: event.id,
            title: event.title.clone(),
            color: event.color_or_default().to_string(),
            date,
            day_index,
            top,
            height: pos.height,
            left: day_index as f64 * self.day_width(),
            width: self.day_width(),
            truncated: pos.truncated,
            continued,
        }
    }
}
