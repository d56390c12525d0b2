// src/export/model.rs

use crate::core::layout::{PlacedEvent, WeekLayout};
use crate::models::weekday;
use serde::Serialize;

/// Flat row for exporting a placed rectangle.
#[derive(Serialize, Clone, Debug)]
pub struct PlacedEventExport {
    pub id: Option<i64>,
    pub title: String,
    pub date: String,
    pub day: String,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
    pub color: String,
    pub truncated: bool,
    pub continued: bool,
}

impl From<&PlacedEvent> for PlacedEventExport {
    fn from(p: &PlacedEvent) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            date: p.date.format("%Y-%m-%d").to_string(),
            day: weekday::name_of(p.day_index).unwrap_or("").to_string(),
            top: p.top,
            height: p.height,
            left: p.left,
            width: p.width,
            color: p.color.clone(),
            truncated: p.truncated,
            continued: p.continued,
        }
    }
}

pub(crate) fn layout_rows(layout: &WeekLayout) -> Vec<PlacedEventExport> {
    layout.placed().map(PlacedEventExport::from).collect()
}
