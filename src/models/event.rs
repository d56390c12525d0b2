use crate::errors::{AppError, AppResult};
use crate::utils::colors::DEFAULT_EVENT_COLOR;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;

/// Calendar event as served by the backend.
///
/// Only `start` and `end` matter for layout; everything else is carried
/// through for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(
        rename = "datetime_start",
        alias = "start",
        deserialize_with = "de_timestamp",
        serialize_with = "ser_timestamp"
    )]
    pub start: NaiveDateTime, // ⇔ events.datetime_start
    #[serde(
        rename = "datetime_end",
        alias = "end",
        deserialize_with = "de_timestamp",
        serialize_with = "ser_timestamp"
    )]
    pub end: NaiveDateTime, // ⇔ events.datetime_end
    #[serde(default)]
    pub color: Option<String>, // "#RRGGBB"
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub kind: Option<i32>,
    #[serde(default)]
    pub done: Option<bool>,
}

fn de_timestamp<'de, D>(d: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(d)?;
    parse_timestamp(&s).map_err(serde::de::Error::custom)
}

fn ser_timestamp<S>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format_timestamp(ts))
}

impl Event {
    pub fn new(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            description: None,
            start,
            end,
            color: None,
            location: None,
            kind: None,
            done: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Local calendar date the event belongs to (its start date).
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when the end timestamp falls on a later calendar date.
    pub fn crosses_midnight(&self) -> bool {
        self.end > self.start && self.end.date() > self.start.date()
    }

    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
    }

    pub fn is_done(&self) -> bool {
        self.done.unwrap_or(false)
    }
}

/// Parse a JSON array of events.
pub fn parse_events(json: &str) -> AppResult<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    Ok(events)
}

/// Read the event list previously fetched from the backend.
pub fn load_events(path: &Path) -> AppResult<Vec<Event>> {
    if !path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("events file not found: {}", path.display()),
        )));
    }

    let content = fs::read_to_string(path)?;
    let events = parse_events(&content)?;
    log::debug!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

pub fn find_event(events: &[Event], id: i64) -> AppResult<&Event> {
    events
        .iter()
        .find(|e| e.id == Some(id))
        .ok_or(AppError::EventNotFound(id))
}

/// Write the event list back in the backend's JSON shape.
pub fn save_events(path: &Path, events: &[Event]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(events)?;
    fs::write(path, json)?;
    log::debug!("saved {} events to {}", events.len(), path.display());
    Ok(())
}
