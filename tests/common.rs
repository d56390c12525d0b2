#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use dayaxis::models::event::Event;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dax() -> Command {
    cargo_bin_cmd!("dayaxis")
}

/// Unique path inside the system temp dir, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dayaxis.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so defaults are used
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
}

pub fn write_config(name: &str, yaml: &str) -> String {
    let p = temp_path(&format!("{name}_conf"), "conf");
    fs::write(&p, yaml).expect("write config");
    p
}

pub fn write_events(name: &str, json: &str) -> String {
    let p = temp_path(&format!("{name}_events"), "json");
    fs::write(&p, json).expect("write events");
    p
}

/// A small week (Mon 2025-06-02 .. Sun 2025-06-08) plus one event of the
/// following week.
pub const SAMPLE_EVENTS: &str = r##"[
  {
    "id": 1,
    "title": "Standup",
    "datetime_start": "2025-06-02T09:00:00",
    "datetime_end": "2025-06-02T10:00:00",
    "color": "#FF0000"
  },
  {
    "id": 2,
    "title": "Dinner",
    "description": "Batch-cooked lasagna",
    "datetime_start": "2025-06-04T19:30:00",
    "datetime_end": "2025-06-04T21:00:00",
    "color": null,
    "done": false
  },
  {
    "id": 3,
    "title": "Night shift",
    "datetime_start": "2025-06-05T22:00:00",
    "datetime_end": "2025-06-06T08:00:00"
  },
  {
    "id": 4,
    "title": "Next week",
    "datetime_start": "2025-06-09T09:00:00",
    "datetime_end": "2025-06-09T10:00:00"
  }
]"##;

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("timestamp")
}

pub fn ev(start: &str, end: &str) -> Event {
    Event::new("event", ts(start), ts(end))
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
