pub mod config;
pub mod drop;
pub mod export;
pub mod grid;
pub mod init;
pub mod layout;
pub mod position;
pub mod sizing;
pub mod slot;

use crate::cli::parser::WeekArgs;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::event::{Event, load_events};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Events file from --file, or the one named in the config.
pub(crate) fn events_path(file: &Option<String>, cfg: &Config) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => cfg.events_path(),
    }
}

/// Resolve the displayed week and load its event source.
pub(crate) fn load_week(args: &WeekArgs, cfg: &Config) -> AppResult<(NaiveDate, Vec<Event>)> {
    let week_of = Core::resolve_week(args.week.as_deref(), args.offset)?;
    let events = load_events(&events_path(&args.file, cfg))?;
    Ok((week_of, events))
}
