use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::weekday::{DAY_NAMES, parse_day};
use crate::ui::messages::kv;

/// Handle the `slot` command: click position → start time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slot {
        day,
        y,
        week,
        container,
    } = cmd
    {
        let day_index = parse_day(day).ok_or_else(|| AppError::InvalidDay(day.clone()))?;
        let week_of = Core::resolve_week(week.as_deref(), 0)?;

        let slot = Core::click(cfg, week_of, day_index, *y, *container)?;

        kv("day", DAY_NAMES[day_index]);
        kv("date", slot.date.format("%Y-%m-%d"));
        kv("time", slot.time.format("%H:%M"));
    }
    Ok(())
}
