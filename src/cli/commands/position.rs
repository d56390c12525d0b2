use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::snap::{snap_interval, snap_to};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::ui::messages::{kv, warning};
use crate::utils::px;
use crate::utils::time::parse_timestamp;

/// Handle the `position` command: Day Axis for one event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Position {
        start,
        end,
        height,
        snapped,
    } = cmd
    {
        let event = Event::new("event", parse_timestamp(start)?, parse_timestamp(end)?);
        let mut pos = Core::position(cfg, &event, *height)?;

        if *snapped {
            let window = cfg.time_window()?;
            let slot_height = match height {
                Some(h) => h / window.hours_count() as f64,
                None => Core::sizing(cfg, None)?.slot_height,
            };
            pos.top = snap_to(pos.top, snap_interval(slot_height, cfg.snap_minutes));
        }

        kv("top", px(pos.top));
        kv("height", px(pos.height));
        kv("bottom", px(pos.bottom()));
        kv("truncated", pos.truncated);

        if pos.truncated {
            warning("End is not after start on the same day: drawn to the bottom of the column.");
        }
    }
    Ok(())
}
