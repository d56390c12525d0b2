use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::snap::snap_interval;
use crate::core::layout::{CalendarSizing, SizingRules};
use crate::errors::AppResult;
use crate::ui::messages::kv;
use crate::utils::px;

/// Handle the `sizing` command: what a resize measurement produces.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sizing { container, width } = cmd {
        let sizing = CalendarSizing::from_container(
            *container,
            width.unwrap_or(cfg.week_width),
            cfg.time_window()?,
            &SizingRules::from_config(cfg),
        )?;

        kv("hours", sizing.window.hours_count());
        kv("slot height", px(sizing.slot_height));
        kv("total height", px(sizing.total_height));
        kv("day width", px(sizing.day_width()));
        kv(
            "snap",
            format!(
                "{}px ({} min)",
                px(snap_interval(sizing.slot_height, cfg.snap_minutes)),
                cfg.snap_minutes
            ),
        );
    }
    Ok(())
}
