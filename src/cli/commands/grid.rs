use crate::cli::commands::load_week;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::CrossMidnight;
use crate::errors::AppResult;
use crate::render::{GridStyle, render_week};

/// Handle the `grid` command: draw the week in the terminal.
pub fn handle(cmd: &Commands, cfg: &Config, no_color: bool) -> AppResult<()> {
    if let Commands::Grid { week } = cmd {
        let (week_of, events) = load_week(week, cfg)?;

        let policy = if week.split {
            CrossMidnight::Split
        } else {
            cfg.cross_midnight
        };
        let style = GridStyle {
            rows_per_hour: cfg.grid_rows_per_hour,
            column_width: cfg.grid_column_width,
            color: !no_color,
        };

        print!(
            "{}",
            render_week(&events, week_of, cfg.time_window()?, policy, &style)?
        );
    }
    Ok(())
}
