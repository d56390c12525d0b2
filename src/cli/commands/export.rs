use crate::cli::commands::load_week;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, LayoutOptions};
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        week,
        format,
        out,
        container,
        force,
    } = cmd
    {
        let (week_of, events) = load_week(week, cfg)?;
        let opts = LayoutOptions {
            container_height: *container,
            split: week.split,
            snapped: false,
        };
        let layout = Core::layout_week(cfg, &events, week_of, &opts)?;

        ExportLogic::export(&layout, *format, out, *force)?;
    }
    Ok(())
}
