use crate::cli::commands::load_week;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::WeekLayout;
use crate::core::logic::{Core, LayoutOptions};
use crate::errors::{AppError, AppResult};
use crate::models::weekday::parse_day;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_flag;
use crate::utils::px;
use crate::utils::table::{Column, Table};

/// Handle the `layout` command: pixel rectangles of a week.
pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Layout {
        week,
        container,
        snapped,
        day,
    } = cmd
    {
        let only_day = match day {
            Some(d) => Some(parse_day(d).ok_or_else(|| AppError::InvalidDay(d.clone()))?),
            None => None,
        };

        let (week_of, events) = load_week(week, cfg)?;
        let opts = LayoutOptions {
            container_height: *container,
            split: week.split,
            snapped: *snapped,
        };
        let layout = Core::layout_week(cfg, &events, week_of, &opts)?;

        header(&layout.range_text);
        info(format!("Day column height: {}px", px(layout.day_height)));

        if layout.is_empty() {
            println!("No events in this week.");
            return Ok(());
        }

        print!("{}", build_table(&layout, only_day, color).render());
    }
    Ok(())
}

fn build_table(layout: &WeekLayout, only_day: Option<usize>, color: bool) -> Table {
    let mut table = Table::new(vec![
        Column::left("Day", 9),
        Column::left("Date", 10),
        Column::right("Id", 4),
        Column::left("Title", 20),
        Column::right("Top", 7),
        Column::right("Height", 7),
        Column::right("Left", 7),
        Column::left("Flags", 5),
    ]);

    for col in &layout.columns {
        if only_day.is_some_and(|d| d != col.day_index) {
            continue;
        }
        for ev in &col.events {
            let mut flags = Vec::new();
            if ev.truncated {
                flags.push("truncated");
            }
            if ev.continued {
                flags.push("continued");
            }
            let flags = if flags.is_empty() {
                "-".to_string()
            } else {
                flags.join(",")
            };

            table.add_row(vec![
                col.name.to_string(),
                col.date.format("%Y-%m-%d").to_string(),
                ev.id.map(|i| i.to_string()).unwrap_or_else(|| "-".into()),
                ev.title.clone(),
                px(ev.top),
                px(ev.height),
                px(ev.left),
                if color {
                    colorize_flag(&flags, ev.truncated)
                } else {
                    flags
                },
            ]);
        }
    }

    table
}
