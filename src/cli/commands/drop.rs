use crate::cli::commands::events_path;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::drag::apply_drop;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::event::{find_event, load_events, save_events};
use crate::ui::messages::{kv, success};
use crate::utils::px;

/// Handle the `drop` command: preview (and optionally apply) a move.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Drop {
        id,
        x,
        top,
        file,
        week,
        container,
        apply,
    } = cmd
    {
        let path = events_path(file, cfg);
        let mut events = load_events(&path)?;
        let week_of = Core::resolve_week(week.as_deref(), 0)?;

        let event = find_event(&events, *id)?;
        let preview = Core::drop(cfg, event, week_of, *x, *top, *container)?;

        kv("event", &event.title);
        kv("badge", preview.label());
        kv("snapped top", px(preview.top));
        kv("from", format!("{} -> {}", event.start, event.end));
        kv("to", format!("{} -> {}", preview.start, preview.end));

        if *apply {
            let moved = apply_drop(event, &preview);
            for e in events.iter_mut().filter(|e| e.id == Some(*id)) {
                *e = moved.clone();
            }
            save_events(&path, &events)?;
            success(format!("Event {} rescheduled in {}", id, path.display()));
        }
    }
    Ok(())
}
