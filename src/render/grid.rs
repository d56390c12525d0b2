//! Terminal rendering of a week: one text row per slice of an hour.

use crate::core::layout::{CrossMidnight, DayAxis, PlacedEvent, WeekGrid, WeekLayout};
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::time_window::TimeWindow;
use crate::utils::colors::{colorize_flag, paint_event};
use crate::utils::date::{day_header, today};
use crate::utils::formatting::{bold, pad_right, truncate_to_width};
use chrono::NaiveDate;

const TIME_COL: usize = 6;

pub struct GridStyle {
    pub rows_per_hour: usize,
    pub column_width: usize,
    pub color: bool,
}

#[derive(Clone)]
struct Cell {
    text: String,
    color: String,
}

/// Lay the week out at text resolution and render it.
///
/// The column height is the number of text rows, so the same Day Axis
/// math places events on rows instead of pixels.
pub fn render_week(
    events: &[Event],
    week_of: NaiveDate,
    window: TimeWindow,
    policy: CrossMidnight,
    style: &GridStyle,
) -> AppResult<String> {
    let rows = window.hours_count() as usize * style.rows_per_hour;
    let axis = DayAxis::new(window, rows as f64)?;
    let grid = WeekGrid::new(axis, (7 * style.column_width) as f64, policy);
    let layout = grid.compose(week_of, events);

    Ok(render_layout(&layout, window, rows, style))
}

fn block_cells(ev: &PlacedEvent, rows: usize, width: usize) -> (usize, Vec<Cell>) {
    let first = (ev.top.floor() as usize).min(rows.saturating_sub(1));
    let last = ((ev.top + ev.height).ceil() as usize).clamp(first + 1, rows);

    let label = if ev.continued {
        format!("> {}", ev.title)
    } else {
        ev.title.clone()
    };
    let lines: Vec<String> = textwrap::wrap(&label, width.max(1))
        .into_iter()
        .map(|l| l.into_owned())
        .collect();

    let n = last - first;
    let cells = (0..n)
        .map(|i| {
            let mut text = lines.get(i).cloned().unwrap_or_default();
            if i == n - 1 && n < lines.len() {
                // title did not fit in the block
                text = truncate_to_width(&format!("{text} {}", lines[i + 1..].join(" ")), width);
            }
            if i == n - 1 && ev.truncated {
                text = format!("{} v", truncate_to_width(&text, width.saturating_sub(2)));
            }
            Cell {
                text,
                color: ev.color.clone(),
            }
        })
        .collect();

    (first, cells)
}

fn render_layout(layout: &WeekLayout, window: TimeWindow, rows: usize, style: &GridStyle) -> String {
    let width = style.column_width;
    let inner = width.saturating_sub(1);

    let mut matrix: Vec<Vec<Option<Cell>>> = vec![vec![None; rows]; 7];
    for col in &layout.columns {
        // collapsed below the window, nothing to draw
        for ev in col.events.iter().filter(|e| e.height > 0.0) {
            let (first, cells) = block_cells(ev, rows, inner);
            for (i, cell) in cells.into_iter().enumerate() {
                if let Some(slot) = matrix[col.day_index].get_mut(first + i) {
                    *slot = Some(cell);
                }
            }
        }
    }

    let mut out = String::new();
    if style.color {
        out.push_str(&bold(&layout.range_text));
    } else {
        out.push_str(&layout.range_text);
    }
    out.push('\n');

    // Header
    out.push_str(&" ".repeat(TIME_COL));
    let now = today();
    for col in &layout.columns {
        let title = format!("{} {}", &col.name[..3], day_header(col.date));
        let cell = pad_right(&truncate_to_width(&title, inner), inner);
        out.push('|');
        if style.color {
            out.push_str(&colorize_flag(&cell, col.date == now));
        } else {
            out.push_str(&cell);
        }
    }
    out.push_str("|\n");

    for r in 0..rows {
        if r % style.rows_per_hour == 0 {
            let hour = window.start_hour() as usize + r / style.rows_per_hour;
            out.push_str(&pad_right(&format!("{hour:02}:00"), TIME_COL));
        } else {
            out.push_str(&" ".repeat(TIME_COL));
        }

        for day in &matrix {
            out.push('|');
            match &day[r] {
                Some(cell) => {
                    let padded = pad_right(&truncate_to_width(&cell.text, inner), inner);
                    if style.color {
                        out.push_str(&paint_event(&cell.color, &padded));
                    } else {
                        out.push_str(&padded);
                    }
                }
                None => out.push_str(&" ".repeat(inner)),
            }
        }
        out.push_str("|\n");
    }

    out
}
