mod common;
use chrono::NaiveDate;
use common::{SAMPLE_EVENTS, ev};
use dayaxis::core::layout::CrossMidnight;
use dayaxis::models::event::parse_events;
use dayaxis::models::time_window::TimeWindow;
use dayaxis::render::{GridStyle, render_week};
use dayaxis::utils::colors::{paint_event, parse_hex_color};
use dayaxis::utils::date::today;
use dayaxis::utils::formatting::{truncate_to_width, visible_width};
use dayaxis::utils::px;
use dayaxis::utils::table::{Column, Table};

fn plain(rows_per_hour: usize) -> GridStyle {
    GridStyle {
        rows_per_hour,
        column_width: 14,
        color: false,
    }
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

#[test]
fn test_grid_has_one_line_per_row() {
    let events = parse_events(SAMPLE_EVENTS).unwrap();
    let out = render_week(
        &events,
        monday(),
        TimeWindow::default(),
        CrossMidnight::Truncate,
        &plain(2),
    )
    .unwrap();

    let lines: Vec<&str> = out.lines().collect();
    // range + header + 18 hours * 2 rows
    assert_eq!(lines.len(), 2 + 36);
    assert_eq!(lines[0], "Jun 2 - Jun 8");
    assert!(lines[1].contains("Mon 2nd June"));
    assert!(lines[1].contains("Sun 8th June"));
    assert!(lines[2].starts_with("06:00"));
    assert!(lines[8].starts_with("09:00"));
    assert!(lines[8].contains("Standup"));
}

#[test]
fn test_grid_marks_truncated_and_continued() {
    let events = vec![ev("2025-06-02 22:00", "2025-06-03 08:00")];

    let out = render_week(
        &events,
        monday(),
        TimeWindow::default(),
        CrossMidnight::Truncate,
        &plain(1),
    )
    .unwrap();
    let last = out.lines().last().unwrap();
    assert!(last.starts_with("23:00"));
    assert!(last.contains(" v"));

    let out = render_week(
        &events,
        monday(),
        TimeWindow::default(),
        CrossMidnight::Split,
        &plain(1),
    )
    .unwrap();
    let first_row = out.lines().nth(2).unwrap();
    assert!(first_row.contains("> event"));
}

#[test]
fn test_colored_grid_keeps_layout_width() {
    let events = vec![ev("2025-06-02 09:00", "2025-06-02 10:00")];
    let style = GridStyle {
        color: true,
        ..plain(1)
    };
    let out = render_week(&events, monday(), TimeWindow::default(), CrossMidnight::Truncate, &style)
        .unwrap();

    let widths: Vec<usize> = out.lines().skip(1).map(visible_width).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_hex_colors() {
    assert_eq!(parse_hex_color("#3182CE").unwrap(), (0x31, 0x82, 0xCE));
    assert_eq!(parse_hex_color("#ff0000").unwrap(), (255, 0, 0));
    assert!(parse_hex_color("red").is_err());
    assert!(parse_hex_color("#12345").is_err());

    // a bad color still paints with the default
    assert_eq!(visible_width(&paint_event("nope", "abc")), 3);
}

#[test]
fn test_formatting_helpers() {
    assert_eq!(px(120.0), "120");
    assert_eq!(px(39.888), "39.9");
    assert_eq!(px(0.04), "0");
    assert_eq!(truncate_to_width("Night shift", 6), "Night…");
    assert_eq!(truncate_to_width("Dinner", 6), "Dinner");
}

#[test]
fn test_table_widens_columns() {
    let mut table = Table::new(vec![Column::left("Day", 3), Column::right("Top", 3)]);
    table.add_row(vec!["Wednesday".into(), "1020".into()]);
    let out = table.render();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Day       Top  ");
    assert_eq!(lines[1], "--------- ---- ");
    assert_eq!(lines[2], "Wednesday 1020 ");
}

#[test]
fn test_plain_grid_has_no_escapes() {
    // the current week highlights today's header when colors are on
    let out = render_week(&[], today(), TimeWindow::default(), CrossMidnight::Truncate, &plain(1))
        .unwrap();
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn test_event_after_window_is_not_drawn() {
    let events = vec![ev("2025-06-02 22:00", "2025-06-02 23:00")];
    let out = render_week(
        &events,
        monday(),
        TimeWindow::new(6, 20).unwrap(),
        CrossMidnight::Truncate,
        &plain(1),
    )
    .unwrap();

    assert_eq!(out.lines().count(), 2 + 15);
    assert!(!out.contains("event"));
}
