//! Terminal rendering for the calendar grid and the to-do list.
//!
//! Chips are painted into a character canvas per week row: each day column
//! is [`COL_WIDTH`] characters wide, a chip occupies `span * COL_WIDTH - 1`
//! characters (one column of gutter between neighbours), and each stack
//! level takes one canvas line below the day-number line. Later paints win
//! where spans overlap, mirroring the flat z-order of the original surface.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use gridcal_core::event::Event;
use gridcal_core::grid::MonthGrid;
use gridcal_core::layout::{ChipKind, WeekLayout};
use gridcal_core::todo::{DueBadge, Priority, TodoItem};
use owo_colors::OwoColorize;

/// Characters per day column.
const COL_WIDTH: usize = 14;

pub fn month(
    grid: &MonthGrid,
    layouts: &[WeekLayout],
    events: &[Event],
    today: NaiveDate,
) -> String {
    let titles = title_index(events);
    let mut out = String::new();

    // Day 1 exists in every month, so the unwrap cannot fail.
    let label = NaiveDate::from_ymd_opt(grid.year(), grid.month(), 1)
        .unwrap()
        .format("%B %Y");
    out.push_str(&format!("{}\n", label.bold()));
    out.push_str(&weekday_header());
    out.push('\n');

    for layout in layouts {
        out.push_str(&month_day_line(layout, grid, today));
        out.push('\n');
        for line in chip_lines(layout, &titles) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

pub fn week(layout: &WeekLayout, events: &[Event], today: NaiveDate) -> String {
    let titles = title_index(events);
    let mut out = String::new();

    let label = format!("Week of {}", layout.row.start().format("%-d %B %Y"));
    out.push_str(&format!("{}\n", label.bold()));

    let mut day_line = String::new();
    for date in layout.row.days() {
        let padded = pad(&format!("{} {:>2}", date.format("%a"), date.day()));
        if date == today {
            day_line.push_str(&padded.bold().to_string());
        } else {
            day_line.push_str(&padded);
        }
    }
    out.push_str(&day_line);
    out.push('\n');

    for line in chip_lines(layout, &titles) {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

pub fn todo_line(item: &TodoItem, today: NaiveDate) -> String {
    if item.done {
        return format!("[x] {}", item.title).dimmed().to_string();
    }

    let priority = match item.priority {
        Priority::High => "!".red().to_string(),
        Priority::Normal => "-".yellow().to_string(),
        Priority::Low => "·".dimmed().to_string(),
    };

    let mut line = format!("[ ] {} {}", priority, item.title);
    if let (Some(badge), Some(due)) = (item.badge(today), item.due) {
        let tag = match badge {
            DueBadge::Overdue => format!("overdue ({})", due.format("%b %-d")).red().to_string(),
            DueBadge::DueToday => "due today".yellow().to_string(),
            DueBadge::DueSoon => format!("due {}", due.format("%a")).cyan().to_string(),
            DueBadge::Later => due.format("%b %-d").to_string().dimmed().to_string(),
        };
        line.push_str("  ");
        line.push_str(&tag);
    }
    line
}

fn title_index(events: &[Event]) -> HashMap<i64, &str> {
    events.iter().map(|e| (e.id, e.title.as_str())).collect()
}

fn weekday_header() -> String {
    const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let header: String = NAMES.iter().map(|n| pad(n)).collect();
    header.dimmed().to_string()
}

fn month_day_line(layout: &WeekLayout, grid: &MonthGrid, today: NaiveDate) -> String {
    let mut line = String::new();
    for date in layout.row.days() {
        let padded = pad(&format!("{:>2}", date.day()));
        if date == today {
            line.push_str(&padded.bold().to_string());
        } else if !grid.in_month(date) {
            line.push_str(&padded.dimmed().to_string());
        } else {
            line.push_str(&padded);
        }
    }
    line
}

fn pad(label: &str) -> String {
    format!("{:<width$}", label, width = COL_WIDTH)
}

fn chip_lines(layout: &WeekLayout, titles: &HashMap<i64, &str>) -> Vec<String> {
    paint_chip_rows(layout, titles)
        .into_iter()
        .map(|cells| colorize_cells(&cells))
        .collect()
}

/// Paint each stack level into a plain character row. Kept free of color
/// codes so the painting stays testable.
fn paint_chip_rows(
    layout: &WeekLayout,
    titles: &HashMap<i64, &str>,
) -> Vec<Vec<(char, Option<ChipKind>)>> {
    let width = 7 * COL_WIDTH;
    let mut rows = vec![vec![(' ', None); width]; layout.max_stack()];

    for cell in &layout.cells {
        for chip in &cell.chips {
            let left = chip.column * COL_WIDTH;
            let chip_width = chip.span * COL_WIDTH - 1;
            let title = titles.get(&chip.event_id).copied().unwrap_or("(unknown)");
            let text = chip_text(title, chip.kind, chip_width);
            for (i, ch) in text.chars().enumerate() {
                rows[chip.stack_index][left + i] = (ch, Some(chip.kind));
            }
        }
    }

    rows
}

/// A chip's text: marker-prefixed, truncated and padded to exactly `width`
/// characters.
fn chip_text(title: &str, kind: ChipKind, width: usize) -> String {
    let marker = match kind {
        ChipKind::SingleDay => '•',
        ChipKind::MultiDayStart => '▸',
        ChipKind::MultiDayContinuation => '‹',
    };
    let mut text: String = format!("{marker} {title}").chars().take(width).collect();
    let padding = width.saturating_sub(text.chars().count());
    text.push_str(&" ".repeat(padding));
    text
}

fn colorize_cells(cells: &[(char, Option<ChipKind>)]) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut style: Option<ChipKind> = None;

    for &(ch, kind) in cells {
        if kind != style {
            out.push_str(&styled(&run, style));
            run.clear();
            style = kind;
        }
        run.push(ch);
    }
    out.push_str(&styled(&run, style));

    out
}

fn styled(text: &str, kind: Option<ChipKind>) -> String {
    if text.is_empty() {
        return String::new();
    }
    match kind {
        None => text.to_string(),
        Some(ChipKind::SingleDay) => text.cyan().to_string(),
        Some(ChipKind::MultiDayStart) => text.green().to_string(),
        Some(ChipKind::MultiDayContinuation) => text.green().dimmed().to_string(),
    }
}
