use anyhow::Result;
use chrono::{Duration, NaiveDate};
use gridcal_core::todo::{Priority, TodoList};
use owo_colors::OwoColorize;

use crate::render;

/// The to-do list has no store table yet, so this renders a preview list
/// demonstrating priorities and due badges.
pub fn run(today: NaiveDate) -> Result<()> {
    let mut list = TodoList::new();
    list.add(
        "File expense report",
        Priority::High,
        Some(today - Duration::days(2)),
    );
    list.add("Review launch checklist", Priority::High, Some(today));
    list.add(
        "Book dentist appointment",
        Priority::Normal,
        Some(today + Duration::days(2)),
    );
    list.add(
        "Plan summer trip",
        Priority::Normal,
        Some(today + Duration::days(12)),
    );
    list.add("Water the plants", Priority::Low, None);
    let sent = list.add(
        "Send meeting notes",
        Priority::Normal,
        Some(today - Duration::days(1)),
    );
    list.toggle_done(sent);

    println!("{}", "To-do".bold());
    for item in list.items() {
        println!("  {}", render::todo_line(item, today));
    }
    println!();
    println!(
        "{}",
        "(preview: the to-do list is not yet synced to the store)".dimmed()
    );

    Ok(())
}
