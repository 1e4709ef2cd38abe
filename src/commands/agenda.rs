use anyhow::Result;
use chrono::{Duration, NaiveDate};
use gridcal_core::event::Event;
use owo_colors::OwoColorize;

pub async fn run(from: NaiveDate, days: i64, today: NaiveDate) -> Result<()> {
    let session = super::open_session(from).await?;
    let to = from + Duration::days(days.max(1) - 1);

    let mut upcoming: Vec<&Event> = session
        .events()
        .iter()
        .filter(|e| e.start <= to && e.end >= from)
        .collect();
    upcoming.sort_by_key(|e| (e.start, e.id));

    if upcoming.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by start date and print
    let mut current: Option<NaiveDate> = None;

    for event in upcoming {
        if current != Some(event.start) {
            if current.is_some() {
                println!();
            }
            println!("{}", date_label(event.start, today).bold());
            current = Some(event.start);
        }

        let extent = if !event.is_single_day() {
            format!("through {}", event.end.format("%b %-d"))
        } else if event.all_day {
            "all-day".to_string()
        } else {
            String::new()
        };
        let id_tag = format!("#{}", event.id);
        println!("  {} {} {}", event.title, extent.dimmed(), id_tag.dimmed());
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow",
/// "Wed Jun 12")
fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn labels_relative_days() {
        let today = date(2024, 6, 10);
        assert_eq!(date_label(today, today), "Today");
        assert_eq!(date_label(date(2024, 6, 11), today), "Tomorrow");
        assert_eq!(date_label(date(2024, 6, 12), today), "Wed Jun 12");
        assert_eq!(date_label(date(2024, 6, 9), today), "Sun Jun 9");
    }
}
