//! The interactive editor surface.
//!
//! Prompts fill in whatever the command line left out and hand back a
//! single outcome: create, update, delete, or close without change.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use gridcal_core::event::{Event, EventDraft};
use gridcal_core::state::EditorOutcome;
use owo_colors::OwoColorize;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Gather a draft for a new event on `selected`.
pub fn create_outcome(
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    all_day: bool,
    selected: NaiveDate,
) -> Result<EditorOutcome> {
    let interactive = title.is_none();

    let title = match title {
        Some(t) => t,
        None => Input::<String>::new().with_prompt("  Title").interact_text()?,
    };

    let start = match start {
        Some(s) => parse_date(&s)?,
        None if interactive => prompt_date("  Start", selected)?,
        None => selected,
    };

    let end = match end {
        Some(s) => {
            let end = parse_date(&s)?;
            if end < start {
                anyhow::bail!("End date {} is before start date {}", end, start);
            }
            end
        }
        None if interactive => prompt_end_date("  End", start, start)?,
        None => start,
    };

    let all_day = if all_day {
        true
    } else if interactive {
        Confirm::new()
            .with_prompt("  All day?")
            .default(false)
            .interact()?
    } else {
        false
    };

    Ok(EditorOutcome::Create(EventDraft {
        title,
        start,
        end,
        all_day,
    }))
}

/// Walk an existing event's fields, then choose what to do with it.
pub fn edit_outcome(event: &Event) -> Result<EditorOutcome> {
    let title = Input::<String>::new()
        .with_prompt("  Title")
        .default(event.title.clone())
        .interact_text()?;

    let start = prompt_date("  Start", event.start)?;
    let end = prompt_end_date("  End", start, event.end.max(start))?;

    let all_day = Confirm::new()
        .with_prompt("  All day?")
        .default(event.all_day)
        .interact()?;

    let action = Select::new()
        .with_prompt("  Apply")
        .items(&["Save changes", "Delete event", "Cancel"])
        .default(0)
        .interact()?;

    Ok(match action {
        0 => EditorOutcome::Update(
            event.id,
            EventDraft {
                title,
                start,
                end,
                all_day,
            },
        ),
        1 => EditorOutcome::Delete(event.id),
        _ => EditorOutcome::Cancel,
    })
}

/// Prompt for a date with retry on parse errors.
fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.format(DATE_FORMAT).to_string())
            .interact_text()?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

/// Prompt for an end date, rejecting anything before `start`.
fn prompt_end_date(prompt: &str, start: NaiveDate, default: NaiveDate) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.format(DATE_FORMAT).to_string())
            .interact_text()?;
        match parse_date(&input) {
            Ok(end) if end < start => {
                eprintln!(
                    "  {}",
                    format!("End date {end} is before start date {start}").red()
                );
            }
            Ok(end) => return Ok(end),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_date("2024-06-10").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_date("10/06/2024").is_err());
        assert!(parse_date("June 10").is_err());
        assert!(parse_date("2024-6-10 12:00").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }
}
