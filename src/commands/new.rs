use anyhow::Result;
use chrono::NaiveDate;
use gridcal_core::state::EditorTarget;
use owo_colors::OwoColorize;

use crate::editor;

pub async fn run(
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    all_day: bool,
    today: NaiveDate,
) -> Result<()> {
    let mut session = super::open_session(today).await?;

    let selected = match &start {
        Some(s) => editor::parse_date(s)?,
        None => today,
    };
    if !session.editor.open(EditorTarget::Create { date: selected }) {
        anyhow::bail!("Another edit is already in progress");
    }

    let outcome = editor::create_outcome(title, start, end, all_day, selected)?;
    match session.apply_outcome(outcome).await? {
        Some(event) => println!(
            "{}",
            format!("Created: {} (#{})", event.title, event.id).green()
        ),
        None => println!("{}", "Cancelled".dimmed()),
    }

    Ok(())
}
