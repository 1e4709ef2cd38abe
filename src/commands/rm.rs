use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Confirm;
use gridcal_core::state::{EditorOutcome, EditorTarget};
use owo_colors::OwoColorize;

pub async fn run(id: i64, yes: bool, today: NaiveDate) -> Result<()> {
    let mut session = super::open_session(today).await?;

    let event = session
        .event(id)
        .ok_or_else(|| anyhow::anyhow!("No event with id {id}"))?
        .clone();

    if !yes {
        let range = if event.is_single_day() {
            event.start.to_string()
        } else {
            format!("{} to {}", event.start, event.end)
        };
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete \"{}\" ({range})?", event.title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    session.editor.open(EditorTarget::Edit {
        event: event.clone(),
    });
    session.apply_outcome(EditorOutcome::Delete(id)).await?;
    println!("{}", format!("Deleted: {}", event.title).red());

    Ok(())
}
