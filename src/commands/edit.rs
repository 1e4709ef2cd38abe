use anyhow::Result;
use chrono::NaiveDate;
use gridcal_core::state::EditorTarget;
use owo_colors::OwoColorize;

use crate::editor;

pub async fn run(id: i64, today: NaiveDate) -> Result<()> {
    let mut session = super::open_session(today).await?;

    let event = session
        .event(id)
        .ok_or_else(|| anyhow::anyhow!("No event with id {id}"))?
        .clone();

    if !session.editor.open(EditorTarget::Edit {
        event: event.clone(),
    }) {
        anyhow::bail!("Another edit is already in progress");
    }

    println!("{}", format!("Editing #{}: {}", event.id, event.title).bold());
    let outcome = editor::edit_outcome(&event)?;

    match session.apply_outcome(outcome).await? {
        Some(updated) => println!("{}", format!("Saved: {}", updated.title).green()),
        // Delete and cancel both come back empty; the collection tells
        // them apart.
        None => match session.event(id) {
            Some(_) => println!("{}", "No changes".dimmed()),
            None => println!("{}", format!("Deleted: {}", event.title).red()),
        },
    }

    Ok(())
}
