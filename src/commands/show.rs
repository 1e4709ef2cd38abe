use anyhow::Result;
use chrono::NaiveDate;
use gridcal_core::layout::{layout_month, layout_week};
use gridcal_core::state::ViewMode;

use crate::render;

/// Render the month grid or week row. With `view` unset, the configured
/// default view is used.
pub async fn run(view: Option<ViewMode>, anchor: NaiveDate, today: NaiveDate) -> Result<()> {
    let mut session = super::open_session(anchor).await?;
    if let Some(view) = view {
        session.view = view;
    }

    match session.view {
        ViewMode::Month => {
            let grid = session.month_grid();
            let layouts = layout_month(&grid, session.events());
            print!("{}", render::month(&grid, &layouts, session.events(), today));
        }
        ViewMode::Week => {
            let layout = layout_week(session.week_row(), session.events());
            print!("{}", render::week(&layout, session.events(), today));
        }
    }

    Ok(())
}
