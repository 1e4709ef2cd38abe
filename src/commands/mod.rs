pub mod agenda;
pub mod edit;
pub mod new;
pub mod rm;
pub mod show;
pub mod todo;

use anyhow::Result;
use chrono::NaiveDate;
use gridcal_core::config::Config;
use gridcal_core::remote::HttpStore;
use gridcal_core::state::Session;
use tracing::debug;

/// Build a session against the configured store, with the full event set
/// loaded.
pub async fn open_session(anchor: NaiveDate) -> Result<Session<HttpStore>> {
    let config = Config::load()?;
    debug!(store_url = %config.store_url, "using event store");
    let store = HttpStore::from_config(&config);

    let mut session = Session::new(store, anchor);
    session.view = config.default_view;
    session.refresh().await?;

    Ok(session)
}
