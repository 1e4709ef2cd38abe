//! Remote event store access.
//!
//! The store is an opaque external collaborator: one logical table reached
//! through a four-call contract (list, insert, update, delete). [`EventStore`]
//! is the injectable capability; [`HttpStore`] is the production
//! implementation, and tests substitute an in-memory double.

mod http;
pub mod protocol;

pub use http::HttpStore;

use async_trait::async_trait;

use crate::error::GridCalResult;
use crate::event::{Event, EventDraft};

#[async_trait]
pub trait EventStore {
    /// Fetch the full event set. No pagination and no range filtering: the
    /// whole table is loaded regardless of the visible range.
    async fn list_all(&self) -> GridCalResult<Vec<Event>>;

    /// Insert a new event. The store assigns the id and returns the row.
    async fn create(&self, draft: &EventDraft) -> GridCalResult<Event>;

    /// Replace the four mutable fields of the event with this id.
    async fn update(&self, id: i64, draft: &EventDraft) -> GridCalResult<Event>;

    /// Remove the event with this id.
    async fn delete(&self, id: i64) -> GridCalResult<()>;
}
