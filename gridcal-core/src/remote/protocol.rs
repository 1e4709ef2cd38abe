//! Wire types for the hosted event store.
//!
//! The store speaks JSON over REST against one logical table, `calendar`.
//! Dates cross the wire as plain `YYYY-MM-DD` strings; conversion into
//! domain types happens here so a malformed row surfaces as a typed error
//! instead of a half-parsed event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GridCalError, GridCalResult};
use crate::event::{Event, EventDraft};

/// The one logical table the client touches.
pub const EVENTS_TABLE: &str = "calendar";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A row of the `calendar` table, as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub title: String,
    pub start: String,
    pub end: String,
    pub all_day: bool,
}

impl EventRecord {
    pub fn into_event(self) -> GridCalResult<Event> {
        Ok(Event {
            id: self.id,
            title: self.title,
            start: parse_wire_date(&self.start)?,
            end: parse_wire_date(&self.end)?,
            all_day: self.all_day,
        })
    }
}

/// The four mutable fields, as sent on insert and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    pub title: String,
    pub start: String,
    pub end: String,
    pub all_day: bool,
}

impl From<&EventDraft> for EventPayload {
    fn from(draft: &EventDraft) -> Self {
        EventPayload {
            title: draft.title.clone(),
            start: draft.start.format(DATE_FORMAT).to_string(),
            end: draft.end.format(DATE_FORMAT).to_string(),
            all_day: draft.all_day,
        }
    }
}

/// Error body returned by the store on failed requests.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn parse_wire_date(s: &str) -> GridCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| GridCalError::DateParse(s.to_string()))
}
