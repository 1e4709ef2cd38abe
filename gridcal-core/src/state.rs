//! Client session state.
//!
//! The session owns the in-memory event collection. View code reads it and
//! mutates only through the methods here, so there is a single writer: each
//! mutation awaits one store round trip and touches the collection only
//! after the store has accepted the change. A failed call is logged and
//! abandoned, leaving the collection exactly as it was; there is no retry
//! and no rollback machinery.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GridCalError, GridCalResult};
use crate::event::{Event, EventDraft};
use crate::grid::{MonthGrid, WeekRow};
use crate::remote::EventStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

/// What the editor surface is working on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorTarget {
    /// Creating a new event on the selected date.
    Create { date: NaiveDate },
    /// Editing an existing event.
    Edit { event: Event },
}

/// The single edit surface: one open slot and one selection, so two events
/// can never be edited concurrently.
#[derive(Debug, Default)]
pub struct Editor {
    target: Option<EditorTarget>,
}

impl Editor {
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&EditorTarget> {
        self.target.as_ref()
    }

    /// Open the surface. Returns false (and changes nothing) if it is
    /// already open.
    pub fn open(&mut self, target: EditorTarget) -> bool {
        if self.target.is_some() {
            return false;
        }
        self.target = Some(target);
        true
    }

    pub fn close(&mut self) {
        self.target = None;
    }
}

/// What the editor hands back when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Create(EventDraft),
    Update(i64, EventDraft),
    Delete(i64),
    Cancel,
}

pub struct Session<S: EventStore> {
    store: S,
    events: Vec<Event>,
    pub anchor: NaiveDate,
    pub view: ViewMode,
    pub editor: Editor,
}

impl<S: EventStore> Session<S> {
    pub fn new(store: S, anchor: NaiveDate) -> Self {
        Session {
            store,
            events: Vec::new(),
            anchor,
            view: ViewMode::default(),
            editor: Editor::default(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Replace the collection with a full re-fetch from the store.
    pub async fn refresh(&mut self) -> GridCalResult<()> {
        match self.store.list_all().await {
            Ok(events) => {
                debug!(count = events.len(), "refreshed event collection");
                self.events = events;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "event fetch failed");
                Err(e)
            }
        }
    }

    pub async fn create(&mut self, draft: EventDraft) -> GridCalResult<Event> {
        draft.validate()?;
        match self.store.create(&draft).await {
            Ok(event) => {
                self.events.push(event.clone());
                Ok(event)
            }
            Err(e) => {
                warn!(error = %e, "create abandoned, collection unchanged");
                Err(e)
            }
        }
    }

    pub async fn update(&mut self, id: i64, draft: EventDraft) -> GridCalResult<Event> {
        draft.validate()?;
        if self.event(id).is_none() {
            return Err(GridCalError::EventNotFound(id));
        }
        match self.store.update(id, &draft).await {
            Ok(updated) => {
                if let Some(slot) = self.events.iter_mut().find(|e| e.id == id) {
                    *slot = updated.clone();
                }
                Ok(updated)
            }
            Err(e) => {
                warn!(error = %e, "update abandoned, collection unchanged");
                Err(e)
            }
        }
    }

    pub async fn delete(&mut self, id: i64) -> GridCalResult<()> {
        match self.store.delete(id).await {
            Ok(()) => {
                self.events.retain(|e| e.id != id);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "delete abandoned, collection unchanged");
                Err(e)
            }
        }
    }

    /// Dispatch an editor outcome and close the surface.
    pub async fn apply_outcome(&mut self, outcome: EditorOutcome) -> GridCalResult<Option<Event>> {
        let result = match outcome {
            EditorOutcome::Create(draft) => self.create(draft).await.map(Some),
            EditorOutcome::Update(id, draft) => self.update(id, draft).await.map(Some),
            EditorOutcome::Delete(id) => self.delete(id).await.map(|_| None),
            EditorOutcome::Cancel => Ok(None),
        };
        self.editor.close();
        result
    }

    // --- Navigation ---

    pub fn go_today(&mut self, today: NaiveDate) {
        self.anchor = today;
    }

    pub fn go_next(&mut self) {
        self.anchor = match self.view {
            ViewMode::Month => step_month(self.anchor, 1),
            ViewMode::Week => self.anchor + Duration::days(7),
        };
    }

    pub fn go_prev(&mut self) {
        self.anchor = match self.view {
            ViewMode::Month => step_month(self.anchor, -1),
            ViewMode::Week => self.anchor - Duration::days(7),
        };
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::containing(self.anchor)
    }

    pub fn week_row(&self) -> WeekRow {
        WeekRow::containing(self.anchor)
    }
}

fn step_month(anchor: NaiveDate, delta: i32) -> NaiveDate {
    let stepped = if delta >= 0 {
        anchor.checked_add_months(Months::new(delta as u32))
    } else {
        anchor.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    stepped.unwrap_or(anchor)
}
