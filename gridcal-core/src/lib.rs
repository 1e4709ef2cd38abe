//! Core types for gridcal.
//!
//! This crate provides everything the CLI surface builds on:
//! - `event`: the calendar event model and editor drafts
//! - `grid`: Monday-start week rows and month grids
//! - `layout`: the chip layout engine for the calendar grid
//! - `remote`: the store contract and its HTTP implementation
//! - `state`: the client session owning the event collection
//! - `todo`: the to-do subsystem

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod remote;
pub mod state;
pub mod todo;

// Re-export the working set at crate root for convenience
pub use error::{GridCalError, GridCalResult};
pub use event::{Event, EventDraft};
