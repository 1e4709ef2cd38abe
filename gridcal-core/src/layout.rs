//! The event layout engine.
//!
//! Pure date arithmetic from `(visible range, events)` to a per-day-cell
//! rendering plan: which chips each cell shows, how many columns each chip
//! spans, and how chips stack within a cell. Chips are derived values,
//! recomputed on every render and never stored.
//!
//! Classification, per date `d` in a row `[monday..sunday]`:
//! - *single-day*: the event starts and ends on `d`;
//! - *multi-day start*: the event starts on `d` and runs longer than a day;
//! - *continuation*: the event began in an earlier row and is still active
//!   on the row's Monday. Continuations are emitted on the Monday column
//!   only; the chip's span covers the rest of the row, so mid-row days of
//!   a running event produce no chip of their own.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::event::Event;
use crate::grid::{MonthGrid, WeekRow};

/// How an event shows up on a particular day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    /// The event starts and ends on this day.
    SingleDay,
    /// First day of an event spanning more than one day.
    MultiDayStart,
    /// An event resuming from an earlier row. Only ever on column 0.
    MultiDayContinuation,
}

/// One event's rendered presence on one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip {
    pub event_id: i64,
    pub kind: ChipKind,
    /// 0-based column within the row (Monday = 0).
    pub column: usize,
    /// Day-columns the chip occupies. At least 1, never past Sunday.
    pub span: usize,
    /// Vertical slot within the day cell: single-day chips first, then
    /// multi-day starts, then continuations.
    pub stack_index: usize,
}

/// A single date plus its chips, in stacking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub chips: Vec<Chip>,
}

/// The rendering plan for one week row. `cells` always holds seven entries,
/// Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekLayout {
    pub row: WeekRow,
    pub cells: Vec<DayCell>,
}

impl WeekLayout {
    /// The deepest chip stack in any of the row's cells.
    pub fn max_stack(&self) -> usize {
        self.cells.iter().map(|c| c.chips.len()).max().unwrap_or(0)
    }
}

/// Events indexed once per layout pass, so per-cell classification does
/// not re-scan the whole collection.
struct EventIndex<'a> {
    /// Valid events keyed by start date, each bucket in (start, id) order.
    by_start: HashMap<NaiveDate, Vec<&'a Event>>,
    /// All valid events in (start, id) order, for continuation scans.
    ordered: Vec<&'a Event>,
}

impl<'a> EventIndex<'a> {
    fn build(events: &'a [Event]) -> Self {
        // Inverted ranges are undefined input; they never reach a cell.
        let mut ordered: Vec<&Event> = events.iter().filter(|e| e.start <= e.end).collect();
        ordered.sort_by_key(|e| (e.start, e.id));

        let mut by_start: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();
        for &event in &ordered {
            by_start.entry(event.start).or_default().push(event);
        }

        EventIndex { by_start, ordered }
    }

    fn starting_on(&self, date: NaiveDate) -> &[&'a Event] {
        self.by_start.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Events that began before `row_start` and are still active on it.
    fn continuing_into(&self, row_start: NaiveDate) -> impl Iterator<Item = &'a Event> {
        self.ordered
            .iter()
            .copied()
            .filter(move |e| e.start < row_start && e.end >= row_start)
    }
}

/// Lay out one week row.
pub fn layout_week(row: WeekRow, events: &[Event]) -> WeekLayout {
    layout_row(row, &EventIndex::build(events))
}

/// Lay out every week row of a month grid. The event index is built once
/// for the whole pass.
pub fn layout_month(grid: &MonthGrid, events: &[Event]) -> Vec<WeekLayout> {
    let index = EventIndex::build(events);
    grid.weeks().iter().map(|row| layout_row(*row, &index)).collect()
}

fn layout_row(row: WeekRow, index: &EventIndex) -> WeekLayout {
    let cells = row
        .days()
        .enumerate()
        .map(|(column, date)| {
            let mut chips = Vec::new();

            for event in index.starting_on(date) {
                if event.is_single_day() {
                    chips.push(Chip {
                        event_id: event.id,
                        kind: ChipKind::SingleDay,
                        column,
                        span: 1,
                        stack_index: 0,
                    });
                }
            }

            for event in index.starting_on(date) {
                if !event.is_single_day() {
                    // Clip to the columns left in the row.
                    let span = (event.duration_days() as usize).min(7 - column);
                    chips.push(Chip {
                        event_id: event.id,
                        kind: ChipKind::MultiDayStart,
                        column,
                        span,
                        stack_index: 0,
                    });
                }
            }

            if column == 0 {
                for event in index.continuing_into(date) {
                    let remaining = (event.end - date).num_days() as usize + 1;
                    chips.push(Chip {
                        event_id: event.id,
                        kind: ChipKind::MultiDayContinuation,
                        column,
                        span: remaining.min(7),
                        stack_index: 0,
                    });
                }
            }

            for (slot, chip) in chips.iter_mut().enumerate() {
                chip.stack_index = slot;
            }

            DayCell { date, chips }
        })
        .collect();

    WeekLayout { row, cells }
}
