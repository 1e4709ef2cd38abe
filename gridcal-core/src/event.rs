//! Calendar event types.
//!
//! Events carry plain calendar dates. There is no time-of-day and no
//! timezone in the model: the store keys everything on a `[start..end]`
//! date range plus an `all_day` flag.

use chrono::NaiveDate;

use crate::error::{GridCalError, GridCalResult};

/// A calendar event as held client-side.
///
/// `id` is assigned by the store on insert and never changes. The remaining
/// fields are replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
}

impl Event {
    /// Number of days the event covers, counting both endpoints.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether the event starts and ends on the same day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Whether `date` falls within the event's date range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The four user-editable fields of an event, as produced by the editor
/// surface for create and update operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
}

impl EventDraft {
    /// Reject inverted date ranges before they reach the store.
    pub fn validate(&self) -> GridCalResult<()> {
        if self.end < self.start {
            return Err(GridCalError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duration_counts_both_endpoints() {
        let event = Event {
            id: 1,
            title: "Trip".into(),
            start: date(2024, 6, 10),
            end: date(2024, 6, 13),
            all_day: true,
        };
        assert_eq!(event.duration_days(), 4);
        assert!(!event.is_single_day());
    }

    #[test]
    fn single_day_duration_is_one() {
        let event = Event {
            id: 1,
            title: "Dentist".into(),
            start: date(2024, 6, 10),
            end: date(2024, 6, 10),
            all_day: false,
        };
        assert_eq!(event.duration_days(), 1);
        assert!(event.is_single_day());
    }

    #[test]
    fn covers_is_inclusive() {
        let event = Event {
            id: 1,
            title: "Trip".into(),
            start: date(2024, 6, 10),
            end: date(2024, 6, 13),
            all_day: true,
        };
        assert!(event.covers(date(2024, 6, 10)));
        assert!(event.covers(date(2024, 6, 13)));
        assert!(!event.covers(date(2024, 6, 9)));
        assert!(!event.covers(date(2024, 6, 14)));
    }

    #[test]
    fn draft_validation_rejects_inverted_range() {
        let draft = EventDraft {
            title: "Backwards".into(),
            start: date(2024, 6, 13),
            end: date(2024, 6, 10),
            all_day: false,
        };
        assert!(matches!(
            draft.validate(),
            Err(GridCalError::InvertedRange { .. })
        ));
    }

    #[test]
    fn draft_validation_accepts_single_day() {
        let draft = EventDraft {
            title: "Same day".into(),
            start: date(2024, 6, 10),
            end: date(2024, 6, 10),
            all_day: false,
        };
        assert!(draft.validate().is_ok());
    }
}
