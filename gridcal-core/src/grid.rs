//! Week rows and month grids.
//!
//! The visible range of the calendar is either a single Monday-start week
//! or a month expressed as a sequence of week rows. Both are derived from
//! an anchor date and recomputed on every render.

use chrono::{Datelike, Duration, NaiveDate};

/// Seven consecutive dates, Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRow {
    start: NaiveDate,
}

impl WeekRow {
    /// The week row containing `anchor`.
    pub fn containing(anchor: NaiveDate) -> Self {
        let days_from_monday = anchor.weekday().num_days_from_monday() as i64;
        WeekRow {
            start: anchor - Duration::days(days_from_monday),
        }
    }

    /// The row's Monday.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The row's Sunday.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    /// 0-based column of `date` (Monday = 0), if it falls in this row.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.start).num_days();
        (0..7).contains(&offset).then_some(offset as usize)
    }

    /// The date at `column` (0 = Monday). Columns past Sunday walk into the
    /// next row, so callers keep `column < 7`.
    pub fn date_at(&self, column: usize) -> NaiveDate {
        self.start + Duration::days(column as i64)
    }

    /// The row's seven dates, Monday first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..7).map(move |c| start + Duration::days(c))
    }

    pub fn next(&self) -> Self {
        WeekRow {
            start: self.start + Duration::days(7),
        }
    }

    pub fn prev(&self) -> Self {
        WeekRow {
            start: self.start - Duration::days(7),
        }
    }
}

/// The week rows covering one calendar month: the first row contains the
/// 1st, the last row contains the month's final day. Edge rows spill into
/// the neighbouring months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    weeks: Vec<WeekRow>,
}

impl MonthGrid {
    /// The grid for the month containing `anchor`.
    pub fn containing(anchor: NaiveDate) -> Self {
        // Day 1 exists in every month, so the unwraps cannot fail.
        let first = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1).unwrap();
        let next_month = if anchor.month() == 12 {
            NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(anchor.year(), anchor.month() + 1, 1).unwrap()
        };
        let last = next_month - Duration::days(1);

        let mut weeks = Vec::new();
        let mut row = WeekRow::containing(first);
        loop {
            weeks.push(row);
            if row.end() >= last {
                break;
            }
            row = row.next();
        }

        MonthGrid {
            year: anchor.year(),
            month: anchor.month(),
            weeks,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// Whether `date` belongs to the grid's own month (as opposed to the
    /// spill-over days of its edge rows).
    pub fn in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_row_starts_on_monday() {
        // 2024-06-12 is a Wednesday.
        let row = WeekRow::containing(date(2024, 6, 12));
        assert_eq!(row.start(), date(2024, 6, 10));
        assert_eq!(row.end(), date(2024, 6, 16));
        assert_eq!(row.start().weekday(), Weekday::Mon);
    }

    #[test]
    fn week_row_anchored_on_monday_is_itself() {
        let row = WeekRow::containing(date(2024, 6, 10));
        assert_eq!(row.start(), date(2024, 6, 10));
    }

    #[test]
    fn week_row_anchored_on_sunday() {
        let row = WeekRow::containing(date(2024, 6, 16));
        assert_eq!(row.start(), date(2024, 6, 10));
    }

    #[test]
    fn column_of_maps_monday_to_zero() {
        let row = WeekRow::containing(date(2024, 6, 10));
        assert_eq!(row.column_of(date(2024, 6, 10)), Some(0));
        assert_eq!(row.column_of(date(2024, 6, 14)), Some(4));
        assert_eq!(row.column_of(date(2024, 6, 16)), Some(6));
        assert_eq!(row.column_of(date(2024, 6, 17)), None);
        assert_eq!(row.column_of(date(2024, 6, 9)), None);
    }

    #[test]
    fn days_yields_seven_consecutive_dates() {
        let row = WeekRow::containing(date(2024, 6, 10));
        let days: Vec<_> = row.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 6, 10));
        assert_eq!(days[6], date(2024, 6, 16));
    }

    #[test]
    fn month_grid_covers_whole_month() {
        // June 2024: the 1st is a Saturday, the 30th a Sunday.
        let grid = MonthGrid::containing(date(2024, 6, 15));
        assert_eq!(grid.weeks().len(), 5);

        let first_row = grid.weeks()[0];
        let last_row = grid.weeks()[grid.weeks().len() - 1];
        assert!(first_row.column_of(date(2024, 6, 1)).is_some());
        assert!(last_row.column_of(date(2024, 6, 30)).is_some());

        for row in grid.weeks() {
            assert_eq!(row.start().weekday(), Weekday::Mon);
        }
    }

    #[test]
    fn month_grid_spills_into_neighbours() {
        let grid = MonthGrid::containing(date(2024, 6, 15));
        // First row starts in May.
        assert_eq!(grid.weeks()[0].start(), date(2024, 5, 27));
        assert!(!grid.in_month(date(2024, 5, 27)));
        assert!(grid.in_month(date(2024, 6, 1)));
    }

    #[test]
    fn month_grid_handles_december() {
        let grid = MonthGrid::containing(date(2024, 12, 25));
        let last_row = grid.weeks()[grid.weeks().len() - 1];
        assert!(last_row.column_of(date(2024, 12, 31)).is_some());
    }

    #[test]
    fn month_grid_february_starting_on_monday() {
        // February 2021: starts on a Monday, 28 days, exactly 4 rows.
        let grid = MonthGrid::containing(date(2021, 2, 10));
        assert_eq!(grid.weeks().len(), 4);
        assert_eq!(grid.weeks()[0].start(), date(2021, 2, 1));
        assert_eq!(grid.weeks()[3].end(), date(2021, 2, 28));
    }
}
