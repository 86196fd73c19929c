//! Review calendar: which days have reviews and how a month lays out in weeks.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::tracker::ReviewLog;

/// Distinct calendar days carrying at least one review.
pub fn review_dates<'a, I>(logs: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a ReviewLog>,
{
    logs.into_iter().map(|log| log.review_date.date()).collect()
}

/// First and last day of a calendar month, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl MonthRange {
    /// Returns the range of the given month, or `None` for an invalid month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }?
        .pred_opt()?;
        Some(Self { first, last })
    }

    /// Returns the month containing `date`.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Iterates every day of the month.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first.iter_days().take_while(move |day| *day <= self.last)
    }
}

/// Presence map restricted to one month.
pub fn review_dates_in_month(dates: &BTreeSet<NaiveDate>, month: MonthRange) -> BTreeSet<NaiveDate> {
    dates.range(month.first..=month.last).copied().collect()
}

/// Number of review logs dated within the month.
pub fn month_review_count<'a, I>(logs: I, month: MonthRange) -> usize
where
    I: IntoIterator<Item = &'a ReviewLog>,
{
    logs.into_iter()
        .filter(|log| month.contains(log.review_date.date()))
        .count()
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub has_review: bool,
    pub is_today: bool,
}

/// A month laid out in Sunday-first, 7-column weeks.
///
/// `None` cells pad the first week before day 1 and the last week after the
/// final day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub month: MonthRange,
    pub leading_blanks: usize,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
    pub review_count: usize,
}

impl MonthView {
    /// Builds the grid for `month`, marking the days that have a review.
    pub fn build<'a, I>(month: MonthRange, logs: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a ReviewLog>,
    {
        let logs: Vec<&ReviewLog> = logs.into_iter().collect();
        let dates = review_dates(logs.iter().copied());
        let leading_blanks = month.first.weekday().num_days_from_sunday() as usize;

        let cells: Vec<Option<CalendarDay>> = std::iter::repeat_n(None, leading_blanks)
            .chain(month.days().map(|date| {
                Some(CalendarDay {
                    date,
                    has_review: dates.contains(&date),
                    is_today: date == today,
                })
            }))
            .collect();

        let weeks = cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect();

        Self {
            month,
            leading_blanks,
            weeks,
            review_count: month_review_count(logs, month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn log(id: i64, y: i32, m: u32, d: u32, hour: u32) -> ReviewLog {
        ReviewLog::new(id, 1, "review", 3, date(y, m, d).and_hms_opt(hour, 30, 0).unwrap())
    }

    #[test]
    fn test_review_dates_drop_time_and_dedupe() {
        let logs = vec![log(1, 2025, 3, 4, 8), log(2, 2025, 3, 4, 22), log(3, 2025, 3, 5, 9)];
        let dates = review_dates(&logs);
        assert_eq!(dates.len(), 2);
        assert!(dates.contains(&date(2025, 3, 4)));
        assert!(dates.contains(&date(2025, 3, 5)));
    }

    #[test]
    fn test_month_range_handles_december_and_leap_years() {
        let dec = MonthRange::new(2024, 12).unwrap();
        assert_eq!(dec.last, date(2024, 12, 31));
        let feb = MonthRange::new(2024, 2).unwrap();
        assert_eq!(feb.last, date(2024, 2, 29));
        assert!(MonthRange::new(2024, 13).is_none());
    }

    #[test]
    fn test_last_day_of_month_stays_in_its_month() {
        let logs = vec![log(1, 2025, 1, 31, 23), log(2, 2025, 2, 1, 0)];
        let dates = review_dates(&logs);

        let jan = review_dates_in_month(&dates, MonthRange::new(2025, 1).unwrap());
        let feb = review_dates_in_month(&dates, MonthRange::new(2025, 2).unwrap());

        assert_eq!(jan.into_iter().collect::<Vec<_>>(), vec![date(2025, 1, 31)]);
        assert_eq!(feb.into_iter().collect::<Vec<_>>(), vec![date(2025, 2, 1)]);
    }

    #[test]
    fn test_month_review_count_is_inclusive() {
        let logs = vec![
            log(1, 2025, 3, 1, 0),
            log(2, 2025, 3, 31, 23),
            log(3, 2025, 3, 31, 8),
            log(4, 2025, 4, 1, 0),
            log(5, 2025, 2, 28, 23),
        ];
        assert_eq!(month_review_count(&logs, MonthRange::new(2025, 3).unwrap()), 3);
    }

    #[test]
    fn test_month_view_layout() {
        // 2025-03-01 is a Saturday.
        let logs = vec![log(1, 2025, 3, 4, 8), log(2, 2025, 4, 2, 8)];
        let view = MonthView::build(MonthRange::new(2025, 3).unwrap(), &logs, date(2025, 3, 10));

        assert_eq!(view.leading_blanks, 6);
        assert_eq!(view.weeks.len(), 6);
        assert!(view.weeks[0][..6].iter().all(Option::is_none));
        assert_eq!(view.weeks[0][6].unwrap().date, date(2025, 3, 1));
        assert_eq!(view.review_count, 1);

        let days: Vec<CalendarDay> = view.weeks.iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 31);
        assert!(days.iter().find(|d| d.date == date(2025, 3, 4)).unwrap().has_review);
        assert_eq!(days.iter().filter(|d| d.has_review).count(), 1);
        assert_eq!(days.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_month_view_starting_on_sunday_has_no_blanks() {
        // 2025-06-01 is a Sunday.
        let view = MonthView::build(
            MonthRange::new(2025, 6).unwrap(),
            &Vec::<ReviewLog>::new(),
            date(2025, 1, 1),
        );
        assert_eq!(view.leading_blanks, 0);
        assert_eq!(view.weeks.len(), 5);
        assert_eq!(view.review_count, 0);
    }
}
