//! Colombian public holidays.
//!
//! Colombia observes eighteen public holidays. Six fall on fixed dates, seven
//! move to the following Monday under Law 51 of 1983 (the "Emiliani law"),
//! and five hang off Easter Sunday. Holidays are computed per year on first
//! use and cached.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use dashmap::DashMap;

use jornada_core::holiday::HolidayCalendar;

/// A named holiday on its observed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
}

/// Observed on the calendar date.
const FIXED: [(u32, u32, &str); 6] = [
    (1, 1, "New Year's Day"),
    (5, 1, "Labour Day"),
    (7, 20, "Independence Day"),
    (8, 7, "Battle of Boyacá"),
    (12, 8, "Immaculate Conception"),
    (12, 25, "Christmas Day"),
];

/// Observed on the following Monday unless the date already is one.
const MOVABLE: [(u32, u32, &str); 7] = [
    (1, 6, "Epiphany"),
    (3, 19, "Saint Joseph's Day"),
    (6, 29, "Saints Peter and Paul"),
    (8, 15, "Assumption of Mary"),
    (10, 12, "Columbus Day"),
    (11, 1, "All Saints' Day"),
    (11, 11, "Independence of Cartagena"),
];

/// Offsets in days from Easter Sunday. The last three are already Mondays
/// (the Thursday feasts moved forward by four days).
const EASTER_RELATIVE: [(i64, &str); 5] = [
    (-3, "Holy Thursday"),
    (-2, "Good Friday"),
    (43, "Ascension Day"),
    (64, "Corpus Christi"),
    (71, "Sacred Heart"),
];

/// Rule-based Colombian holiday calendar with a per-year cache.
#[derive(Debug, Default)]
pub struct ColombianHolidays {
    cache: DashMap<i32, Arc<BTreeSet<NaiveDate>>>,
}

impl ColombianHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    /// All holidays of `year` with their names, sorted by date.
    ///
    /// Two holidays can share a date (Saints Peter and Paul and Sacred Heart
    /// both land on 2025-06-30); both entries are kept.
    pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
        let mut holidays = Vec::with_capacity(FIXED.len() + MOVABLE.len() + EASTER_RELATIVE.len());

        for (month, day, name) in FIXED {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                holidays.push(Holiday { date, name });
            }
        }

        for (month, day, name) in MOVABLE {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                holidays.push(Holiday {
                    date: next_monday(date),
                    name,
                });
            }
        }

        if let Some(easter) = easter_sunday(year) {
            for (offset, name) in EASTER_RELATIVE {
                holidays.push(Holiday {
                    date: easter + TimeDelta::days(offset),
                    name,
                });
            }
        }

        holidays.sort_by_key(|h| h.date);
        holidays
    }

    /// Holiday dates of `year`, computed once and then served from cache.
    pub fn dates_for_year(&self, year: i32) -> Arc<BTreeSet<NaiveDate>> {
        if let Some(dates) = self.cache.get(&year) {
            return Arc::clone(&dates);
        }

        let dates: BTreeSet<NaiveDate> = Self::holidays_for_year(year)
            .into_iter()
            .map(|h| h.date)
            .collect();
        tracing::debug!(year, count = dates.len(), "computed colombian holidays");

        Arc::clone(self.cache.entry(year).or_insert_with(|| Arc::new(dates)).value())
    }
}

impl HolidayCalendar for ColombianHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates_for_year(date.year()).contains(&date)
    }
}

/// `date` if it is a Monday, otherwise the Monday after it.
fn next_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Mon => date,
        weekday => date + TimeDelta::days(7 - i64::from(weekday.num_days_from_monday())),
    }
}

/// Gregorian Easter Sunday (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
