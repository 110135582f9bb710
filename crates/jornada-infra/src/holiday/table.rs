//! Fixed holiday table.

use std::collections::HashSet;

use chrono::NaiveDate;

use jornada_core::holiday::HolidayCalendar;

/// Holiday calendar backed by an explicit set of dates.
///
/// Used for company-specific closures listed under `[holidays] extra` in
/// `config.toml`.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    dates: HashSet<NaiveDate>,
}

impl StaticHolidays {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }
}

impl HolidayCalendar for StaticHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}
