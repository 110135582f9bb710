//! HolidayCalendar trait: the oracle answering "is this date a holiday".
//!
//! Defined in jornada-core so the calculator can skip holidays without
//! knowing where they come from. Rule-based and table-based adapters live in
//! jornada-infra.

use std::sync::Arc;

use chrono::NaiveDate;

/// Abstraction over a holiday source.
///
/// Implementations must be pure: the same date always yields the same
/// answer, and a lookup must be cheap and non-blocking since the calculator
/// asks once per civil day it steps over.
pub trait HolidayCalendar: Send + Sync {
    /// Whether `date` (a business-civil date) is a non-working holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> HolidayCalendar for F
where
    F: Fn(NaiveDate) -> bool + Send + Sync,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

impl<T: HolidayCalendar + ?Sized> HolidayCalendar for Arc<T> {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        (**self).is_holiday(date)
    }
}

/// Calendar without any holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn closures_are_calendars() {
        let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let calendar = move |date: NaiveDate| date == christmas;
        assert!(calendar.is_holiday(christmas));
        assert!(!calendar.is_holiday(christmas.succ_opt().unwrap()));
    }

    #[test]
    fn shared_calendars_delegate() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let first_of_year: Arc<dyn HolidayCalendar> = Arc::new(|d: NaiveDate| d.ordinal() == 1);
        let none: Arc<dyn HolidayCalendar> = Arc::new(NoHolidays);
        assert!(first_of_year.is_holiday(date));
        assert!(!none.is_holiday(date));
    }
}
