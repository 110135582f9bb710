//! Holiday calendar implementations.
//!
//! - `colombia`: rule-based Colombian public holidays (cached per year)
//! - `table`: explicit date set from configuration
//! - `HolidayChain`: union of several calendars, built from `HolidayConfig`

pub mod colombia;
pub mod table;

use std::sync::Arc;

use chrono::NaiveDate;

use jornada_core::holiday::HolidayCalendar;
use jornada_types::config::{HolidayConfig, HolidayCountry};

use crate::holiday::colombia::ColombianHolidays;
use crate::holiday::table::StaticHolidays;

/// Type-erased holiday calendar shared across handlers.
pub type DynHolidayCalendar = Arc<dyn HolidayCalendar>;

/// A date is a holiday when any member calendar says so.
#[derive(Clone, Default)]
pub struct HolidayChain {
    calendars: Vec<DynHolidayCalendar>,
}

impl HolidayChain {
    pub fn new(calendars: Vec<DynHolidayCalendar>) -> Self {
        Self { calendars }
    }
}

impl HolidayCalendar for HolidayChain {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.calendars.iter().any(|calendar| calendar.is_holiday(date))
    }
}

impl std::fmt::Debug for HolidayChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayChain")
            .field("calendars", &self.calendars.len())
            .finish()
    }
}

/// Build the holiday chain described by the configuration.
///
/// Order:
/// 1. Public holidays of the configured country (if any)
/// 2. Extra dates from `[holidays] extra` (if any)
pub fn build_holiday_chain(config: &HolidayConfig) -> HolidayChain {
    let mut chain: Vec<DynHolidayCalendar> = Vec::new();

    match config.country {
        HolidayCountry::Colombia => chain.push(Arc::new(ColombianHolidays::new())),
        HolidayCountry::None => {}
    }

    if !config.extra.is_empty() {
        chain.push(Arc::new(StaticHolidays::new(config.extra.iter().copied())));
    }

    tracing::debug!(
        country = ?config.country,
        extra = config.extra.len(),
        calendars = chain.len(),
        "built holiday chain"
    );

    HolidayChain::new(chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_chain_is_colombian() {
        let chain = build_holiday_chain(&HolidayConfig::default());
        assert_eq!(chain.calendars.len(), 1);
        assert!(chain.is_holiday(date(2025, 4, 18)));
        assert!(!chain.is_holiday(date(2025, 12, 24)));
    }

    #[test]
    fn extra_dates_extend_country_holidays() {
        let config = HolidayConfig {
            country: HolidayCountry::Colombia,
            extra: vec![date(2025, 12, 24)],
        };
        let chain = build_holiday_chain(&config);
        assert_eq!(chain.calendars.len(), 2);
        assert!(chain.is_holiday(date(2025, 12, 24)));
        assert!(chain.is_holiday(date(2025, 12, 25)));
    }

    #[test]
    fn no_country_and_no_extra_is_empty() {
        let config = HolidayConfig {
            country: HolidayCountry::None,
            extra: Vec::new(),
        };
        let chain = build_holiday_chain(&config);
        assert!(chain.calendars.is_empty());
        assert!(!chain.is_holiday(date(2025, 1, 1)));
    }
}
