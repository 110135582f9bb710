//! Conversion between absolute instants and business civil time.
//!
//! The business timezone is a fixed UTC offset with no daylight saving, so
//! the conversion is a plain shift and both directions are total.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, Utc};

use jornada_types::calendar::{CalendarConfig, WorkingDays};
use jornada_types::error::CalendarConfigError;

/// Converts instants to and from business civil time and answers whether a
/// civil date falls on a working weekday.
#[derive(Debug, Clone, Copy)]
pub struct CivilClock {
    offset: FixedOffset,
    days: WorkingDays,
}

impl CivilClock {
    pub fn new(offset: FixedOffset, days: WorkingDays) -> Self {
        Self { offset, days }
    }

    /// Build a clock from a calendar config, validating its offset.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarConfigError> {
        Ok(Self::new(config.offset()?, config.days))
    }

    /// Wall-clock reading of `instant` in business civil time.
    pub fn to_civil(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }

    /// Absolute instant of a business civil wall-clock reading.
    pub fn to_instant(&self, civil: NaiveDateTime) -> DateTime<Utc> {
        let utc = civil - TimeDelta::seconds(i64::from(self.offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(utc, Utc)
    }

    /// Whether the civil weekday lies in the working-days range.
    pub fn is_working_weekday(&self, civil: &NaiveDateTime) -> bool {
        self.days.contains_date(civil.date())
    }
}

impl Default for CivilClock {
    /// America/Bogota (UTC-05:00), Monday to Friday.
    fn default() -> Self {
        let config = CalendarConfig::default();
        Self::from_config(&config).unwrap_or_else(|_| Self::new(Utc.fix(), config.days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Timelike};

    fn bogota() -> CivilClock {
        CivilClock::default()
    }

    fn civil(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn utc_to_business_time_is_five_hours_behind() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 18, 0, 0).unwrap();
        assert_eq!(bogota().to_civil(instant).hour(), 13);
    }

    #[test]
    fn business_time_to_utc_is_five_hours_ahead() {
        let instant = bogota().to_instant(civil(2025, 1, 15, 13, 0));
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 1, 15, 18, 0, 0).unwrap());
    }

    #[test]
    fn conversion_crosses_midnight() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 11, 3, 30, 0).unwrap();
        assert_eq!(bogota().to_civil(instant), civil(2025, 1, 10, 22, 30));
    }

    #[test]
    fn round_trip_holds_both_ways() {
        let clock = bogota();
        for hour in 0..24 {
            let c = civil(2025, 3, 1, hour, 17);
            assert_eq!(clock.to_civil(clock.to_instant(c)), c);

            let i = Utc.with_ymd_and_hms(2024, 12, 31, hour, 59, 59).unwrap();
            assert_eq!(clock.to_instant(clock.to_civil(i)), i);
        }
    }

    #[test]
    fn round_trip_preserves_subsecond_precision() {
        let clock = bogota();
        let i = Utc.timestamp_millis_opt(1_736_776_800_123).unwrap();
        assert_eq!(clock.to_instant(clock.to_civil(i)), i);
    }

    #[test]
    fn weekdays_are_working_weekdays() {
        let clock = bogota();
        // 2025-01-13 is a Monday
        for day in 13..=17 {
            assert!(clock.is_working_weekday(&civil(2025, 1, day, 10, 0)));
        }
    }

    #[test]
    fn weekends_are_not_working_weekdays() {
        let clock = bogota();
        assert!(!clock.is_working_weekday(&civil(2025, 1, 18, 10, 0)));
        assert!(!clock.is_working_weekday(&civil(2025, 1, 19, 10, 0)));
    }

    #[test]
    fn weekday_is_evaluated_in_business_time() {
        // Saturday 02:00 UTC is still Friday 21:00 in business time.
        let clock = bogota();
        let instant = Utc.with_ymd_and_hms(2025, 1, 11, 2, 0, 0).unwrap();
        assert!(clock.is_working_weekday(&clock.to_civil(instant)));
    }

    #[test]
    fn from_config_uses_configured_offset() {
        let config = CalendarConfig {
            utc_offset_minutes: 90,
            ..CalendarConfig::default()
        };
        let clock = CivilClock::from_config(&config).unwrap();
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(clock.to_civil(instant), civil(2025, 1, 15, 13, 30));
    }
}
