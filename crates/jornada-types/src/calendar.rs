//! Business calendar window types.
//!
//! A [`CalendarConfig`] fixes everything the calculator needs besides the
//! holiday oracle: the civil UTC offset, the daily working-hours window and
//! the weekday range. Every constructor validates the window invariants, and
//! deserialization goes through the same constructors, so an invalid window
//! can never reach the calculator.

use chrono::{Datelike, FixedOffset, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarConfigError;

/// Default offset of the business timezone (America/Bogota, UTC-05:00, no DST).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -300;

/// Daily working-hours window, in whole hours of the business-civil day.
///
/// Invariant: `start < lunch_start < lunch_end < end <= 23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkingHours")]
pub struct WorkingHours {
    start: u32,
    lunch_start: u32,
    lunch_end: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawWorkingHours {
    start: u32,
    lunch_start: u32,
    lunch_end: u32,
    end: u32,
}

impl TryFrom<RawWorkingHours> for WorkingHours {
    type Error = CalendarConfigError;

    fn try_from(raw: RawWorkingHours) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.lunch_start, raw.lunch_end, raw.end)
    }
}

impl WorkingHours {
    /// Build a window, rejecting any ordering that breaks the invariant.
    pub fn new(
        start: u32,
        lunch_start: u32,
        lunch_end: u32,
        end: u32,
    ) -> Result<Self, CalendarConfigError> {
        if end > 23 {
            return Err(CalendarConfigError::HourOutOfRange(end));
        }
        if !(start < lunch_start && lunch_start < lunch_end && lunch_end < end) {
            return Err(CalendarConfigError::UnorderedHours {
                start,
                lunch_start,
                lunch_end,
                end,
            });
        }
        Ok(Self {
            start,
            lunch_start,
            lunch_end,
            end,
        })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn lunch_start(&self) -> u32 {
        self.lunch_start
    }

    pub fn lunch_end(&self) -> u32 {
        self.lunch_end
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Whether `hour` lies inside `[lunch_start, lunch_end)`.
    pub fn is_lunch_hour(&self, hour: u32) -> bool {
        hour >= self.lunch_start && hour < self.lunch_end
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: 8,
            lunch_start: 12,
            lunch_end: 13,
            end: 17,
        }
    }
}

/// Inclusive weekday range on which work happens.
///
/// The range never includes Saturday or Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkingDays")]
pub struct WorkingDays {
    first: Weekday,
    last: Weekday,
}

#[derive(Deserialize)]
struct RawWorkingDays {
    first: Weekday,
    last: Weekday,
}

impl TryFrom<RawWorkingDays> for WorkingDays {
    type Error = CalendarConfigError;

    fn try_from(raw: RawWorkingDays) -> Result<Self, Self::Error> {
        Self::new(raw.first, raw.last)
    }
}

impl WorkingDays {
    pub fn new(first: Weekday, last: Weekday) -> Result<Self, CalendarConfigError> {
        let first_n = first.number_from_monday();
        let last_n = last.number_from_monday();
        if first_n > last_n {
            return Err(CalendarConfigError::UnorderedDays { first, last });
        }
        if last_n > Weekday::Fri.number_from_monday() {
            return Err(CalendarConfigError::WeekendInRange { first, last });
        }
        Ok(Self { first, last })
    }

    /// Whether `weekday` falls inside the range.
    pub fn contains(&self, weekday: Weekday) -> bool {
        let n = weekday.number_from_monday();
        n >= self.first.number_from_monday() && n <= self.last.number_from_monday()
    }

    /// Whether `date` falls on a working weekday (holidays not considered).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self {
            first: Weekday::Mon,
            last: Weekday::Fri,
        }
    }
}

/// Immutable description of one business calendar (minus its holidays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Offset of the business civil time from UTC, in minutes.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    #[serde(default)]
    pub hours: WorkingHours,

    #[serde(default)]
    pub days: WorkingDays,
}

fn default_utc_offset_minutes() -> i32 {
    DEFAULT_UTC_OFFSET_MINUTES
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            hours: WorkingHours::default(),
            days: WorkingDays::default(),
        }
    }
}

impl CalendarConfig {
    /// The configured offset as a chrono [`FixedOffset`].
    pub fn offset(&self) -> Result<FixedOffset, CalendarConfigError> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or(CalendarConfigError::OffsetOutOfRange(self.utc_offset_minutes))
    }

    /// Check the parts that serde cannot check on its own.
    pub fn validate(&self) -> Result<(), CalendarConfigError> {
        self.offset().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_eight_to_five_with_lunch_at_noon() {
        let hours = WorkingHours::default();
        assert_eq!(hours.start(), 8);
        assert_eq!(hours.lunch_start(), 12);
        assert_eq!(hours.lunch_end(), 13);
        assert_eq!(hours.end(), 17);
    }

    #[test]
    fn working_hours_rejects_unordered_window() {
        assert!(WorkingHours::new(9, 8, 13, 17).is_err());
        assert!(WorkingHours::new(8, 12, 12, 17).is_err());
        assert!(WorkingHours::new(8, 12, 13, 13).is_err());
        assert!(matches!(
            WorkingHours::new(8, 12, 13, 24),
            Err(CalendarConfigError::HourOutOfRange(24))
        ));
    }

    #[test]
    fn lunch_hour_is_half_open() {
        let hours = WorkingHours::new(7, 12, 14, 18).unwrap();
        assert!(!hours.is_lunch_hour(11));
        assert!(hours.is_lunch_hour(12));
        assert!(hours.is_lunch_hour(13));
        assert!(!hours.is_lunch_hour(14));
    }

    #[test]
    fn working_days_rejects_weekend_ranges() {
        assert!(WorkingDays::new(Weekday::Mon, Weekday::Sat).is_err());
        assert!(WorkingDays::new(Weekday::Fri, Weekday::Mon).is_err());
        assert!(WorkingDays::new(Weekday::Tue, Weekday::Thu).is_ok());
    }

    #[test]
    fn default_working_days_cover_monday_to_friday() {
        let days = WorkingDays::default();
        assert!(days.contains(Weekday::Mon));
        assert!(days.contains(Weekday::Wed));
        assert!(days.contains(Weekday::Fri));
        assert!(!days.contains(Weekday::Sat));
        assert!(!days.contains(Weekday::Sun));
    }

    #[test]
    fn calendar_config_deserializes_with_defaults() {
        let config: CalendarConfig = toml::from_str("").unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.offset().unwrap().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn calendar_config_deserialize_rejects_bad_window() {
        let toml_str = r#"
[hours]
start = 14
lunch_start = 12
lunch_end = 13
end = 17
"#;
        assert!(toml::from_str::<CalendarConfig>(toml_str).is_err());
    }

    #[test]
    fn calendar_config_deserializes_custom_window() {
        let toml_str = r#"
utc_offset_minutes = 60

[hours]
start = 9
lunch_start = 13
lunch_end = 14
end = 18

[days]
first = "Mon"
last = "Thu"
"#;
        let config: CalendarConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.utc_offset_minutes, 60);
        assert_eq!(config.hours.start(), 9);
        assert!(config.days.contains(Weekday::Thu));
        assert!(!config.days.contains(Weekday::Fri));
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        let config = CalendarConfig {
            utc_offset_minutes: 24 * 60,
            ..CalendarConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
