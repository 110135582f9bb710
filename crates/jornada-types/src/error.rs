use chrono::Weekday;
use thiserror::Error;

/// Rejections produced while turning raw request parameters into a
/// [`WorkingTimeRequest`](crate::request::WorkingTimeRequest).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least one parameter (days or hours) is required")]
    MissingAmount,

    #[error("Days must be a positive integer between 0 and 365")]
    InvalidDays,

    #[error("Hours must be a positive integer between 0 and 2000")]
    InvalidHours,

    #[error("Date must be in ISO 8601 format with Z suffix")]
    InvalidDateFormat,

    #[error("Invalid date format")]
    InvalidDate,
}

/// Errors raised when a business calendar window breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarConfigError {
    #[error("working hour {0} is outside 0..=23")]
    HourOutOfRange(u32),

    #[error(
        "working hours must satisfy start < lunch_start < lunch_end < end \
         (got {start}, {lunch_start}, {lunch_end}, {end})"
    )]
    UnorderedHours {
        start: u32,
        lunch_start: u32,
        lunch_end: u32,
        end: u32,
    },

    #[error("working days range {first}..={last} is reversed")]
    UnorderedDays { first: Weekday, last: Weekday },

    #[error("working days range {first}..={last} includes a weekend day")]
    WeekendInRange { first: Weekday, last: Weekday },

    #[error("UTC offset of {0} minutes is out of range")]
    OffsetOutOfRange(i32),
}
