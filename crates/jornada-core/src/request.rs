//! Validation of raw calculation parameters.
//!
//! Turns the loosely-typed `days` / `hours` / `date` strings of a query
//! string or command line into a [`WorkingTimeRequest`]. Bounds are checked
//! here so the calculator can trust its inputs.

use chrono::{DateTime, NaiveDateTime, Utc};

use jornada_types::error::ValidationError;
use jornada_types::request::{MAX_DAYS, MAX_HOURS, WorkingTimeRequest};

/// Unvalidated parameters as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams<'a> {
    pub days: Option<&'a str>,
    pub hours: Option<&'a str>,
    pub date: Option<&'a str>,
}

/// Validate `params`, defaulting the start instant to `now` when no date was
/// given.
///
/// At least one of `days` / `hours` must be present and non-empty. An empty
/// value counts as zero once the other one is present.
pub fn validate_params(
    params: &RawParams<'_>,
    now: DateTime<Utc>,
) -> Result<WorkingTimeRequest, ValidationError> {
    let days = non_empty(params.days);
    let hours = non_empty(params.hours);

    if days.is_none() && hours.is_none() {
        return Err(ValidationError::MissingAmount);
    }

    let days = match days {
        Some(raw) => parse_bounded(raw, MAX_DAYS).ok_or(ValidationError::InvalidDays)?,
        None => 0,
    };
    let hours = match hours {
        Some(raw) => parse_bounded(raw, MAX_HOURS).ok_or(ValidationError::InvalidHours)?,
        None => 0,
    };

    let start = match non_empty(params.date) {
        Some(raw) => parse_utc_timestamp(raw)?,
        None => now,
    };

    Ok(WorkingTimeRequest { start, days, hours })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Plain decimal digits only, no sign or whitespace, at most `max`.
///
/// No prefix parsing: `"5abc"` and `"1.5"` are rejected outright rather
/// than read as 5 and 1.
fn parse_bounded(raw: &str, max: u32) -> Option<u32> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|value| *value <= max)
}

/// Parse `YYYY-MM-DDTHH:MM:SS[.f{1,3}]Z`.
///
/// The shape is checked first so that offsets other than `Z`, missing
/// seconds, or more than millisecond precision are rejected as format
/// errors; a well-shaped string naming an impossible date (month 13,
/// February 30) is an invalid date.
pub fn parse_utc_timestamp(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    if !has_utc_timestamp_shape(raw) {
        return Err(ValidationError::InvalidDateFormat);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.fZ")
        .map(|naive| naive.and_utc())
        .map_err(|_| ValidationError::InvalidDate)
}

fn has_utc_timestamp_shape(raw: &str) -> bool {
    const PATTERN: &[u8] = b"dddd-dd-ddTdd:dd:dd";

    let bytes = raw.as_bytes();
    if bytes.len() < PATTERN.len() + 1 || bytes[bytes.len() - 1] != b'Z' {
        return false;
    }

    let (head, tail) = bytes.split_at(PATTERN.len());
    let head_ok = head.iter().zip(PATTERN).all(|(&b, &p)| match p {
        b'd' => b.is_ascii_digit(),
        literal => b == literal,
    });
    if !head_ok {
        return false;
    }

    // `tail` is either "Z" or ".f{1,3}Z".
    let fraction = &tail[..tail.len() - 1];
    match fraction.split_first() {
        None => true,
        Some((&b'.', digits)) => {
            (1..=3).contains(&digits.len()) && digits.iter().all(u8::is_ascii_digit)
        }
        Some(_) => false,
    }
}
