//! Business-time advancement.
//!
//! [`WorkingTimeCalculator`] answers: starting at some instant, where do we
//! land after adding N working days and then M working hours? It works in
//! business civil time and walks the calendar one civil day at a time,
//! asking the holiday calendar about every day it lands on. Holiday calendars
//! are irregular, so there is no closed-form shortcut here.
//!
//! The pipeline is:
//!
//! 1. convert the start instant to civil time, truncated to whole minutes
//!    (keeping that raw value),
//! 2. normalize it onto the nearest preceding business-hours boundary,
//! 3. add working days, preserving the time of day,
//! 4. add working hours, skipping lunch, nights, weekends and holidays,
//! 5. convert back to an absolute instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};

use jornada_types::calendar::{CalendarConfig, WorkingHours};
use jornada_types::error::CalendarConfigError;
use jornada_types::request::WorkingTimeRequest;

use crate::civil::CivilClock;
use crate::holiday::HolidayCalendar;

const MINUTES_PER_HOUR: i64 = 60;

/// Stateless business-time calculator bound to one calendar.
///
/// Holds the civil clock, the working-hours window, and the holiday oracle.
/// Every operation is a pure function of its arguments and the captured
/// calendar, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct WorkingTimeCalculator<H> {
    clock: CivilClock,
    hours: WorkingHours,
    holidays: H,
}

impl<H: HolidayCalendar> WorkingTimeCalculator<H> {
    pub fn new(clock: CivilClock, hours: WorkingHours, holidays: H) -> Self {
        Self {
            clock,
            hours,
            holidays,
        }
    }

    /// Build a calculator from a calendar config and a holiday source.
    pub fn from_config(config: &CalendarConfig, holidays: H) -> Result<Self, CalendarConfigError> {
        Ok(Self::new(
            CivilClock::from_config(config)?,
            config.hours,
            holidays,
        ))
    }

    pub fn clock(&self) -> &CivilClock {
        &self.clock
    }

    pub fn holidays(&self) -> &H {
        &self.holidays
    }

    /// Run a validated request.
    pub fn calculate(&self, request: &WorkingTimeRequest) -> DateTime<Utc> {
        self.advance(request.start, request.days, request.hours)
    }

    /// Advance `start` by `days` working days, then by `hours` working hours.
    ///
    /// Adding zero days and zero hours still normalizes `start`, so the
    /// result differs from the input whenever the input is outside business
    /// hours.
    pub fn advance(&self, start: DateTime<Utc>, days: u32, hours: u32) -> DateTime<Utc> {
        let _span = tracing::debug_span!("advance", %start, days, hours).entered();

        let original = truncate_to_minute(self.clock.to_civil(start));
        let normalized = self.normalize_to_working_time(original);
        let shifted = self.add_working_days(normalized, days);
        let result = self.add_working_hours(shifted, hours, original);

        tracing::debug!(%original, %normalized, %shifted, %result, "advanced business time");
        self.clock.to_instant(result)
    }

    /// Move an arbitrary civil time onto the nearest preceding business-hours
    /// boundary. Already-valid working times are returned unchanged.
    pub fn normalize_to_working_time(&self, civil: NaiveDateTime) -> NaiveDateTime {
        if !self.is_business_day(civil.date()) {
            let day = self.previous_business_day(civil.date(), false);
            tracing::trace!(%civil, %day, "start on non-working day");
            return at_hour(day, self.hours.end());
        }

        if civil.hour() < self.hours.start() {
            let day = self.previous_business_day(civil.date(), true);
            tracing::trace!(%civil, %day, "start before opening");
            return at_hour(day, self.hours.end());
        }

        if civil.hour() >= self.hours.end() {
            tracing::trace!(%civil, "start after closing");
            return at_hour(civil.date(), self.hours.end());
        }

        if civil.hour() == self.hours.lunch_start() && civil.minute() > 0 {
            tracing::trace!(%civil, "start inside lunch");
            return at_hour(civil.date(), self.hours.lunch_start());
        }

        civil
    }

    /// Add whole working days. Each increment lands on a genuine working day
    /// before it counts; the time of day is carried through unchanged.
    pub fn add_working_days(&self, civil: NaiveDateTime, days: u32) -> NaiveDateTime {
        let mut current = civil;
        for _ in 0..days {
            loop {
                current += TimeDelta::days(1);
                if self.is_business_day(current.date()) {
                    break;
                }
                tracing::trace!(date = %current.date(), "skipping non-working day");
            }
        }
        current
    }

    /// Add working hours, consuming morning and afternoon segments and
    /// rolling over lunch and into following working days.
    ///
    /// `original` is the civil start before normalization. When it lay
    /// outside working time, normalization rewound to the end of a previous
    /// business day, and counting resumes at the start of the next one.
    /// Only `hour < start || hour >= end` counts as outside here: a start
    /// inside the lunch hour is normalized but does not trigger the roll.
    pub fn add_working_hours(
        &self,
        civil: NaiveDateTime,
        hours: u32,
        original: NaiveDateTime,
    ) -> NaiveDateTime {
        if hours == 0 {
            return civil;
        }

        let mut current = civil;
        let mut remaining = i64::from(hours) * MINUTES_PER_HOUR;

        if self.was_outside_working_time(original) {
            current = self.next_working_day_start(current);
            tracing::trace!(%original, resume = %current, "resuming at next opening");
        }

        while remaining > 0 {
            current = self.ensure_working_day(current);
            current = self.clamp_to_working_hours(current);

            let step = remaining.min(self.available_minutes(current));
            current += TimeDelta::minutes(step);
            remaining -= step;
            tracing::trace!(%current, consumed = step, remaining, "consumed working minutes");

            if remaining > 0 {
                current = self.handle_transition(current);
            }
        }

        current
    }

    /// Weekday in range and not a holiday.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        self.clock.is_working_weekday(&date.and_time(NaiveTime::MIN))
            && !self.holidays.is_holiday(date)
    }

    /// Walk backward until a business day. With `strict`, the walk always
    /// takes at least one step, even if `date` itself is a business day.
    fn previous_business_day(&self, date: NaiveDate, strict: bool) -> NaiveDate {
        let mut day = date;
        if strict {
            day -= TimeDelta::days(1);
        }
        while !self.is_business_day(day) {
            tracing::trace!(date = %day, "rewinding over non-working day");
            day -= TimeDelta::days(1);
        }
        day
    }

    fn was_outside_working_time(&self, original: NaiveDateTime) -> bool {
        let hour = original.hour();
        !self.is_business_day(original.date())
            || hour < self.hours.start()
            || hour >= self.hours.end()
    }

    fn next_working_day_start(&self, civil: NaiveDateTime) -> NaiveDateTime {
        let mut day = civil.date() + TimeDelta::days(1);
        while !self.is_business_day(day) {
            day += TimeDelta::days(1);
        }
        at_hour(day, self.hours.start())
    }

    fn ensure_working_day(&self, civil: NaiveDateTime) -> NaiveDateTime {
        let mut current = civil;
        while !self.is_business_day(current.date()) {
            tracing::trace!(date = %current.date(), "skipping non-working day");
            current = at_hour(current.date() + TimeDelta::days(1), self.hours.start());
        }
        current
    }

    fn clamp_to_working_hours(&self, civil: NaiveDateTime) -> NaiveDateTime {
        let hour = civil.hour();
        if hour < self.hours.start() {
            tracing::trace!(%civil, "clamped to opening");
            return at_hour(civil.date(), self.hours.start());
        }
        if self.hours.is_lunch_hour(hour) {
            tracing::trace!(%civil, "clamped past lunch");
            return at_hour(civil.date(), self.hours.lunch_end());
        }
        civil
    }

    /// Minutes left in the segment `civil` sits in.
    fn available_minutes(&self, civil: NaiveDateTime) -> i64 {
        let hour = civil.hour();
        if hour >= self.hours.end() || self.hours.is_lunch_hour(hour) {
            return 0;
        }

        let now = i64::from(hour) * MINUTES_PER_HOUR + i64::from(civil.minute());
        let boundary = if hour < self.hours.lunch_start() {
            self.hours.lunch_start()
        } else {
            self.hours.end()
        };
        i64::from(boundary) * MINUTES_PER_HOUR - now
    }

    /// Step past lunch, or to the next calendar day at `start` once the day
    /// is used up. Weekends and holidays are handled by the next
    /// `ensure_working_day`.
    fn handle_transition(&self, civil: NaiveDateTime) -> NaiveDateTime {
        let hour = civil.hour();
        if self.hours.is_lunch_hour(hour) {
            tracing::trace!(%civil, "lunch break");
            return at_hour(civil.date(), self.hours.lunch_end());
        }
        if hour >= self.hours.end() {
            tracing::trace!(%civil, "day used up");
            return at_hour(civil.date() + TimeDelta::days(1), self.hours.start());
        }
        civil
    }
}

/// Free-function form of [`WorkingTimeCalculator::advance`].
pub fn advance<H: HolidayCalendar>(
    config: &CalendarConfig,
    holidays: H,
    start: DateTime<Utc>,
    days: u32,
    hours: u32,
) -> Result<DateTime<Utc>, CalendarConfigError> {
    Ok(WorkingTimeCalculator::from_config(config, holidays)?.advance(start, days, hours))
}

/// `date` at `hour:00:00`.
fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + TimeDelta::hours(i64::from(hour))
}

/// Drop seconds and fractions; the calculation counts whole minutes.
fn truncate_to_minute(civil: NaiveDateTime) -> NaiveDateTime {
    let minutes = i64::from(civil.hour()) * MINUTES_PER_HOUR + i64::from(civil.minute());
    civil.date().and_time(NaiveTime::MIN) + TimeDelta::minutes(minutes)
}
