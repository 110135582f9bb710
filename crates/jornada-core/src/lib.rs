//! Business-time calculation for Jornada.
//!
//! Converts instants to business civil time, defines the holiday oracle port
//! (`HolidayCalendar`) that the infrastructure layer implements, and advances
//! instants by working days and working hours. Pure computation: no I/O and
//! no dependency on `jornada-infra`.

pub mod calculator;
pub mod civil;
pub mod holiday;
pub mod request;
