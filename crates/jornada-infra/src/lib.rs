//! Infrastructure layer for Jornada.
//!
//! Implements the `HolidayCalendar` port from `jornada-core` (Colombian
//! public holidays, configured date tables, and their union) and loads
//! `config.toml` from the data directory.

pub mod config;
pub mod holiday;
