//! Query parameter extractors.

use serde::Deserialize;

use jornada_core::request::RawParams;

/// Query parameters of `GET /api/working-days`.
///
/// Kept as raw strings; range and format checks happen in
/// `jornada_core::request::validate_params`.
#[derive(Debug, Deserialize, Default)]
pub struct WorkingDaysQuery {
    /// Working days to add.
    pub days: Option<String>,
    /// Working hours to add.
    pub hours: Option<String>,
    /// Start instant, ISO-8601 UTC with `Z` suffix. Defaults to now.
    pub date: Option<String>,
}

impl WorkingDaysQuery {
    pub fn as_raw(&self) -> RawParams<'_> {
        RawParams {
            days: self.days.as_deref(),
            hours: self.hours.as_deref(),
            date: self.date.as_deref(),
        }
    }
}
