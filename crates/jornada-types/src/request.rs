//! Validated calculation request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest accepted number of working days per request.
pub const MAX_DAYS: u32 = 365;

/// Largest accepted number of working hours per request.
pub const MAX_HOURS: u32 = 2000;

/// A calculation request whose bounds have already been checked.
///
/// Only the validation layer constructs these; the calculator trusts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingTimeRequest {
    /// Absolute starting instant.
    pub start: DateTime<Utc>,
    /// Whole working days to add, `0..=MAX_DAYS`.
    pub days: u32,
    /// Working hours to add, `0..=MAX_HOURS`.
    pub hours: u32,
}
