//! Global configuration types for Jornada.
//!
//! `GlobalConfig` represents the top-level `config.toml`: the business
//! calendar window, which holidays apply, and where the HTTP server listens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarConfig;

/// Top-level configuration.
///
/// Loaded from `~/.jornada/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub holidays: HolidayConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Which public-holiday rules apply, plus any extra company holidays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayConfig {
    #[serde(default)]
    pub country: HolidayCountry,

    /// Additional non-working dates, as `"YYYY-MM-DD"` strings.
    #[serde(default)]
    pub extra: Vec<NaiveDate>,
}

/// Source of public holidays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolidayCountry {
    /// Colombian public holidays (Law 51 of 1983).
    #[default]
    #[serde(rename = "co")]
    Colombia,
    /// No public holidays; only `extra` dates apply.
    #[serde(rename = "none")]
    None,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
