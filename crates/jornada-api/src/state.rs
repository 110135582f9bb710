//! Application state wiring the calculator together.
//!
//! AppState holds the concrete calculator used by both CLI and REST API.
//! The calculator is generic over its holiday calendar, but AppState pins it
//! to the configured infra holiday chain.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use jornada_core::calculator::WorkingTimeCalculator;
use jornada_infra::config::{load_config_file, load_global_config, resolve_data_dir};
use jornada_infra::holiday::{HolidayChain, build_holiday_chain};
use jornada_types::config::GlobalConfig;

/// Calculator pinned to the configured holiday chain.
pub type ConcreteCalculator = WorkingTimeCalculator<HolidayChain>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<ConcreteCalculator>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, wire the calculator.
    ///
    /// An explicit `config_path` wins over `{data_dir}/config.toml`.
    pub async fn init(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = match config_path {
            Some(path) => load_config_file(path).await,
            None => load_global_config(&data_dir).await,
        };
        Self::from_config(config, data_dir)
    }

    /// Wire the calculator from an already-loaded configuration.
    pub fn from_config(config: GlobalConfig, data_dir: PathBuf) -> anyhow::Result<Self> {
        let holidays = build_holiday_chain(&config.holidays);
        let calculator = WorkingTimeCalculator::from_config(&config.calendar, holidays)?;

        tracing::info!(
            utc_offset_minutes = config.calendar.utc_offset_minutes,
            start = config.calendar.hours.start(),
            end = config.calendar.hours.end(),
            holidays = ?config.holidays.country,
            "business calendar ready"
        );

        Ok(Self {
            calculator: Arc::new(calculator),
            config: Arc::new(config),
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use jornada_core::holiday::HolidayCalendar;

    #[test]
    fn default_state_uses_colombian_holidays() {
        let state = AppState::from_config(GlobalConfig::default(), PathBuf::from("/tmp")).unwrap();
        let good_friday = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
        assert!(state.calculator.holidays().is_holiday(good_friday));
        assert!(!state.calculator.is_business_day(good_friday));
    }

    #[tokio::test]
    async fn init_reads_explicit_config_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("jornada.toml");
        tokio::fs::write(&path, "[holidays]\ncountry = \"none\"\n")
            .await
            .unwrap();

        let state = AppState::init(Some(&path)).await.unwrap();
        let good_friday = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
        assert!(state.calculator.is_business_day(good_friday));
    }
}
