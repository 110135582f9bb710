//! Holiday listing command.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveTime};
use console::style;
use serde::Serialize;

use jornada_infra::holiday::colombia::ColombianHolidays;
use jornada_types::config::{HolidayConfig, HolidayCountry};

use crate::state::AppState;

/// Label used for dates from `[holidays].extra`.
const EXTRA_HOLIDAY: &str = "Additional holiday";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayEntry {
    pub date: NaiveDate,
    pub weekday: String,
    pub name: String,
}

/// Named holidays of `year` under `config`, sorted by date.
pub fn holidays_in_year(config: &HolidayConfig, year: i32) -> Vec<HolidayEntry> {
    let mut entries: Vec<HolidayEntry> = Vec::new();

    if config.country == HolidayCountry::Colombia {
        entries.extend(
            ColombianHolidays::holidays_for_year(year)
                .into_iter()
                .map(|h| entry(h.date, h.name)),
        );
    }

    for date in config.extra.iter().filter(|d| d.year() == year) {
        if !entries.iter().any(|e| e.date == *date) {
            entries.push(entry(*date, EXTRA_HOLIDAY));
        }
    }

    entries.sort_by_key(|e| e.date);
    entries
}

fn entry(date: NaiveDate, name: &str) -> HolidayEntry {
    HolidayEntry {
        date,
        weekday: date.weekday().to_string(),
        name: name.to_string(),
    }
}

/// `jornada holidays --year Y`.
pub fn list_holidays(state: &AppState, year: i32, json: bool) -> Result<()> {
    let entries = holidays_in_year(&state.config.holidays, year);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Holidays in {}",
        style("📅").bold(),
        style(year).cyan().bold()
    );
    println!();

    if entries.is_empty() {
        println!("  {}", style("No holidays configured.").dim());
    }
    let clock = state.calculator.clock();
    for e in &entries {
        // Filled marker: the holiday removes a working day.
        let on_weekday = clock.is_working_weekday(&e.date.and_time(NaiveTime::MIN));
        let marker = if on_weekday {
            style("●").green()
        } else {
            style("○").dim()
        };
        println!("  {} {}  {}  {}", marker, e.date, style(&e.weekday).dim(), e.name);
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn colombian_year_is_listed_with_names() {
        let entries = holidays_in_year(&HolidayConfig::default(), 2025);
        assert_eq!(entries.len(), 18);
        assert_eq!(entries[0].date, date(2025, 1, 1));
        assert_eq!(entries[0].weekday, "Wed");
        assert!(entries.iter().any(|e| e.name == "Good Friday" && e.date == date(2025, 4, 18)));
    }

    #[test]
    fn extra_dates_are_merged_in_order() {
        let config = HolidayConfig {
            country: HolidayCountry::Colombia,
            extra: vec![date(2025, 12, 24), date(2026, 1, 2), date(2025, 1, 1)],
        };
        let entries = holidays_in_year(&config, 2025);
        assert_eq!(entries.len(), 19);
        let christmas_eve = entries.iter().find(|e| e.date == date(2025, 12, 24)).unwrap();
        assert_eq!(christmas_eve.name, EXTRA_HOLIDAY);
        assert!(entries.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn no_country_lists_only_extras() {
        let config = HolidayConfig {
            country: HolidayCountry::None,
            extra: vec![date(2025, 3, 3)],
        };
        let entries = holidays_in_year(&config, 2025);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].weekday, "Mon");
    }
}
