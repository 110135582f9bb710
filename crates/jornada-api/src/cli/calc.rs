//! One-shot calculation from the command line.

use anyhow::Result;
use chrono::{DateTime, Utc};
use console::style;

use jornada_core::request::{RawParams, validate_params};
use jornada_types::api::{ErrorResponse, WorkingDateResponse};
use jornada_types::error::ValidationError;

use crate::state::AppState;

/// Validate `params` and run them through the configured calculator.
pub fn evaluate(
    state: &AppState,
    params: &RawParams<'_>,
    now: DateTime<Utc>,
) -> Result<(DateTime<Utc>, DateTime<Utc>), ValidationError> {
    let request = validate_params(params, now)?;
    Ok((request.start, state.calculator.calculate(&request)))
}

/// `jornada calc`: print the resulting instant.
///
/// Invalid parameters are reported with the same `error` / `message` pair the
/// HTTP API uses and make the command fail.
pub fn calc(
    state: &AppState,
    days: Option<&str>,
    hours: Option<&str>,
    date: Option<&str>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let params = RawParams { days, hours, date };

    let (start, result) = match evaluate(state, &params, Utc::now()) {
        Ok(pair) => pair,
        Err(err) => {
            if json {
                let body = ErrorResponse::new("InvalidParameters", err.to_string());
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            anyhow::bail!(err);
        }
    };

    let response = WorkingDateResponse::from_instant(result);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if quiet {
        println!("{}", response.date);
        return Ok(());
    }

    let clock = state.calculator.clock();
    println!();
    println!(
        "  {} {}",
        style("From:").dim(),
        clock.to_civil(start).format("%a %Y-%m-%d %H:%M")
    );
    println!(
        "  {} {}",
        style("To:  ").dim(),
        style(clock.to_civil(result).format("%a %Y-%m-%d %H:%M")).green().bold()
    );
    println!("  {} {}", style("UTC: ").dim(), style(&response.date).cyan());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::TimeZone;
    use jornada_types::config::GlobalConfig;

    use super::*;

    fn state() -> AppState {
        AppState::from_config(GlobalConfig::default(), PathBuf::from("/tmp")).unwrap()
    }

    #[test]
    fn evaluates_with_explicit_date() {
        let params = RawParams {
            days: Some("1"),
            hours: Some("4"),
            date: Some("2025-04-10T15:00:00.000Z"),
        };
        let (_, result) = evaluate(&state(), &params, Utc::now()).unwrap();
        // Thursday 10:00 Bogotá + 1 day -> Friday 10:00, + 4h -> Friday 15:00.
        assert_eq!(result, Utc.with_ymd_and_hms(2025, 4, 11, 20, 0, 0).unwrap());
    }

    #[test]
    fn reports_validation_errors() {
        let params = RawParams {
            days: None,
            hours: None,
            date: Some("2025-04-10T15:00:00.000Z"),
        };
        assert_eq!(
            evaluate(&state(), &params, Utc::now()),
            Err(ValidationError::MissingAmount)
        );
    }

    #[test]
    fn calc_fails_on_invalid_input() {
        assert!(calc(&state(), Some("400"), None, None, true, false).is_err());
        assert!(calc(&state(), Some("1"), None, Some("2025-01-15T13:00:00Z"), true, false).is_ok());
    }
}
