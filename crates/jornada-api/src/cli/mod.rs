//! CLI command definitions for the `jornada` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod calc;
pub mod holidays;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Business-time calculator for a Colombian working calendar.
#[derive(Parser)]
#[command(name = "jornada", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read configuration from this file instead of `{data_dir}/config.toml`.
    #[arg(long, global = true, env = "JORNADA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on. Defaults to `[server].port` (3001).
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to. Defaults to `[server].host` (0.0.0.0).
        #[arg(long)]
        host: Option<String>,
    },

    /// Add working days and/or hours to a start instant.
    Calc {
        /// Working days to add (0-365).
        #[arg(short, long)]
        days: Option<String>,

        /// Working hours to add (0-2000).
        #[arg(short = 'H', long)]
        hours: Option<String>,

        /// Start instant, e.g. 2025-01-15T13:00:00.000Z. Defaults to now.
        #[arg(long)]
        date: Option<String>,
    },

    /// List the non-working holidays of a year.
    Holidays {
        /// Calendar year.
        #[arg(short, long)]
        year: i32,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Default log filter for the chosen verbosity. `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,jornada=debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_calc_arguments() {
        let cli = Cli::try_parse_from([
            "jornada", "--json", "calc", "-d", "2", "-H", "3", "--date",
            "2025-01-15T13:00:00Z",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Calc { days, hours, date } => {
                assert_eq!(days.as_deref(), Some("2"));
                assert_eq!(hours.as_deref(), Some("3"));
                assert_eq!(date.as_deref(), Some("2025-01-15T13:00:00Z"));
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn verbosity_selects_filter() {
        let cli = Cli::try_parse_from(["jornada", "holidays", "-y", "2025"]).unwrap();
        assert_eq!(cli.log_filter(), "warn");
        let cli = Cli::try_parse_from(["jornada", "-vv", "holidays", "-y", "2025"]).unwrap();
        assert_eq!(cli.log_filter(), "trace");
        let cli = Cli::try_parse_from(["jornada", "--quiet", "holidays", "-y", "2025"]).unwrap();
        assert_eq!(cli.log_filter(), "error");
    }
}
