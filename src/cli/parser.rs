use crate::report::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ponto
/// CLI application to aggregate time-clock punches and build reports
#[derive(Parser)]
#[command(
    name = "ponto",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate employee time-clock punches and generate timesheet reports",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the period timesheet (XLSX by default, CSV/JSON flat rows)
    Report {
        /// Punch snapshot file (.json or .csv)
        #[arg(long = "input", short = 'i', value_name = "FILE")]
        input: String,

        /// Period start date (YYYY-MM-DD)
        #[arg(long = "start", value_name = "DATE")]
        start: String,

        /// Period end date (YYYY-MM-DD), inclusive
        #[arg(long = "end", value_name = "DATE")]
        end: String,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// One row per punch instead of the grouped month sheets (XLSX only)
        #[arg(long = "flat")]
        flat: bool,

        /// Output file; defaults to the suggested filename in the current dir
        #[arg(long = "file", short = 'o', value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate one employee's punch diary as a paged PDF document
    Diary {
        /// Punch snapshot file (.json or .csv)
        #[arg(long = "input", short = 'i', value_name = "FILE")]
        input: String,

        /// Employee code
        #[arg(long = "employee", short = 'e', value_name = "CODE")]
        employee: String,

        /// Period start date (YYYY-MM-DD)
        #[arg(long = "start", value_name = "DATE")]
        start: String,

        /// Period end date (YYYY-MM-DD), inclusive
        #[arg(long = "end", value_name = "DATE")]
        end: String,

        /// Output file; defaults to the suggested filename in the current dir
        #[arg(long = "file", short = 'o', value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Register the next punch of the day for an employee
    Punch {
        /// Punch snapshot file (.json or .csv), created if missing
        #[arg(long = "input", short = 'i', value_name = "FILE")]
        input: String,

        /// Employee code
        #[arg(long = "employee", short = 'e', value_name = "CODE")]
        employee: String,

        /// Employee display name (required only for the first punch ever)
        #[arg(long = "name", value_name = "NAME")]
        name: Option<String>,

        /// Punch instant (RFC 3339); defaults to now
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,

        /// Use the two-event sequence (entry/exit) regardless of config
        #[arg(long = "simple")]
        simple: bool,
    },

    /// Show the loaded configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },
}
