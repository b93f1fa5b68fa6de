//! CLI argument definitions for `radscore`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use radscore_cli::input::RiskFlags;

#[derive(Parser)]
#[command(
    name = "radscore",
    version,
    about = "Radiology scoring: nodule malignancy risk, RECIST response, TNM stage",
    long_about = "Clinical scoring calculators for radiology reporting.\n\n\
                  Estimates pulmonary nodule malignancy risk with follow-up guidance,\n\
                  classifies RECIST tumor response from lesion measurements, and\n\
                  derives an overall stage group from TNM codes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include lesion identifiers and locations in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate pulmonary nodule malignancy risk.
    Risk(RiskArgs),

    /// Classify RECIST response from a lesion measurement CSV.
    Recist(RecistArgs),

    /// Derive the overall stage group from T, N and M codes.
    Stage(StageArgs),

    /// List the accepted T, N and M codes.
    Codes,
}

#[derive(Args)]
pub struct RiskArgs {
    /// Risk factors as a JSON object; flags given alongside override it.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub factors: RiskFlags,

    /// TOML file overriding risk model coefficients.
    ///
    /// Falls back to the RADSCORE_RISK_MODEL environment variable, then to
    /// the built-in coefficients.
    #[arg(long = "model", value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Schedule the follow-up from this date (YYYY-MM-DD).
    #[arg(long = "reference-date", value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct RecistArgs {
    /// CSV with id, lesion_id, location, date, long_axis, short_axis, type.
    #[arg(value_name = "MEASUREMENTS")]
    pub measurements: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct StageArgs {
    /// Primary tumor code (Tis, T1-T4, TX).
    #[arg(long = "t", short = 't', value_name = "CODE")]
    pub t: String,

    /// Regional lymph node code (N0-N3, NX).
    #[arg(long = "n", short = 'n', value_name = "CODE")]
    pub n: String,

    /// Distant metastasis code (M0, M1, M1a-M1c, MX).
    #[arg(long = "m", short = 'm', value_name = "CODE")]
    pub m: String,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
