//! CLI argument definitions for marketrecap.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `run` | Fetch all feeds, print the report and save it (default) |
//! | `probe-treasury` | Issue one Alpha Vantage treasury request and describe the answer |
//!
//! # Global Options
//!
//! | Option | Env | Description |
//! |--------|-----|-------------|
//! | `--alphavantage-key` | `MARKETRECAP_ALPHAVANTAGE_API_KEY`, `ALPHAVANTAGE_API_KEY` | Mandatory |
//! | `--fred-key` | `FRED_API_KEY` | Enables FRED short rates |
//! | `--anthropic-key` | `ANTHROPIC_API_KEY` | Enables the narrative |
//! | `--timeout-ms` | | Per-request feed timeout |
//! | `--no-pacing` | | Skip pauses between per-item requests |
//! | `--log-level` | `MARKETRECAP_LOG` | Tracing filter, overrides `RUST_LOG` |
//!
//! # Examples
//!
//! ```bash
//! # Closing-price recap, written to ./reports
//! marketrecap run --output-dir reports
//!
//! # Spot update printed only
//! marketrecap run --mode spot --no-write
//!
//! # Why is the treasury yield missing?
//! marketrecap probe-treasury --log-level debug
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use marketrecap_core::{ReportMode, TreasuryMaturity};

/// Crypto, Treasury and short-rate market recap generator.
#[derive(Debug, Parser)]
#[command(
    name = "marketrecap",
    author,
    version,
    about = "Crypto, Treasury and short-rate market recap generator"
)]
pub struct Cli {
    /// Alpha Vantage API key (mandatory).
    #[arg(
        long,
        global = true,
        env = "MARKETRECAP_ALPHAVANTAGE_API_KEY",
        hide_env_values = true
    )]
    pub alphavantage_key: Option<String>,

    /// FRED API key. Without it short rates come from Alpha Vantage.
    #[arg(long, global = true, env = "FRED_API_KEY", hide_env_values = true)]
    pub fred_key: Option<String>,

    /// Anthropic API key. Without it the correlation section uses canned text.
    #[arg(long, global = true, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_key: Option<String>,

    /// Per-request timeout for the data feeds in milliseconds.
    #[arg(long, global = true, default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Skip the fixed pauses between per-item requests.
    #[arg(long, global = true, default_value_t = false)]
    pub no_pacing: bool,

    /// Model used for the narrative.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Tracing filter such as `info` or `marketrecap_core=debug`.
    #[arg(long, global = true, env = "MARKETRECAP_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run; a bare invocation means `run` with defaults.
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Run(RunArgs::default()))
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch all feeds, print the report and save it.
    Run(RunArgs),
    /// Issue one Alpha Vantage TREASURY_YIELD request and describe the response.
    ProbeTreasury(ProbeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Spot prices with 24h change, or day-over-day closes.
    #[arg(long, value_enum, default_value_t = ModeArg::Closing)]
    pub mode: ModeArg,

    /// Directory the report file is written to.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the report without writing a file.
    #[arg(long, default_value_t = false)]
    pub no_write: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            mode: ModeArg::Closing,
            output_dir: PathBuf::from("."),
            no_write: false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ProbeArgs {
    #[arg(long, value_enum, default_value_t = MaturityArg::TenYear)]
    pub maturity: MaturityArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Spot,
    Closing,
}

impl From<ModeArg> for ReportMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Spot => Self::Spot,
            ModeArg::Closing => Self::Closing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaturityArg {
    #[value(name = "3month")]
    ThreeMonth,
    #[value(name = "2year")]
    TwoYear,
    #[value(name = "5year")]
    FiveYear,
    #[value(name = "7year")]
    SevenYear,
    #[value(name = "10year")]
    TenYear,
    #[value(name = "30year")]
    ThirtyYear,
}

impl From<MaturityArg> for TreasuryMaturity {
    fn from(value: MaturityArg) -> Self {
        match value {
            MaturityArg::ThreeMonth => Self::ThreeMonth,
            MaturityArg::TwoYear => Self::TwoYear,
            MaturityArg::FiveYear => Self::FiveYear,
            MaturityArg::SevenYear => Self::SevenYear,
            MaturityArg::TenYear => Self::TenYear,
            MaturityArg::ThirtyYear => Self::ThirtyYear,
        }
    }
}
