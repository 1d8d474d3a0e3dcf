use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::error::{FriskError, Result};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Aggregate statistics over NYPD stop-and-frisk records
#[derive(Parser, Debug, Clone)]
#[command(
    name = "frisk-stats",
    about = "Aggregate statistics over NYPD stop-and-frisk records",
    version
)]
pub struct Settings {
    /// CSV file, or directory searched recursively for CSV files
    #[arg(long, short = 'd', env = "FRISK_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"], global = true)]
    pub format: String,

    /// Skip malformed data lines instead of aborting
    #[arg(long, global = true)]
    pub skip_malformed: bool,

    /// Logging level
    #[arg(
        long,
        default_value = "WARNING",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"],
        global = true
    )]
    pub log_level: String,

    /// Log file path
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub query: Query,
}

/// The question to ask of the loaded data.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// List the years present in the data with their record counts
    Years,

    /// List the stops of one race in one year
    Population {
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
        /// Race code, matched exactly (e.g. B, W)
        #[arg(long)]
        race: String,
    },

    /// Percent of stops that were frisked and that ended in arrest
    Rates {
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
    },

    /// Female/male split of Black and White stops
    GenderBias {
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
    },

    /// Change in the share of stops matching a description between two years
    CrimeIncrease {
        /// Text searched for inside each case description (case-sensitive)
        #[arg(long)]
        description: String,
        /// Earlier year
        #[arg(long, allow_negative_numbers = true)]
        from: i32,
        /// Later year
        #[arg(long, allow_negative_numbers = true)]
        to: i32,
    },

    /// Borough with the most stops
    Borough {
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
    },

    /// Every per-year statistic, for one year or all of them
    Report {
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i32>,
    },
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and resolve derived values.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// Apply the `--debug` flag.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// The configured data path.
    pub fn data_path(&self) -> Result<&Path> {
        self.data.as_deref().ok_or_else(|| {
            FriskError::Config("no data path given; pass --data or set FRISK_DATA".to_string())
        })
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
