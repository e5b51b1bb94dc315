//! Command-line argument definitions using clap.

use clap::Parser;
use dynect_client::{PollConfig, DEFAULT_BASE_URL, DEFAULT_MAX_POLLS};
use std::path::PathBuf;
use std::time::Duration;

use crate::output::{OutputFormat, TimeFormat};

/// Zone note report for DynECT managed DNS
///
/// Logs in, fetches the change notes of a zone and writes them to a CSV
/// file (default notes_<zone>.csv), or prints a text report that also lists
/// the zone's nodes.
///
/// Credentials are read from config.ini (keys cn, un, pw).
#[derive(Parser, Debug)]
#[command(name = "znr")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  znr -z example.com -l 10 -e -f zone_notes.csv")]
pub struct Cli {
    /// Name of zone
    #[arg(short = 'z', long)]
    pub zone: String,

    /// Maximum number of notes to retrieve (newest first)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Output file [default for csv: notes_<zone>.csv; text and json print to stdout]
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Use epoch time instead of a formatted time
    #[arg(short = 'e', long)]
    pub epoch: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Credentials file [default: ./config.ini, then the user config directory]
    #[arg(short = 'c', long, env = "ZNR_CONFIG")]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, env = "ZNR_API_URL", default_value = DEFAULT_BASE_URL, hide_default_value = true)]
    pub api_url: String,

    /// Seconds to wait between polls of an incomplete job
    #[arg(long, env = "ZNR_POLL_INTERVAL", default_value_t = 5)]
    pub poll_interval: u64,

    /// Give up on a job after this many polls (0 = never give up)
    #[arg(long, env = "ZNR_MAX_POLLS", default_value_t = DEFAULT_MAX_POLLS)]
    pub max_polls: u32,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Job polling policy requested on the command line.
    pub const fn poll_config(&self) -> PollConfig {
        let config = PollConfig::new().interval(Duration::from_secs(self.poll_interval));
        if self.max_polls == 0 {
            config.unbounded()
        } else {
            config.max_attempts(self.max_polls)
        }
    }

    /// Timestamp rendering requested on the command line.
    pub const fn time_format(&self) -> TimeFormat {
        TimeFormat::from_epoch_flag(self.epoch)
    }
}
