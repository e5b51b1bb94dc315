//! Command implementations.

pub mod report;

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::output::{OutputFormat, TimeFormat};

/// Settings shared by the report command, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Context {
    /// Zone to report on
    pub zone: String,

    /// Maximum notes to fetch; `None` fetches all
    pub limit: Option<u32>,

    /// Path given with `-f`
    pub output: Option<PathBuf>,

    /// Output format
    pub format: OutputFormat,

    /// Timestamp rendering
    pub time: TimeFormat,
}

impl From<&Cli> for Context {
    fn from(cli: &Cli) -> Self {
        Self {
            zone: cli.zone.clone(),
            limit: cli.limit,
            output: cli.file.clone(),
            format: cli.format,
            time: cli.time_format(),
        }
    }
}

impl Context {
    /// CSV destination: the `-f` path, or `notes_<zone>.csv`.
    pub fn csv_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("notes_{}.csv", self.zone)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn context(args: &[&str]) -> Context {
        let cli = Cli::try_parse_from(["znr", "-z", "example.com"].iter().chain(args)).unwrap();
        Context::from(&cli)
    }

    #[test]
    fn test_csv_path_defaults_to_zone_file() {
        let ctx = context(&[]);
        assert_eq!(ctx.output, None);
        assert_eq!(ctx.csv_path(), PathBuf::from("notes_example.com.csv"));
    }

    #[test]
    fn test_csv_path_uses_file_flag() {
        let ctx = context(&["-f", "out.csv"]);
        assert_eq!(ctx.csv_path(), PathBuf::from("out.csv"));
    }

    #[test]
    fn test_text_report_without_file_goes_to_stdout() {
        let ctx = context(&["--format", "text"]);
        assert_eq!(ctx.format, OutputFormat::Text);
        assert_eq!(ctx.output, None);
    }
}
