//! Command-line configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Explore US bike-share trip data from the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv.
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Number of raw trips shown per page.
    #[arg(long, default_value_t = 5, value_parser = parse_page_size)]
    pub page_size: usize,

    /// Increase log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub page_size: usize,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: 5,
            log_level: LevelFilter::Warn,
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        let log_level = match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };
        Self {
            data_dir: cli.data_dir,
            page_size: cli.page_size,
            log_level,
        }
    }
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
