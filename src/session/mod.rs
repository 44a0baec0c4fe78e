//! Interactive console session.
//!
//! [`Session::run`] drives the whole flow: ask for a city and time filters, load and filter the
//! trips, print the four statistics reports, offer raw-row paging, then offer a restart. Each
//! restart reloads the data from scratch.
//!
//! The session reads from any [`BufRead`] and writes to any [`Write`], so it can be scripted:
//!
//! ```no_run
//! use std::io::Cursor;
//!
//! use bikeshare_explorer::config::Settings;
//! use bikeshare_explorer::session::Session;
//!
//! # fn main() -> Result<(), bikeshare_explorer::ExplorerError> {
//! let script = Cursor::new("washington\nnone\nno\nno\n");
//! let mut session = Session::new(&Settings::default(), script, Vec::new());
//! session.run()?;
//! println!("{}", String::from_utf8_lossy(&session.into_output()));
//! # Ok(())
//! # }
//! ```

pub mod pager;
pub mod prompt;

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use chrono::Weekday;

use crate::config::Settings;
use crate::error::ExplorerResult;
use crate::ingestion::{load_city, LoadOptions, LogObserver};
use crate::processing::{filter, FilterCriteria};
use crate::registry::{City, DatasetRegistry};
use crate::stats::{station_stats, time_stats, trip_duration_stats, user_stats};
use crate::types::{parse_weekday, Month, TripTable};

pub use pager::RawPager;
pub use prompt::{ask, ask_yes_no};

const SEPARATOR_WIDTH: usize = 40;

/// Which time filters the user wants to be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    /// Parse a lower-case answer.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            "both" => Some(Self::Both),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    fn asks_month(self) -> bool {
        matches!(self, Self::Month | Self::Both)
    }

    fn asks_day(self) -> bool {
        matches!(self, Self::Day | Self::Both)
    }
}

// "all" selects no filter.
fn parse_month_choice(input: &str) -> Option<Option<Month>> {
    if input == "all" {
        return Some(None);
    }
    Month::parse(input).map(Some)
}

fn parse_day_choice(input: &str) -> Option<Option<Weekday>> {
    if input == "all" {
        return Some(None);
    }
    parse_weekday(input).map(Some)
}

/// One interactive exploration session over a pair of console streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    registry: DatasetRegistry,
    load_options: LoadOptions,
    page_size: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading data files from `settings.data_dir`.
    ///
    /// Load outcomes are reported through [`LogObserver`].
    pub fn new(settings: &Settings, input: R, output: W) -> Self {
        Self {
            input,
            output,
            registry: DatasetRegistry::new(&settings.data_dir),
            load_options: LoadOptions {
                observer: Some(Arc::new(LogObserver)),
                ..Default::default()
            },
            page_size: settings.page_size.max(1),
        }
    }

    /// Replace the load options (e.g. to attach a different observer).
    pub fn with_load_options(mut self, load_options: LoadOptions) -> Self {
        self.load_options = load_options;
        self
    }

    /// Consume the session and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run analyses until the user declines to restart.
    ///
    /// Returns [`crate::ExplorerError::InputClosed`] if input ends while a choice is pending.
    pub fn run(&mut self) -> ExplorerResult<()> {
        loop {
            let (city, criteria) = self.get_filters()?;
            self.analyze(city, &criteria)?;

            if !ask_yes_no(&mut self.input, &mut self.output, "Would you like to restart?")? {
                return Ok(());
            }
        }
    }

    /// Ask for a city and the optional month/day filters.
    pub fn get_filters(&mut self) -> ExplorerResult<(City, FilterCriteria)> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city = ask(
            &mut self.input,
            &mut self.output,
            "Would you like to see data for Chicago, New York City, or Washington?",
            "Invalid input. Please enter Chicago, New York City, or Washington.",
            City::parse,
        )?;

        let mode = ask(
            &mut self.input,
            &mut self.output,
            concat!(
                "Would you like to filter the data by month, day, both, or not at all? ",
                "Type 'none' for no time filter.",
            ),
            "Invalid input. Please enter month, day, both, or none.",
            FilterMode::parse,
        )?;

        let mut criteria = FilterCriteria::none();
        if mode.asks_month() {
            criteria.month = ask(
                &mut self.input,
                &mut self.output,
                "Which month? January, February, March, April, May, June or 'all' for no filter:",
                "Invalid input. Please enter a valid month or 'all'.",
                parse_month_choice,
            )?;
        }
        if mode.asks_day() {
            criteria.day = ask(
                &mut self.input,
                &mut self.output,
                concat!(
                    "Which day? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday ",
                    "or 'all' for no filter:",
                ),
                "Invalid input. Please enter a valid day or 'all'.",
                parse_day_choice,
            )?;
        }

        self.separator()?;
        log::info!("selected city={city} filters={criteria:?}");
        Ok((city, criteria))
    }

    fn analyze(&mut self, city: City, criteria: &FilterCriteria) -> ExplorerResult<()> {
        let table = match load_city(&self.registry, city, &self.load_options) {
            Ok(table) => filter(&table, criteria),
            Err(e) => {
                writeln!(self.output, "Could not load data for {city}: {e}")?;
                return Ok(());
            }
        };

        self.print_reports(&table)?;
        self.page_raw_data(&table)
    }

    /// Print the four statistics reports over `table`.
    pub fn print_reports(&mut self, table: &TripTable) -> ExplorerResult<()> {
        self.timed_report("Calculating The Most Frequent Times of Travel...", || {
            time_stats(table)
        })?;
        self.timed_report("Calculating The Most Popular Stations and Trip...", || {
            station_stats(table)
        })?;
        self.timed_report("Calculating Trip Duration...", || trip_duration_stats(table))?;
        self.timed_report("Calculating User Stats...", || user_stats(table))
    }

    fn timed_report<T, F>(&mut self, heading: &str, compute: F) -> ExplorerResult<()>
    where
        T: Display,
        F: FnOnce() -> T,
    {
        writeln!(self.output, "\n{heading}\n")?;
        let start = Instant::now();
        let report = compute();
        let elapsed = start.elapsed();

        write!(self.output, "{report}")?;
        writeln!(self.output, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
        self.separator()
    }

    /// Offer `page_size` raw trips at a time until the user says no or rows run out.
    pub fn page_raw_data(&mut self, table: &TripTable) -> ExplorerResult<()> {
        let question = format!(
            "Would you like to view {} rows of individual trip data?",
            self.page_size
        );
        let mut pager = RawPager::new(table, self.page_size);

        while ask_yes_no(&mut self.input, &mut self.output, &question)? {
            match pager.next_page() {
                Some(page) => writeln!(self.output, "{page}")?,
                None => {
                    writeln!(self.output, "No more rows to display.")?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn separator(&mut self) -> ExplorerResult<()> {
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }
}
