//! `bikeshare-explorer` loads a city's bike-share trip log into an in-memory
//! [`types::TripTable`], narrows it by month and/or day of week, and computes descriptive
//! statistics over the result.
//!
//! ## Pipeline
//!
//! 1. [`registry`]: [`registry::City`] -> data file, under a configurable data directory.
//! 2. [`ingestion`]: CSV -> [`types::TripTable`], with month / weekday / hour derived from
//!    `Start Time` and optional columns (`End Time`, `Gender`, `Birth Year`) detected once.
//! 3. [`processing`]: [`processing::filter()`] plus the aggregation primitives
//!    ([`processing::mode()`], [`processing::value_counts()`], [`processing::reduce()`]).
//! 4. [`stats`]: the time, station, duration and user reports.
//! 5. [`session`]: the interactive prompt loop that ties it together.
//!
//! ## Example
//!
//! ```no_run
//! use bikeshare_explorer::ingestion::{load_city, LoadOptions};
//! use bikeshare_explorer::processing::{filter, FilterCriteria};
//! use bikeshare_explorer::registry::{City, DatasetRegistry};
//! use bikeshare_explorer::stats::StatsReport;
//! use bikeshare_explorer::types::Month;
//!
//! # fn main() -> Result<(), bikeshare_explorer::ExplorerError> {
//! let registry = DatasetRegistry::new("data");
//! let trips = load_city(&registry, City::Chicago, &LoadOptions::default())?;
//! let june = filter(&trips, &FilterCriteria::new(Month::new(6), None));
//!
//! let report = StatsReport::compute(&june);
//! print!("{}", report.time);
//! print!("{}", report.users);
//! # Ok(())
//! # }
//! ```
//!
//! ### Missing data
//!
//! - An empty table is not an error: every statistic comes back as `None` or an empty ranking.
//! - A city without `Gender` / `Birth Year` yields [`stats::ColumnStat::Unavailable`] for those
//!   sections.
//! - Ties in most-frequent-value statistics resolve to the smallest value.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod registry;
pub mod session;
pub mod stats;
pub mod types;

pub use error::{ExplorerError, ExplorerResult};
