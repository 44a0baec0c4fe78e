//! In-memory trip table transformations.
//!
//! The processing layer operates on [`crate::types::TripTable`] values produced by ingestion.
//!
//! - [`filter()`]: month / day-of-week filtering
//! - [`reduce()`]: numeric reductions (count/sum/mean/min/max)
//! - [`mode()`] and [`value_counts()`]: frequency aggregates with a fixed tie-break
//!
//! ## Example: filter -> aggregate
//!
//! ```rust
//! use bikeshare_explorer::processing::{filter, mode, reduce, FilterCriteria, ReduceOp};
//! use bikeshare_explorer::types::{ColumnSet, Month, TripRecord, TripTable};
//! use chrono::NaiveDate;
//!
//! let at = |m, d, h| NaiveDate::from_ymd_opt(2017, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
//! let table = TripTable::new(
//!     ColumnSet::default(),
//!     vec![
//!         TripRecord::new(at(1, 2, 8)).with_duration(300.0),
//!         TripRecord::new(at(6, 5, 8)).with_duration(600.0),
//!         TripRecord::new(at(6, 6, 17)).with_duration(900.0),
//!     ],
//! );
//!
//! let june = filter(&table, &FilterCriteria::new(Month::new(6), None));
//! assert_eq!(june.len(), 2);
//!
//! let total = reduce(june.records.iter().map(|r| r.trip_duration), ReduceOp::Sum);
//! assert_eq!(total, Some(1500.0));
//!
//! // Tie between 8 and 17: the smaller hour wins.
//! assert_eq!(mode(june.records.iter().map(|r| r.hour())), Some(8));
//! ```

pub mod filter;
pub mod reduce;

pub use filter::{filter, FilterCriteria};
pub use reduce::{mode, reduce, value_counts, ReduceOp};
