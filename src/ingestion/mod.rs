//! Trip loading.
//!
//! Most callers should use [`load_city`] (from [`unified`]) which:
//!
//! - resolves a city to its data file through a [`crate::registry::DatasetRegistry`]
//! - loads the CSV into an in-memory [`crate::types::TripTable`]
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The format-level functions live in [`csv`].

pub mod csv;
pub mod observability;
pub mod unified;

pub use observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver};
pub use unified::{load_city, LoadOptions};
