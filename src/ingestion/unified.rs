//! City-level load entrypoint.
//!
//! Most callers should use [`load_city`], which resolves a [`City`] through a
//! [`DatasetRegistry`], loads its CSV into a [`TripTable`] and, if an
//! [`LoadObserver`] is configured, reports the outcome to it.

use std::fmt;
use std::sync::Arc;

use crate::error::{ExplorerError, ExplorerResult};
use crate::registry::{City, DatasetRegistry};
use crate::types::TripTable;

use super::csv;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling [`load_city`].
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load the full trip table for `city`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use bikeshare_explorer::ingestion::{load_city, LoadOptions, LogObserver};
/// use bikeshare_explorer::registry::{City, DatasetRegistry};
///
/// # fn main() -> Result<(), bikeshare_explorer::ExplorerError> {
/// let registry = DatasetRegistry::new("data");
/// let opts = LoadOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let trips = load_city(&registry, City::Chicago, &opts)?;
/// println!("trips={}", trips.len());
/// # Ok(())
/// # }
/// ```
pub fn load_city(
    registry: &DatasetRegistry,
    city: City,
    options: &LoadOptions,
) -> ExplorerResult<TripTable> {
    let path = registry.path_for(city);
    let result = csv::load_trips_from_path(&path);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = LoadContext { city, path };
        match &result {
            Ok(table) => obs.on_success(&ctx, LoadStats { rows: table.len() }),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &ExplorerError) -> LoadSeverity {
    match e {
        ExplorerError::Io(_) => LoadSeverity::Critical,
        ExplorerError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        ExplorerError::SchemaMismatch { .. } | ExplorerError::ParseError { .. } => {
            LoadSeverity::Error
        }
        ExplorerError::InputClosed => LoadSeverity::Warning,
    }
}
