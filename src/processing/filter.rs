//! Month / day-of-week filtering for [`crate::types::TripTable`].

use chrono::Weekday;

use crate::types::{weekday_name, Month, TripRecord, TripTable};

/// Optional month and day-of-week selectors. `None` means "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterCriteria {
    /// Criteria that keep every record.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(month: Option<Month>, day: Option<Weekday>) -> Self {
        Self { month, day }
    }

    /// `true` when neither selector is set.
    pub fn is_unfiltered(&self) -> bool {
        self.month.is_none() && self.day.is_none()
    }

    /// Whether `record` satisfies every set selector.
    pub fn matches(&self, record: &TripRecord) -> bool {
        let month_ok = self.month.is_none_or(|m| record.month() == m.number());
        let day_ok = self.day.is_none_or(|d| record.day_of_week() == d);
        month_ok && day_ok
    }
}

/// Returns a new [`TripTable`] containing only records matching `criteria`.
///
/// With no selectors set the result equals the input. An empty result is not an error.
pub fn filter(table: &TripTable, criteria: &FilterCriteria) -> TripTable {
    if criteria.is_unfiltered() {
        return table.clone();
    }

    let out = table.filter_records(|record| criteria.matches(record));
    log::debug!(
        "filter month={:?} day={:?}: {} -> {} trips",
        criteria.month.map(Month::number),
        criteria.day.map(weekday_name),
        table.len(),
        out.len()
    );
    out
}
