//! Descriptive trip statistics.
//!
//! Four independent reports, each computed from a [`TripTable`]:
//!
//! - [`time_stats`]: most frequent month, day of week and start hour
//! - [`station_stats`]: most frequent start station, end station and trip
//! - [`trip_duration_stats`]: total and mean duration
//! - [`user_stats`]: user type / gender breakdowns and birth year extremes
//!
//! Every metric is optional: an empty table yields `None` (or an empty ranking) rather than an
//! error. Modes break ties towards the smallest value, see [`crate::processing::mode`].

use std::fmt;

use chrono::Weekday;

use crate::processing::{mode, reduce, value_counts, ReduceOp};
use crate::types::{month_name, parse_weekday, weekday_name, TripTable};

const NO_DATA: &str = "No data available.";
const NOT_AVAILABLE: &str = "No data available for this city.";

/// A statistic over an optional column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStat<T> {
    /// The dataset has no such column.
    Unavailable,
    /// The column exists; the value may still be empty.
    Available(T),
}

impl<T> ColumnStat<T> {
    pub fn as_available(&self) -> Option<&T> {
        match self {
            ColumnStat::Available(v) => Some(v),
            ColumnStat::Unavailable => None,
        }
    }
}

/// Most frequent travel times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeStats {
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<Weekday>,
    pub most_common_hour: Option<u32>,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationStats {
    pub most_common_start_station: Option<String>,
    pub most_common_end_station: Option<String>,
    /// `"<start> to <end>"`.
    pub most_common_trip: Option<String>,
}

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DurationStats {
    pub total_seconds: Option<f64>,
    pub mean_seconds: Option<f64>,
}

/// Birth year extremes and mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<i32>,
}

/// Rider breakdowns.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Ranked user type counts.
    pub user_types: Vec<(String, usize)>,
    /// Ranked gender counts.
    pub gender: ColumnStat<Vec<(String, usize)>>,
    pub birth_year: ColumnStat<BirthYearStats>,
}

/// All four reports for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub time: TimeStats,
    pub stations: StationStats,
    pub duration: DurationStats,
    pub users: UserStats,
}

impl StatsReport {
    /// Compute every report over `table`.
    pub fn compute(table: &TripTable) -> Self {
        Self {
            time: time_stats(table),
            stations: station_stats(table),
            duration: trip_duration_stats(table),
            users: user_stats(table),
        }
    }
}

pub fn time_stats(table: &TripTable) -> TimeStats {
    let records = &table.records;
    TimeStats {
        most_common_month: mode(records.iter().map(|r| r.month())),
        // Compared by name so ties follow the same rule as every other text column.
        most_common_day: mode(records.iter().map(|r| weekday_name(r.day_of_week())))
            .and_then(parse_weekday),
        most_common_hour: mode(records.iter().map(|r| r.hour())),
    }
}

pub fn station_stats(table: &TripTable) -> StationStats {
    let records = &table.records;
    StationStats {
        most_common_start_station: mode(records.iter().filter_map(|r| r.start_station.as_deref()))
            .map(str::to_owned),
        most_common_end_station: mode(records.iter().filter_map(|r| r.end_station.as_deref()))
            .map(str::to_owned),
        most_common_trip: mode(records.iter().filter_map(|r| r.trip_label())),
    }
}

pub fn trip_duration_stats(table: &TripTable) -> DurationStats {
    let durations = || table.records.iter().map(|r| r.trip_duration);
    DurationStats {
        total_seconds: reduce(durations(), ReduceOp::Sum),
        mean_seconds: reduce(durations(), ReduceOp::Mean),
    }
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let records = &table.records;

    let gender = if table.columns.gender {
        ColumnStat::Available(ranked(records.iter().filter_map(|r| r.gender.as_deref())))
    } else {
        ColumnStat::Unavailable
    };

    let birth_year = if table.columns.birth_year {
        let years = || records.iter().map(|r| r.birth_year.map(f64::from));
        ColumnStat::Available(BirthYearStats {
            earliest: reduce(years(), ReduceOp::Min).map(|y| y as i32),
            most_recent: reduce(years(), ReduceOp::Max).map(|y| y as i32),
            most_common: mode(records.iter().filter_map(|r| r.birth_year)),
        })
    } else {
        ColumnStat::Unavailable
    };

    UserStats {
        user_types: ranked(records.iter().filter_map(|r| r.user_type.as_deref())),
        gender,
        birth_year,
    }
}

fn ranked<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    value_counts(values)
        .into_iter()
        .map(|(value, count)| (value.to_owned(), count))
        .collect()
}

struct Metric<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Metric<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str(NO_DATA),
        }
    }
}

fn write_counts(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    counts: &[(String, usize)],
) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "{title}: {NO_DATA}");
    }
    writeln!(f, "{title}:")?;
    for (value, count) in counts {
        writeln!(f, "  {value}: {count}")?;
    }
    Ok(())
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.most_common_month.and_then(month_name);
        let day = self.most_common_day.map(weekday_name);
        writeln!(f, "Most Popular Month: {}", Metric(&month))?;
        writeln!(f, "Most Popular Day: {}", Metric(&day))?;
        writeln!(f, "Most Popular Start Hour: {}", Metric(&self.most_common_hour))
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most Commonly Used Start Station: {}",
            Metric(&self.most_common_start_station)
        )?;
        writeln!(
            f,
            "Most Commonly Used End Station: {}",
            Metric(&self.most_common_end_station)
        )?;
        writeln!(f, "Most Common Trip: {}", Metric(&self.most_common_trip))
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total_seconds {
            Some(total) => writeln!(f, "Total Travel Time: {total} seconds")?,
            None => writeln!(f, "Total Travel Time: {NO_DATA}")?,
        }
        match self.mean_seconds {
            Some(mean) => writeln!(f, "Mean Travel Time: {mean:.2} seconds"),
            None => writeln!(f, "Mean Travel Time: {NO_DATA}"),
        }
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_counts(f, "User Types", &self.user_types)?;
        writeln!(f)?;

        match &self.gender {
            ColumnStat::Available(counts) => write_counts(f, "Gender Counts", counts)?,
            ColumnStat::Unavailable => writeln!(f, "Gender Counts: {NOT_AVAILABLE}")?,
        }
        writeln!(f)?;

        match &self.birth_year {
            ColumnStat::Available(years) => {
                writeln!(f, "Earliest Year of Birth: {}", Metric(&years.earliest))?;
                writeln!(f, "Most Recent Year of Birth: {}", Metric(&years.most_recent))?;
                writeln!(f, "Most Common Year of Birth: {}", Metric(&years.most_common))
            }
            ColumnStat::Unavailable => writeln!(f, "Year of Birth: {NOT_AVAILABLE}"),
        }
    }
}
