//! Core data model: trip records, trip tables and the calendar types used to filter them.
//!
//! A [`TripTable`] is an ordered list of [`TripRecord`]s plus a [`ColumnSet`] that records,
//! once at load time, which optional columns the source file provided.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Which optional columns a trip dataset provides.
///
/// The required columns (start time, duration, stations, user type) are always present in a
/// loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnSet {
    /// `End Time` column present.
    pub end_time: bool,
    /// `Gender` column present.
    pub gender: bool,
    /// `Birth Year` column present.
    pub birth_year: bool,
}

impl ColumnSet {
    /// Column set with every optional column present.
    pub fn all() -> Self {
        Self {
            end_time: true,
            gender: true,
            birth_year: true,
        }
    }
}

/// One bike rental.
///
/// The calendar fields (`month`, `day_of_week`, `hour`) are derived from the start time when the
/// record is built and cannot drift from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    start_time: NaiveDateTime,
    month: u32,
    day_of_week: Weekday,
    hour: u32,
    /// End of the trip, if the dataset records it.
    pub end_time: Option<NaiveDateTime>,
    /// Trip duration in seconds.
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Create a record starting at `start_time`; every other field starts out missing.
    pub fn new(start_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            hour: start_time.hour(),
            end_time: None,
            trip_duration: None,
            start_station: None,
            end_station: None,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_end_time(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.trip_duration = Some(seconds);
        self
    }

    pub fn with_stations(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_station = Some(start.into());
        self.end_station = Some(end.into());
        self
    }

    pub fn with_user_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Trip start timestamp.
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Calendar month of the start time (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of week of the start time.
    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    /// Hour of day of the start time (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// `"<start> to <end>"`, when both stations are known.
    pub fn trip_label(&self) -> Option<String> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some(format!("{start} to {end}")),
            _ => None,
        }
    }
}

/// In-memory trip dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    /// Optional columns the source provided.
    pub columns: ColumnSet,
    /// Records in source order.
    pub records: Vec<TripRecord>,
}

impl TripTable {
    /// Create a table from a column set and records.
    pub fn new(columns: ColumnSet, records: Vec<TripRecord>) -> Self {
        Self { columns, records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a new table containing only records that match `predicate`.
    ///
    /// The returned table keeps the original column set.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&TripRecord) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        Self {
            columns: self.columns,
            records,
        }
    }
}

/// A month that can be used as a filter: January (1) through June (6).
///
/// The datasets only cover the first half of the year, so later months are never offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month(u32);

impl Month {
    /// Names of the filterable months, lower-case, in calendar order.
    pub const NAMES: [&'static str; 6] = ["january", "february", "march", "april", "may", "june"];

    /// Build a filter month from its number; `None` outside 1..=6.
    pub fn new(number: u32) -> Option<Self> {
        (1..=6).contains(&number).then_some(Self(number))
    }

    /// Parse a full month name (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        let lower = input.trim().to_ascii_lowercase();
        Self::NAMES
            .iter()
            .position(|name| *name == lower)
            .and_then(|idx| Self::new(idx as u32 + 1))
    }

    /// Month number, 1-6.
    pub fn number(self) -> u32 {
        self.0
    }

    /// Every filterable month, in calendar order.
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=6).map(Month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(month_name(self.0).unwrap_or("Unknown"))
    }
}

/// English name of a calendar month number (1-12).
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| chrono::Month::try_from(n).ok())
        .map(|m| m.name())
}

/// Title-case English name of a weekday, as shown in reports.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a full weekday name (case-insensitive). Abbreviations are rejected.
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    match input.trim().to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Every weekday, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    #[test]
    fn record_derives_calendar_fields() {
        // 2017-06-05 was a Monday.
        let rec = TripRecord::new(ts(2017, 6, 5, 17));
        assert_eq!(rec.month(), 6);
        assert_eq!(rec.day_of_week(), Weekday::Mon);
        assert_eq!(rec.hour(), 17);
        assert_eq!(rec.gender, None);
    }

    #[test]
    fn end_time_does_not_change_derived_fields() {
        let rec = TripRecord::new(ts(2017, 6, 30, 23)).with_end_time(ts(2017, 7, 1, 0));
        assert_eq!(rec.end_time, Some(ts(2017, 7, 1, 0)));
        assert_eq!(rec.month(), 6);
        assert_eq!(rec.hour(), 23);
    }

    #[test]
    fn trip_label_needs_both_stations() {
        let rec = TripRecord::new(ts(2017, 1, 2, 8)).with_stations("A", "B");
        assert_eq!(rec.trip_label().as_deref(), Some("A to B"));

        let mut partial = rec.clone();
        partial.end_station = None;
        assert_eq!(partial.trip_label(), None);
    }

    #[test]
    fn month_is_limited_to_first_half_of_year() {
        assert_eq!(Month::new(0), None);
        assert_eq!(Month::new(7), None);
        assert_eq!(Month::new(6).map(Month::number), Some(6));
        assert_eq!(Month::all().count(), 6);
    }

    #[test]
    fn month_parse_accepts_full_names_only() {
        assert_eq!(Month::parse("June"), Month::new(6));
        assert_eq!(Month::parse(" JANUARY "), Month::new(1));
        assert_eq!(Month::parse("july"), None);
        assert_eq!(Month::parse("jun"), None);
        assert_eq!(Month::new(3).unwrap().to_string(), "March");
    }

    #[test]
    fn month_name_covers_whole_year() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn weekday_parse_round_trips_names() {
        for day in WEEKDAYS {
            assert_eq!(parse_weekday(weekday_name(day)), Some(day));
        }
        assert_eq!(parse_weekday("MONDAY"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("mon"), None);
    }

    #[test]
    fn filter_records_keeps_columns_and_input() {
        let table = TripTable::new(
            ColumnSet::all(),
            vec![
                TripRecord::new(ts(2017, 1, 2, 8)),
                TripRecord::new(ts(2017, 2, 2, 9)),
            ],
        );
        let out = table.filter_records(|r| r.month() == 2);
        assert_eq!(out.columns, ColumnSet::all());
        assert_eq!(out.len(), 1);
        assert_eq!(table.len(), 2);

        let none = table.filter_records(|_| false);
        assert!(none.is_empty());
    }
}
