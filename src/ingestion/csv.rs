//! CSV trip loader.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{ExplorerError, ExplorerResult};
use crate::types::{ColumnSet, TripRecord, TripTable};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Cell values read as missing, matched exactly after trimming.
const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Load a trip CSV file into a [`TripTable`].
///
/// Rules:
///
/// - The CSV must have headers.
/// - Headers must contain every required trip column (order can differ, extra columns ignored).
/// - `End Time`, `Gender` and `Birth Year` are optional; their presence is recorded in
///   [`TripTable::columns`].
/// - Empty cells and the usual NA markers (`NaN`, `NULL`, `N/A`, ...) are missing values, except
///   in `Start Time`, which every trip needs.
/// - Any unparseable start time, end time, duration or birth year aborts the load, as does a
///   non-finite duration.
pub fn load_trips_from_path(path: impl AsRef<Path>) -> ExplorerResult<TripTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_trips_from_reader(&mut rdr)
}

/// Load trips from an existing CSV reader.
pub fn load_trips_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ExplorerResult<TripTable> {
    let headers = rdr.headers()?.clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut records = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based, and the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        records.push(layout.parse_record(user_row, &record)?);
    }

    Ok(TripTable::new(layout.columns(), records))
}

/// Header name -> CSV index for every column a trip table uses.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    start_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    end_time: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> ExplorerResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| ExplorerError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })
        };

        Ok(Self {
            start_time: require(START_TIME)?,
            trip_duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            end_time: find(END_TIME),
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn columns(&self) -> ColumnSet {
        ColumnSet {
            end_time: self.end_time.is_some(),
            gender: self.gender.is_some(),
            birth_year: self.birth_year.is_some(),
        }
    }

    fn parse_record(&self, row: usize, record: &csv::StringRecord) -> ExplorerResult<TripRecord> {
        let cell = |idx: usize| record.get(idx).unwrap_or("");
        let optional_cell = |idx: Option<usize>| idx.map(cell).unwrap_or("");

        let raw_start = cell(self.start_time);
        let start_time = parse_timestamp(raw_start)
            .ok_or_else(|| parse_error(row, START_TIME, raw_start, "expected timestamp"))?;

        let mut trip = TripRecord::new(start_time);

        let raw_end = optional_cell(self.end_time);
        if !is_missing(raw_end) {
            trip.end_time = Some(
                parse_timestamp(raw_end)
                    .ok_or_else(|| parse_error(row, END_TIME, raw_end, "expected timestamp"))?,
            );
        }

        trip.trip_duration = parse_number(row, TRIP_DURATION, cell(self.trip_duration))?;
        trip.start_station = text(cell(self.start_station));
        trip.end_station = text(cell(self.end_station));
        trip.user_type = text(cell(self.user_type));
        trip.gender = text(optional_cell(self.gender));
        trip.birth_year = parse_year(row, optional_cell(self.birth_year))?;

        Ok(trip)
    }
}

/// Parse a start/end timestamp in any of the accepted layouts.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

fn is_missing(raw: &str) -> bool {
    NA_VALUES.contains(&raw.trim())
}

fn text(raw: &str) -> Option<String> {
    (!is_missing(raw)).then(|| raw.trim().to_owned())
}

fn parse_number(row: usize, column: &str, raw: &str) -> ExplorerResult<Option<f64>> {
    if is_missing(raw) {
        return Ok(None);
    }
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| parse_error(row, column, raw, &e.to_string()))?;
    if !value.is_finite() {
        return Err(parse_error(row, column, raw, "expected a finite number"));
    }
    Ok(Some(value))
}

// Birth years are often exported as floats ("1989.0").
fn parse_year(row: usize, raw: &str) -> ExplorerResult<Option<i32>> {
    match parse_number(row, BIRTH_YEAR, raw)? {
        None => Ok(None),
        Some(v) if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => {
            Ok(Some(v as i32))
        }
        Some(_) => Err(parse_error(row, BIRTH_YEAR, raw, "expected a whole year")),
    }
}

fn parse_error(row: usize, column: &str, raw: &str, message: &str) -> ExplorerError {
    ExplorerError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: message.to_owned(),
    }
}
