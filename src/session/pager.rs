//! Raw trip paging.

use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;

use crate::types::{TripRecord, TripTable};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Walks a [`TripTable`] a fixed number of records at a time.
#[derive(Debug)]
pub struct RawPager<'a> {
    table: &'a TripTable,
    position: usize,
    page_size: usize,
}

impl<'a> RawPager<'a> {
    /// Create a pager starting at the first record.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn new(table: &'a TripTable, page_size: usize) -> Self {
        Self {
            table,
            position: 0,
            page_size: page_size.max(1),
        }
    }

    /// Index of the next record to show.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.table.len()
    }

    /// Render the next page, or `None` once every record has been shown.
    pub fn next_page(&mut self) -> Option<Table> {
        if self.is_exhausted() {
            return None;
        }
        let end = (self.position + self.page_size).min(self.table.len());

        let mut out = Table::new();
        out.load_preset(ASCII_FULL).set_header(self.header());
        for (idx, record) in self.table.records[self.position..end].iter().enumerate() {
            out.add_row(self.row(self.position + idx, record));
        }

        self.position = end;
        Some(out)
    }

    fn header(&self) -> Vec<&'static str> {
        let columns = self.table.columns;
        let mut header = vec!["#", "Start Time"];
        if columns.end_time {
            header.push("End Time");
        }
        header.extend(["Trip Duration", "Start Station", "End Station", "User Type"]);
        if columns.gender {
            header.push("Gender");
        }
        if columns.birth_year {
            header.push("Birth Year");
        }
        header
    }

    fn row(&self, index: usize, record: &TripRecord) -> Vec<String> {
        let columns = self.table.columns;
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        let mut row = vec![
            index.to_string(),
            record.start_time().format(TIMESTAMP_FORMAT).to_string(),
        ];
        if columns.end_time {
            row.push(
                record
                    .end_time
                    .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                    .unwrap_or_default(),
            );
        }
        row.push(record.trip_duration.map(|d| d.to_string()).unwrap_or_default());
        row.push(text(&record.start_station));
        row.push(text(&record.end_station));
        row.push(text(&record.user_type));
        if columns.gender {
            row.push(text(&record.gender));
        }
        if columns.birth_year {
            row.push(record.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        row
    }
}
