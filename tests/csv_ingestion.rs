use bikeshare_explorer::ingestion::csv::{load_trips_from_path, load_trips_from_reader};
use bikeshare_explorer::ingestion::{load_city, LoadOptions};
use bikeshare_explorer::registry::{City, DatasetRegistry};
use bikeshare_explorer::types::ColumnSet;
use chrono::Weekday;

fn fixtures() -> DatasetRegistry {
    DatasetRegistry::new("tests/fixtures")
}

#[test]
fn load_chicago_happy_path() {
    let table = load_city(&fixtures(), City::Chicago, &LoadOptions::default()).unwrap();

    assert_eq!(table.len(), 12);
    assert_eq!(table.columns, ColumnSet::all());

    let first = &table.records[0];
    assert_eq!(first.month(), 1);
    assert_eq!(first.day_of_week(), Weekday::Mon);
    assert_eq!(first.hour(), 8);
    assert_eq!(first.trip_duration, Some(300.0));
    assert_eq!(first.start_station.as_deref(), Some("Clark St & Elm St"));
    assert_eq!(first.birth_year, Some(1985));
}

#[test]
fn load_preserves_source_order() {
    let table = load_trips_from_path("tests/fixtures/chicago.csv").unwrap();
    let durations: Vec<_> = table.records.iter().filter_map(|r| r.trip_duration).collect();
    assert_eq!(
        durations,
        vec![300.0, 420.0, 610.0, 200.0, 980.0, 1500.0, 330.0, 450.0, 700.0, 380.0, 520.0, 900.0]
    );
}

#[test]
fn washington_has_no_demographic_columns() {
    let table = load_city(&fixtures(), City::Washington, &LoadOptions::default()).unwrap();
    assert_eq!(table.len(), 6);
    assert!(table.columns.end_time);
    assert!(!table.columns.gender);
    assert!(!table.columns.birth_year);
    assert_eq!(table.records[1].trip_duration, Some(489.066));
}

#[test]
fn new_york_handles_quoted_fields_and_blanks() {
    let table = load_city(&fixtures(), City::NewYorkCity, &LoadOptions::default()).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.records[0].hour(), 0);
    assert_eq!(table.records[2].gender, None);
    assert_eq!(table.records[3].user_type, None);
    assert_eq!(
        table.records[3].trip_label().as_deref(),
        Some("W 21 St & 6 Ave to 9 Ave & W 45 St")
    );
}

#[test]
fn load_allows_reordered_columns() {
    let input = "User Type,End Station,Start Station,Trip Duration,Start Time\n\
                 Subscriber,B,A,60,2017-02-01 10:00:00\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let table = load_trips_from_reader(&mut rdr).unwrap();
    assert_eq!(table.records[0].start_station.as_deref(), Some("A"));
    assert_eq!(table.records[0].end_station.as_deref(), Some("B"));
    assert_eq!(table.records[0].month(), 2);
}

#[test]
fn load_errors_on_missing_required_column() {
    let registry = DatasetRegistry::new("tests/fixtures/broken");
    let err = load_city(&registry, City::Washington, &LoadOptions::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'User Type'"));
}

#[test]
fn load_aborts_on_unparseable_start_time() {
    let registry = DatasetRegistry::new("tests/fixtures/broken");
    let err = load_city(&registry, City::Chicago, &LoadOptions::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value at row 3"));
    assert!(msg.contains("column 'Start Time'"));
}

#[test]
fn load_errors_on_missing_file() {
    let registry = DatasetRegistry::new("tests/fixtures/does_not_exist");
    let err = load_city(&registry, City::Chicago, &LoadOptions::default()).unwrap_err();
    assert!(err.to_string().contains("csv error"));
}
