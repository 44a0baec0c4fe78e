use bikeshare_explorer::ingestion::{load_city, LoadOptions};
use bikeshare_explorer::processing::{filter, FilterCriteria};
use bikeshare_explorer::registry::{City, DatasetRegistry};
use bikeshare_explorer::stats::{
    station_stats, time_stats, trip_duration_stats, user_stats, BirthYearStats, ColumnStat,
    StatsReport,
};
use bikeshare_explorer::types::{Month, TripTable};
use chrono::Weekday;

fn load(city: City) -> TripTable {
    load_city(
        &DatasetRegistry::new("tests/fixtures"),
        city,
        &LoadOptions::default(),
    )
    .unwrap()
}

fn counts(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
    pairs.iter().map(|(v, c)| (v.to_string(), *c)).collect()
}

#[test]
fn chicago_time_stats() {
    let table = load(City::Chicago);
    let stats = time_stats(&table);

    let mut month_counts = [0usize; 13];
    for record in &table.records {
        month_counts[record.month() as usize] += 1;
    }
    let highest = (1..=12).max_by_key(|m| (month_counts[*m], std::cmp::Reverse(*m)));

    assert_eq!(stats.most_common_month, highest.map(|m| m as u32));
    assert_eq!(stats.most_common_month, Some(6));
    assert_eq!(stats.most_common_day, Some(Weekday::Mon));
    assert_eq!(stats.most_common_hour, Some(8));
}

#[test]
fn chicago_station_stats() {
    let stats = station_stats(&load(City::Chicago));
    assert_eq!(
        stats.most_common_start_station.as_deref(),
        Some("Clark St & Elm St")
    );
    assert_eq!(
        stats.most_common_end_station.as_deref(),
        Some("Lake Shore Dr & Monroe St")
    );
    assert_eq!(
        stats.most_common_trip.as_deref(),
        Some("Clark St & Elm St to Lake Shore Dr & Monroe St")
    );
}

#[test]
fn chicago_duration_stats() {
    let stats = trip_duration_stats(&load(City::Chicago));
    assert_eq!(stats.total_seconds, Some(7290.0));
    assert_eq!(stats.mean_seconds, Some(607.5));
}

#[test]
fn chicago_user_stats() {
    let stats = user_stats(&load(City::Chicago));
    assert_eq!(
        stats.user_types,
        counts(&[("Subscriber", 8), ("Customer", 4)])
    );
    assert_eq!(
        stats.gender,
        ColumnStat::Available(counts(&[("Male", 5), ("Female", 4)]))
    );
    assert_eq!(
        stats.birth_year,
        ColumnStat::Available(BirthYearStats {
            earliest: Some(1978),
            most_recent: Some(2001),
            most_common: Some(1990),
        })
    );
}

#[test]
fn washington_user_stats_are_unavailable() {
    let stats = user_stats(&load(City::Washington));
    assert_eq!(stats.gender, ColumnStat::Unavailable);
    assert_eq!(stats.birth_year, ColumnStat::Unavailable);
    assert!(!stats.user_types.is_empty());
    assert_eq!(
        stats.user_types,
        counts(&[("Subscriber", 4), ("Customer", 2)])
    );
}

#[test]
fn new_york_counts_skip_blank_cells() {
    let stats = user_stats(&load(City::NewYorkCity));
    assert_eq!(
        stats.user_types,
        counts(&[("Subscriber", 2), ("Customer", 1)])
    );
    // Female/Male tie at one each: ascending order.
    assert_eq!(
        stats.gender,
        ColumnStat::Available(counts(&[("Female", 1), ("Male", 1)]))
    );
}

#[test]
fn empty_filtered_table_reports_no_data() {
    for city in City::ALL {
        let empty = filter(&load(city), &FilterCriteria::new(Month::new(2), Some(Weekday::Sun)));
        assert!(empty.is_empty());

        let report = StatsReport::compute(&empty);
        assert_eq!(report.time.most_common_month, None);
        assert_eq!(report.time.most_common_day, None);
        assert_eq!(report.time.most_common_hour, None);
        assert_eq!(report.stations.most_common_start_station, None);
        assert_eq!(report.stations.most_common_end_station, None);
        assert_eq!(report.stations.most_common_trip, None);
        assert_eq!(report.duration.total_seconds, None);
        assert_eq!(report.duration.mean_seconds, None);
        assert!(report.users.user_types.is_empty());
        if let Some(genders) = report.users.gender.as_available() {
            assert!(genders.is_empty());
        }
        if let Some(years) = report.users.birth_year.as_available() {
            assert_eq!(*years, BirthYearStats::default());
        }
    }
}
