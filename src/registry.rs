//! Static city -> data file registry.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A city with a bundled trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the city's backing CSV.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Human-readable name, as used in prompts and messages.
    pub fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Parse a city from free text (case-insensitive, surrounding whitespace ignored).
    ///
    /// Accepts the display name (`"new york city"`) and the identifier (`"new_york_city"`).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" | "new_york_city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned by [`City::from_str`] for unknown city names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCity(pub String);

impl fmt::Display for UnknownCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown city '{}'", self.0)
    }
}

impl std::error::Error for UnknownCity {}

impl FromStr for City {
    type Err = UnknownCity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::parse(s).ok_or_else(|| UnknownCity(s.to_string()))
    }
}

/// Resolves cities to data files under a single data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRegistry {
    data_dir: PathBuf,
}

impl DatasetRegistry {
    /// Create a registry rooted at `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the city CSV files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of `city`'s backing file.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::{City, DatasetRegistry};
    use std::path::Path;

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(City::parse("Chicago"), Some(City::Chicago));
        assert_eq!(City::parse("  WASHINGTON "), Some(City::Washington));
        assert_eq!(City::parse("New York City"), Some(City::NewYorkCity));
        assert_eq!(City::parse("new_york_city"), Some(City::NewYorkCity));
    }

    #[test]
    fn parse_rejects_unknown_cities() {
        assert_eq!(City::parse("Boston"), None);
        assert_eq!(City::parse(""), None);
        assert!("new york".parse::<City>().is_err());
    }

    #[test]
    fn every_city_has_a_distinct_file() {
        let mut names: Vec<_> = City::ALL.iter().map(|c| c.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), City::ALL.len());
    }

    #[test]
    fn registry_joins_data_dir() {
        let reg = DatasetRegistry::new("data");
        assert_eq!(
            reg.path_for(City::Washington),
            Path::new("data").join("washington.csv")
        );
        assert_eq!(DatasetRegistry::default().data_dir(), Path::new("."));
    }
}
