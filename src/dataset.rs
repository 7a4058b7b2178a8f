//! Rate dataset loading and lookup
//!
//! The dataset is a CSV file with one row per (country, city) pair, loaded
//! once at startup into an immutable `RateTable`. All lookups afterwards are
//! in-memory and read-only, so the table can be shared freely across requests.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::TripCostError;
use crate::models::{CityListing, CityRate};

/// Immutable in-memory table of per-city baseline rates.
#[derive(Debug, Clone)]
pub struct RateTable {
    rows: Vec<CityRate>,
}

impl RateTable {
    /// Load the rate table from a CSV file on disk.
    ///
    /// Fails fast: a missing file, an unreadable row, or an empty table is a
    /// startup error, not something deferred to first lookup.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, TripCostError> {
        let path = path.as_ref();
        debug!("Loading rate dataset from {}", path.display());

        let file = std::fs::File::open(path).map_err(|e| {
            TripCostError::dataset(format!("cannot open {}: {e}", path.display()))
        })?;
        let table = Self::from_reader(file)?;

        info!(
            "Loaded {} city rates across {} countries from {}",
            table.len(),
            table.countries().len(),
            path.display()
        );
        Ok(table)
    }

    /// Load the rate table from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TripCostError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();

        for (index, record) in csv_reader.deserialize::<CityRate>().enumerate() {
            // index counts data records; line 1 of the file is the header
            let row = record.map_err(|e| {
                TripCostError::dataset(format!("malformed row at line {}: {e}", index + 2))
            })?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(TripCostError::dataset("dataset contains no rows"));
        }

        Ok(Self { rows })
    }

    /// Distinct countries, in first-seen dataset order (stable across calls)
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !countries.contains(&row.country.as_str()) {
                countries.push(&row.country);
            }
        }
        countries
    }

    /// All cities belonging to a country; empty for an unknown country
    #[must_use]
    pub fn cities(&self, country: &str) -> Vec<CityListing> {
        self.rows
            .iter()
            .filter(|row| row.country == country)
            .map(CityListing::from)
            .collect()
    }

    /// Look up the rate row for a (country, city) pair.
    ///
    /// First match wins if the dataset carries duplicates.
    #[must_use]
    pub fn lookup(&self, country: &str, city: &str) -> Option<&CityRate> {
        self.rows.iter().find(|row| row.matches(country, city))
    }

    /// Number of rows in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Country,City,Distance,Airfare_INR,Train_Fare_INR,Bus_Fare_INR,Hotel_Cost_per_night_INR,Food_Cost_per_day_INR
India,Delhi,1500,5000,1200,800,2000,500
India,Mumbai,1200,4500,1100,700,2500,600
Nepal,Kathmandu,1100,6000,0,1500,1800,400
India,Delhi,9999,1,1,1,1,1
";

    fn table() -> RateTable {
        RateTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_countries_distinct_first_seen_order() {
        let table = table();
        assert_eq!(table.countries(), vec!["India", "Nepal"]);
        // Stable across calls within a process
        assert_eq!(table.countries(), table.countries());
    }

    #[test]
    fn test_cities_for_country() {
        let table = table();
        let cities = table.cities("India");
        assert_eq!(cities.len(), 3);
        assert_eq!(cities[0].city, "Delhi");
        assert_eq!(cities[0].distance_km, 1500.0);
        assert_eq!(cities[1].city, "Mumbai");
    }

    #[test]
    fn test_cities_unknown_country_is_empty() {
        assert!(table().cities("Nowhereland").is_empty());
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let table = table();
        let rate = table.lookup("India", "Delhi").unwrap();
        assert_eq!(rate.airfare, 5000.0);
        assert_eq!(rate.distance_km, 1500.0);
    }

    #[test]
    fn test_lookup_missing_pair() {
        let table = table();
        assert!(table.lookup("India", "Atlantis").is_none());
        assert!(table.lookup("Nepal", "Delhi").is_none());
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let header_only =
            "Country,City,Distance,Airfare_INR,Train_Fare_INR,Bus_Fare_INR,Hotel_Cost_per_night_INR,Food_Cost_per_day_INR\n";
        let result = RateTable::from_reader(header_only.as_bytes());
        assert!(matches!(result, Err(TripCostError::Dataset { .. })));
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let bad = "\
Country,City,Distance,Airfare_INR,Train_Fare_INR,Bus_Fare_INR,Hotel_Cost_per_night_INR,Food_Cost_per_day_INR
India,Delhi,not-a-number,5000,1200,800,2000,500
";
        let result = RateTable::from_reader(bad.as_bytes());
        assert!(matches!(result, Err(TripCostError::Dataset { .. })));
    }

    #[test]
    fn test_malformed_row_reports_file_line_number() {
        // The bad row sits on line 3 of the file (header + one good row above)
        let bad = "\
Country,City,Distance,Airfare_INR,Train_Fare_INR,Bus_Fare_INR,Hotel_Cost_per_night_INR,Food_Cost_per_day_INR
India,Delhi,1500,5000,1200,800,2000,500
India,Mumbai,not-a-number,4500,1100,700,2500,600
";
        let err = RateTable::from_reader(bad.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"), "got: {err}");
    }

    #[test]
    fn test_missing_file_fails_fast() {
        let result = RateTable::from_csv_path("no/such/file.csv");
        assert!(matches!(result, Err(TripCostError::Dataset { .. })));
    }
}
