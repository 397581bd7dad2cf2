//! In-memory repository for unit testing and local development.
//!
//! Holds the full dataset in two vectors and answers queries with iterator
//! filters. Construction fixes the contents; the service never writes, so no
//! interior mutability is needed.

use async_trait::async_trait;

use crate::db::models::{Measurement, PrecipitationRow, Station, StationRow, TemperatureRow};
use crate::db::repository::{ClimateRepository, RepositoryResult};

/// In-memory implementation of [`ClimateRepository`].
#[derive(Debug, Default)]
pub struct LocalRepository {
    measurements: Vec<Measurement>,
    stations: Vec<Station>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository over the given dataset.
    pub fn with_data(measurements: Vec<Measurement>, stations: Vec<Station>) -> Self {
        Self {
            measurements,
            stations,
        }
    }
}

#[async_trait]
impl ClimateRepository for LocalRepository {
    async fn all_precipitation(&self) -> RepositoryResult<Vec<PrecipitationRow>> {
        let mut rows: Vec<PrecipitationRow> = self
            .measurements
            .iter()
            .map(|m| PrecipitationRow {
                date: m.date.clone(),
                prcp: m.prcp,
            })
            .collect();
        // Stable sort keeps insertion order within a date, matching the
        // traversal order the mapping shape relies on.
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(rows)
    }

    async fn precipitation_on(&self, date: &str) -> RepositoryResult<Vec<PrecipitationRow>> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| m.date == date)
            .map(|m| PrecipitationRow {
                date: m.date.clone(),
                prcp: m.prcp,
            })
            .collect())
    }

    async fn list_stations(&self) -> RepositoryResult<Vec<StationRow>> {
        Ok(self
            .stations
            .iter()
            .map(|s| StationRow {
                station: s.station.clone(),
                name: s.name.clone(),
            })
            .collect())
    }

    async fn temperatures_for_station(
        &self,
        station: &str,
    ) -> RepositoryResult<Vec<TemperatureRow>> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| m.station == station)
            .map(|m| TemperatureRow {
                date: m.date.clone(),
                tobs: m.tobs,
            })
            .collect())
    }

    async fn temperatures_since(&self, start_date: &str) -> RepositoryResult<Vec<f64>> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| m.date.as_str() >= start_date)
            .map(|m| m.tobs)
            .collect())
    }

    async fn temperatures_between(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> RepositoryResult<Vec<f64>> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| m.date.as_str() >= start_date && m.date.as_str() <= end_date)
            .map(|m| m.tobs)
            .collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
        Measurement {
            station: station.to_string(),
            date: date.to_string(),
            prcp,
            tobs,
        }
    }

    fn sample_repo() -> LocalRepository {
        LocalRepository::with_data(
            vec![
                measurement("USC00519281", "2017-08-02", Some(0.25), 80.0),
                measurement("USC00519281", "2017-08-01", Some(0.05), 77.0),
                measurement("USC00514830", "2017-08-01", None, 82.0),
                measurement("USC00514830", "2017-08-03", Some(0.0), 76.0),
            ],
            vec![
                Station {
                    station: "USC00519281".to_string(),
                    name: "WAIHEE 837.5, HI US".to_string(),
                },
                Station {
                    station: "USC00514830".to_string(),
                    name: "KUALOA RANCH HEADQUARTERS 886.9, HI US".to_string(),
                },
            ],
        )
    }

    #[tokio::test]
    async fn all_precipitation_is_ascending_by_date() {
        let rows = sample_repo().all_precipitation().await.unwrap();
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2017-08-01", "2017-08-01", "2017-08-02", "2017-08-03"]
        );
    }

    #[tokio::test]
    async fn precipitation_on_matches_exact_date_only() {
        let rows = sample_repo().precipitation_on("2017-08-01").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.date == "2017-08-01"));
        // No partial matching: a date prefix matches nothing.
        let rows = sample_repo().precipitation_on("2017-08").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn temperatures_for_station_filters_by_station() {
        let rows = sample_repo()
            .temperatures_for_station("USC00519281")
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        let tobs: Vec<f64> = rows.iter().map(|r| r.tobs).collect();
        assert_eq!(tobs, vec![80.0, 77.0]);
    }

    #[tokio::test]
    async fn temperatures_since_is_inclusive() {
        let repo = sample_repo();
        let temps = repo.temperatures_since("2017-08-02").await.unwrap();
        assert_eq!(temps, vec![80.0, 76.0]);
        // A start past the dataset yields an empty, non-error result.
        let temps = repo.temperatures_since("2018-01-01").await.unwrap();
        assert!(temps.is_empty());
    }

    #[tokio::test]
    async fn temperatures_between_is_inclusive_on_both_ends() {
        let temps = sample_repo()
            .temperatures_between("2017-08-01", "2017-08-02")
            .await
            .unwrap();
        assert_eq!(temps.len(), 3);
    }

    #[tokio::test]
    async fn malformed_date_yields_empty_not_error() {
        let repo = sample_repo();
        assert!(repo.precipitation_on("08/01/2017").await.unwrap().is_empty());
        assert!(repo
            .temperatures_between("not-a-date", "also-not")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn list_stations_returns_all_rows() {
        let rows = sample_repo().list_stations().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].station, "USC00519281");
    }
}
