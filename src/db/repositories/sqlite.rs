//! SQLite repository over a pooled read-only connection.
//!
//! The data file is immutable process configuration: it is opened read-only
//! at startup and every query is a plain SELECT. Concurrent requests check
//! connections out of the pool independently, so no synchronization beyond
//! the pool itself is needed.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::db::models::{PrecipitationRow, StationRow, TemperatureRow};
use crate::db::repository::{ClimateRepository, RepositoryError, RepositoryResult};

/// Connection settings for the SQLite backend.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Path to the climate data file.
    pub database_path: PathBuf,
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// Seconds to wait when acquiring a connection.
    pub connect_timeout_sec: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("resources/hawaii.sqlite"),
            max_connections: 5,
            connect_timeout_sec: 30,
        }
    }
}

impl SqliteConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// `DATABASE_PATH` overrides the data file location.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }
        config
    }
}

/// SQLite implementation of [`ClimateRepository`].
#[derive(Debug)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Open the data file read-only and build the connection pool.
    ///
    /// Fails if the file does not exist; the service never creates or
    /// migrates the dataset.
    pub async fn connect(config: &SqliteConfig) -> RepositoryResult<Self> {
        if !config.database_path.exists() {
            return Err(RepositoryError::Configuration(format!(
                "climate data file not found: {}",
                config.database_path.display()
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_sec))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl ClimateRepository for SqliteRepository {
    async fn all_precipitation(&self) -> RepositoryResult<Vec<PrecipitationRow>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            "SELECT date, prcp FROM measurement ORDER BY date ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn precipitation_on(&self, date: &str) -> RepositoryResult<Vec<PrecipitationRow>> {
        let rows =
            sqlx::query_as::<_, PrecipitationRow>("SELECT date, prcp FROM measurement WHERE date = ?")
                .bind(date)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn list_stations(&self) -> RepositoryResult<Vec<StationRow>> {
        let rows = sqlx::query_as::<_, StationRow>("SELECT station, name FROM station")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn temperatures_for_station(
        &self,
        station: &str,
    ) -> RepositoryResult<Vec<TemperatureRow>> {
        let rows = sqlx::query_as::<_, TemperatureRow>(
            "SELECT date, tobs FROM measurement WHERE station = ?",
        )
        .bind(station)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn temperatures_since(&self, start_date: &str) -> RepositoryResult<Vec<f64>> {
        let temps = sqlx::query_scalar::<_, f64>("SELECT tobs FROM measurement WHERE date >= ?")
            .bind(start_date)
            .fetch_all(&self.pool)
            .await?;
        Ok(temps)
    }

    async fn temperatures_between(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> RepositoryResult<Vec<f64>> {
        let temps = sqlx::query_scalar::<_, f64>(
            "SELECT tobs FROM measurement WHERE date >= ? AND date <= ?",
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;
        Ok(temps)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        let one = sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(one == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Write a small dataset to `path` with a separate read-write pool, then
    /// drop the pool so the repository can reopen the file read-only.
    async fn seed_database(path: &std::path::Path) {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await.unwrap();

        sqlx::query(
            "CREATE TABLE measurement (
                id INTEGER PRIMARY KEY,
                station TEXT,
                date TEXT,
                prcp FLOAT,
                tobs FLOAT
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT)")
            .execute(&pool)
            .await
            .unwrap();

        let measurements: [(&str, &str, Option<f64>, f64); 4] = [
            ("USC00519281", "2017-08-01", Some(0.05), 77.0),
            ("USC00519281", "2017-08-02", Some(0.25), 80.0),
            ("USC00514830", "2017-08-01", None, 82.0),
            ("USC00514830", "2017-08-03", Some(0.0), 76.0),
        ];
        for (station, date, prcp, tobs) in measurements {
            sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
                .bind(station)
                .bind(date)
                .bind(prcp)
                .bind(tobs)
                .execute(&pool)
                .await
                .unwrap();
        }
        sqlx::query("INSERT INTO station (station, name) VALUES (?, ?), (?, ?)")
            .bind("USC00519281")
            .bind("WAIHEE 837.5, HI US")
            .bind("USC00514830")
            .bind("KUALOA RANCH HEADQUARTERS 886.9, HI US")
            .execute(&pool)
            .await
            .unwrap();

        pool.close().await;
    }

    async fn seeded_repository(dir: &tempfile::TempDir) -> SqliteRepository {
        let path = dir.path().join("climate.sqlite");
        seed_database(&path).await;
        let config = SqliteConfig {
            database_path: path,
            ..SqliteConfig::default()
        };
        SqliteRepository::connect(&config).await.unwrap()
    }

    #[tokio::test]
    async fn connect_fails_for_missing_file() {
        let config = SqliteConfig {
            database_path: PathBuf::from("/nonexistent/climate.sqlite"),
            ..SqliteConfig::default()
        };
        let err = SqliteRepository::connect(&config).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Configuration(_)));
    }

    #[tokio::test]
    async fn queries_filter_and_order_rows() {
        let dir = tempfile::tempdir().unwrap();
        let repo = seeded_repository(&dir).await;

        let all = repo.all_precipitation().await.unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].date <= w[1].date));

        let on_date = repo.precipitation_on("2017-08-01").await.unwrap();
        assert_eq!(on_date.len(), 2);
        assert!(on_date.iter().any(|r| r.prcp.is_none()));

        let stations = repo.list_stations().await.unwrap();
        assert_eq!(stations.len(), 2);

        let for_station = repo.temperatures_for_station("USC00519281").await.unwrap();
        assert_eq!(for_station.len(), 2);

        let since = repo.temperatures_since("2017-08-02").await.unwrap();
        assert_eq!(since, vec![80.0, 76.0]);

        let between = repo
            .temperatures_between("2017-08-01", "2017-08-02")
            .await
            .unwrap();
        assert_eq!(between.len(), 3);

        assert!(repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn malformed_date_matches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = seeded_repository(&dir).await;

        assert!(repo.precipitation_on("08/01/2017").await.unwrap().is_empty());
        assert!(repo
            .temperatures_since("9999-99-99")
            .await
            .unwrap()
            .is_empty());
    }
}
