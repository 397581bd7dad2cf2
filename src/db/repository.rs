//! Repository trait and error types for climate data access.
//!
//! The trait is the seam between the HTTP layer and the storage backend;
//! implementations live in [`crate::db::repositories`].

use async_trait::async_trait;

use super::models::{PrecipitationRow, StationRow, TemperatureRow};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
///
/// Storage failures are never retried or caught inside this service; they
/// surface through these variants and map to a generic server error at the
/// HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Pool or connection failures (data file missing, pool exhausted).
    #[error("connection error: {0}")]
    Connection(String),

    /// SQL execution or row-decoding failures.
    #[error("query error: {0}")]
    Query(String),

    /// Configuration or initialization failures.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Unexpected internal errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(feature = "sqlite-repo")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                RepositoryError::Connection(err.to_string())
            }
            sqlx::Error::Configuration(e) => RepositoryError::Configuration(e.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                RepositoryError::Internal(err.to_string())
            }
            other => RepositoryError::Query(other.to_string()),
        }
    }
}

/// Read-only access to the climate dataset.
///
/// Date parameters are opaque `yyyy-mm-dd` strings compared verbatim against
/// the `date` column; malformed dates silently match nothing rather than
/// producing an error. An empty result set is a valid non-error outcome for
/// every operation.
#[async_trait]
pub trait ClimateRepository: Send + Sync {
    /// All (date, prcp) pairs, ascending by date.
    async fn all_precipitation(&self) -> RepositoryResult<Vec<PrecipitationRow>>;

    /// (date, prcp) rows whose date equals `date` exactly.
    async fn precipitation_on(&self, date: &str) -> RepositoryResult<Vec<PrecipitationRow>>;

    /// All (station, name) rows.
    async fn list_stations(&self) -> RepositoryResult<Vec<StationRow>>;

    /// (date, tobs) rows recorded at `station`.
    async fn temperatures_for_station(
        &self,
        station: &str,
    ) -> RepositoryResult<Vec<TemperatureRow>>;

    /// Temperature observations where date >= `start_date`.
    async fn temperatures_since(&self, start_date: &str) -> RepositoryResult<Vec<f64>>;

    /// Temperature observations where `start_date` <= date <= `end_date`.
    async fn temperatures_between(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> RepositoryResult<Vec<f64>>;

    /// True when the backing store answers a trivial query.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
