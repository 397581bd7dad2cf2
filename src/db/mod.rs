//! Data access for the climate dataset.
//!
//! Follows the repository pattern: the HTTP layer talks to the
//! [`ClimateRepository`] trait, and the backend is chosen at startup from
//! configuration. Two implementations exist:
//!
//! - `repositories::sqlite`: pooled, read-only access to the SQLite data
//!   file (the production backend)
//! - `repositories::local`: in-memory dataset for unit testing and local
//!   development
//!
//! The repository handle is created once in the server binary and held by
//! the HTTP application state; there is no process-global session.

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use models::{Measurement, PrecipitationRow, Station, StationRow, TemperatureRow};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use repositories::{SqliteConfig, SqliteRepository};
pub use repository::{ClimateRepository, RepositoryError, RepositoryResult};
