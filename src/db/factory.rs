//! Repository factory.
//!
//! Creates repository instances based on runtime configuration (TOML file or
//! environment), so the server binary does not hardcode a backend.

use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
use super::repositories::{SqliteConfig, SqliteRepository};
use super::repository::{ClimateRepository, RepositoryError, RepositoryResult};

/// Repository backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Read-only SQLite data file
    Sqlite,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Read the backend selection from the `REPOSITORY_TYPE` environment
    /// variable. Defaults to Sqlite; the data file is the normal backend.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Sqlite);
        }
        Self::Sqlite
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn ClimateRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a SQLite repository over the configured data file.
    #[cfg(feature = "sqlite-repo")]
    pub async fn create_sqlite(config: &SqliteConfig) -> RepositoryResult<Arc<SqliteRepository>> {
        let repo = SqliteRepository::connect(config).await?;
        Ok(Arc::new(repo))
    }

    /// Create a repository from environment configuration.
    pub async fn from_env() -> RepositoryResult<Arc<dyn ClimateRepository>> {
        match RepositoryType::from_env() {
            RepositoryType::Sqlite => {
                #[cfg(feature = "sqlite-repo")]
                {
                    let config = SqliteConfig::from_env();
                    let repo = Self::create_sqlite(&config).await?;
                    Ok(repo as Arc<dyn ClimateRepository>)
                }
                #[cfg(not(feature = "sqlite-repo"))]
                {
                    Err(RepositoryError::Configuration(
                        "SQLite repository feature not enabled".to_string(),
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a repository from the default configuration file location,
    /// falling back to environment configuration when no file is found.
    pub async fn from_default_config() -> RepositoryResult<Arc<dyn ClimateRepository>> {
        match RepositoryConfig::from_default_location() {
            Ok(config) => Self::from_repository_config(&config).await,
            Err(_) => Self::from_env().await,
        }
    }

    /// Create a repository from a parsed configuration.
    pub async fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn ClimateRepository>> {
        let repo_type = config
            .repository_type()
            .map_err(|e| RepositoryError::Configuration(format!("Invalid repository type: {}", e)))?;

        match repo_type {
            RepositoryType::Sqlite => {
                #[cfg(feature = "sqlite-repo")]
                {
                    let sqlite_config = config.to_sqlite_config()?.ok_or_else(|| {
                        RepositoryError::Configuration(
                            "SQLite repository requires a [sqlite] section".to_string(),
                        )
                    })?;
                    let repo = Self::create_sqlite(&sqlite_config).await?;
                    Ok(repo as Arc<dyn ClimateRepository>)
                }
                #[cfg(not(feature = "sqlite-repo"))]
                {
                    Err(RepositoryError::Configuration(
                        "SQLite repository feature not enabled".to_string(),
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }
}
