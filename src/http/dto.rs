//! Data Transfer Objects for the HTTP API.
//!
//! The row shapes are defined next to the repository (they are direct
//! projections of the queried columns) and re-exported here; this module
//! adds the response types that exist only at the HTTP surface.

use serde::{Deserialize, Serialize};

pub use crate::db::models::{PrecipitationRow, StationRow, TemperatureRow};
pub use crate::services::summary::TobsSummary;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
