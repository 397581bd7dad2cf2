//! Entity and row types for the climate dataset.
//!
//! The dataset holds two tables, `measurement` and `station`. The schema is
//! declared statically here rather than reflected from the data file at
//! startup; the field names match the columns in the SQLite file.

use serde::{Deserialize, Serialize};

/// A single dated observation at one station.
///
/// `prcp` is nullable in the dataset (gauges that did not report
/// precipitation that day); `tobs` is always present. No uniqueness is
/// enforced across (station, date) pairs — duplicates pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub station: String,
    /// Observation date as an opaque `yyyy-mm-dd` string.
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

/// A named weather-observation site with a unique station code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub station: String,
    pub name: String,
}

/// Projection of a measurement onto (date, prcp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite-repo", derive(sqlx::FromRow))]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Projection of a station onto (station, name). Field order is part of the
/// response contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite-repo", derive(sqlx::FromRow))]
pub struct StationRow {
    pub station: String,
    pub name: String,
}

/// Projection of a measurement onto (date, tobs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlite-repo", derive(sqlx::FromRow))]
pub struct TemperatureRow {
    pub date: String,
    pub tobs: f64,
}
