//! # Climate API
//!
//! Read-only REST API over a climate-observations dataset: precipitation and
//! temperature readings keyed by weather station and date, stored in an
//! immutable SQLite file. The service exposes a small set of GET endpoints
//! via Axum that filter the two underlying tables and, for the temperature
//! routes, reduce the result to a TMIN/TMAX/TAVG summary.
//!
//! ## Architecture
//!
//! The crate is organized into three layers:
//!
//! - [`db`]: repository trait, SQLite and in-memory implementations, and
//!   configuration for selecting between them
//! - [`services`]: aggregation logic (single-pass min/max/mean over
//!   temperature observations)
//! - [`http`]: Axum router, handlers, DTOs, and error mapping
//!
//! Dates are carried as opaque `yyyy-mm-dd` strings end to end. ISO 8601
//! date-only strings sort lexicographically in chronological order, so all
//! range filters and ascending sorts operate on the raw strings; no date
//! parsing or validation happens anywhere in the service.

pub mod db;
pub mod http;
pub mod services;
