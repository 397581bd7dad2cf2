//! HTTP server module for the climate API.
//!
//! Axum-based REST surface over the repository layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Path parameter extraction                              │
//! │  - JSON serialization, error mapping                      │
//! │  - CORS, compression, request tracing                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Aggregation (services/summary)                           │
//! │  - TMIN/TMAX/TAVG over temperature observations           │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - SqliteRepository / LocalRepository                     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;


pub use router::create_router;
pub use state::AppState;
