//! Application state for the HTTP server.

use crate::db::repository::ClimateRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
///
/// The repository handle is created once at startup and cloned into each
/// handler; individual requests check connections out of the underlying
/// pool, so handlers stay stateless.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for dataset reads
    pub repository: Arc<dyn ClimateRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn ClimateRepository>) -> Self {
        Self { repository }
    }
}
