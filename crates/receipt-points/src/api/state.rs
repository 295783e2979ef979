//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::service::PointsService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Scoring, storage and listing
    pub service: Arc<PointsService>,

    /// Crate version, reported by the health endpoint
    pub version: String,
}

impl AppState {
    pub fn new(service: Arc<PointsService>) -> Self {
        Self {
            service,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
