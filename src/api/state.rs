//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::application::OslcApplication;
use crate::infrastructure::services::CatalogService;

/// State shared by every handler; everything in it is read-only
#[derive(Clone)]
pub struct AppState {
    pub application: Arc<OslcApplication>,
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    pub fn new(application: Arc<OslcApplication>, catalog_service: Arc<CatalogService>) -> Self {
        Self {
            application,
            catalog_service,
        }
    }
}
