//! OSLC discovery endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{ResourceShape, ServiceProvider, ServiceProviderCatalog};

/// Routes mounted under `/services`
pub fn create_oslc_router() -> Router<AppState> {
    Router::new()
        .route("/catalog/singleton", get(get_catalog))
        .route("/serviceProviders/{model}", get(get_service_provider))
        .route("/resourceShapes", get(list_resource_shapes))
        .route("/resourceShapes/{path}", get(get_resource_shape))
}

/// GET /services/catalog/singleton
pub async fn get_catalog(
    State(state): State<AppState>,
) -> Result<Json<ServiceProviderCatalog>, ApiError> {
    debug!("Getting service provider catalog");

    let catalog = state.catalog_service.catalog().await?;
    Ok(Json(catalog))
}

/// GET /services/serviceProviders/{model}
pub async fn get_service_provider(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> Result<Json<ServiceProvider>, ApiError> {
    debug!(model = %model, "Getting service provider");

    let provider = state.catalog_service.service_provider(&model).await?;
    Ok(Json(provider))
}

/// GET /services/resourceShapes
pub async fn list_resource_shapes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResourceShape>>, ApiError> {
    let shapes = state.catalog_service.resource_shapes()?;
    Ok(Json(shapes))
}

/// GET /services/resourceShapes/{path}
pub async fn get_resource_shape(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<ResourceShape>, ApiError> {
    debug!(shape = %path, "Getting resource shape");

    let shape = state.catalog_service.resource_shape(&path)?;
    Ok(Json(shape))
}
