use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, negotiation_middleware};
use super::oslc;
use super::state::AppState;

/// Create a minimal router without state (for testing)
/// Note: /ready and /services are not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    let services = oslc::create_oslc_router().layer(middleware::from_fn_with_state(
        state.clone(),
        negotiation_middleware,
    ));

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // OSLC discovery
        .nest("/services", services)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::{InMemoryModelRepository, ServiceProviderBuilder};
    use crate::infrastructure::application::{BootstrapOptions, OslcApplication};
    use crate::infrastructure::services::CatalogService;

    const BASE_URI: &str = "http://localhost:8181/services";

    fn test_state(properties: Option<&str>) -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.properties");
        if let Some(content) = properties {
            std::fs::write(&path, content).unwrap();
        }

        let application = Arc::new(
            OslcApplication::bootstrap(&BootstrapOptions {
                properties_path: path,
            })
            .unwrap(),
        );
        let catalog_service = Arc::new(CatalogService::new(
            BASE_URI,
            ServiceProviderBuilder::default(),
            Arc::new(
                InMemoryModelRepository::new()
                    .with_model("plant")
                    .with_model("controller"),
            ),
            application.registry().clone(),
        ));

        (AppState::new(application, catalog_service), dir)
    }

    async fn get(router: Router, uri: &str, accept: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }

        let response = router
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };

        (status, json)
    }

    #[tokio::test]
    async fn test_health_without_state() {
        let (status, json) = get(create_router(), "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_catalog_endpoint() {
        let (state, _dir) = test_state(Some("portNumber=8181\n"));
        let (status, json) = get(
            create_router_with_state(state),
            "/services/catalog/singleton",
            Some("application/json"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["rdf:about"], format!("{}/catalog/singleton", BASE_URI));
        assert_eq!(json["oslc:serviceProvider"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_service_provider_endpoint() {
        let (state, _dir) = test_state(None);
        let (status, json) = get(
            create_router_with_state(state),
            "/services/serviceProviders/plant",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dcterms:title"], "plant");
        assert_eq!(
            json["dcterms:description"],
            "Service provider for Simulink model: plant"
        );
        assert_eq!(json["oslc:details"][0], format!("{}/details", BASE_URI));
        assert_eq!(json["oslc:prefixDefinition"].as_array().unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_unknown_service_provider() {
        let (state, _dir) = test_state(None);
        let (status, json) = get(
            create_router_with_state(state),
            "/services/serviceProviders/unknown",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["oslc:statusCode"], "404");
    }

    #[tokio::test]
    async fn test_resource_shape_endpoints() {
        let (state, _dir) = test_state(None);
        let router = create_router_with_state(state);

        let (status, json) = get(router.clone(), "/services/resourceShapes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 6);

        let (status, json) = get(router.clone(), "/services/resourceShapes/block", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["oslc:describes"], "http://mathworks.com/simulink/rdf#Block");

        let (status, _) = get(router, "/services/resourceShapes/subsystem", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_accept_header() {
        let (state, _dir) = test_state(None);
        let (status, json) = get(
            create_router_with_state(state),
            "/services/catalog/singleton",
            Some("application/rdf+xml"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
        assert_eq!(json["oslc:statusCode"], "406");
    }

    #[tokio::test]
    async fn test_ready_reports_missing_settings() {
        let (state, _dir) = test_state(None);
        let (status, json) = get(create_router_with_state(state), "/ready", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"][0]["status"], "healthy");
        assert_eq!(json["checks"][1]["name"], "simulink_settings");
    }

    #[tokio::test]
    async fn test_ready_with_complete_settings() {
        let (state, _dir) = test_state(Some(
            "simulinkEcoreLocation=C:\\ecore\\simulink.ecore\n\
             simulinkModelsDirectory=C:\\models\n\
             portNumber=8181\n",
        ));
        let (status, json) = get(create_router_with_state(state), "/ready", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }
}
